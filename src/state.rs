use crate::config::Config;
use crate::db;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::sync::Arc;

#[async_trait]
pub trait State: Send + Sync + Clone + 'static {
    fn config(&self) -> &Config;
    async fn connect(&self) -> Result<PgConnection>;
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(InnerState { config }),
        }
    }
}

#[async_trait]
impl State for AppState {
    fn config(&self) -> &Config {
        &self.inner.config
    }

    async fn connect(&self) -> Result<PgConnection> {
        db::connect(&self.inner.config.db)
            .await
            .context("Failed to establish DB connection")
    }
}
