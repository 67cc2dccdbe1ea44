use crate::config::{Config, DbConfig};
use crate::db;
use crate::state::State;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgConnection;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Clone)]
pub struct TestState {
    config: Config,
}

impl TestState {
    pub fn new(db: DbConfig) -> Self {
        Self {
            config: Config {
                listener_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
                db,
            },
        }
    }

    /// Nothing listens on port 1, so every connect attempt fails fast.
    pub fn with_unreachable_db() -> Self {
        Self::new(DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "postgres".to_string(),
        })
    }
}

#[async_trait]
impl State for TestState {
    fn config(&self) -> &Config {
        &self.config
    }

    async fn connect(&self) -> Result<PgConnection> {
        db::connect(&self.config.db)
            .await
            .context("Failed to establish DB connection")
    }
}
