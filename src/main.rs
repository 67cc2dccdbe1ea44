use ::tracing::info;
use anyhow::{Context, Result};

mod app;
mod classroom;
mod config;
mod db;
mod state;
#[cfg(test)]
mod test_helpers;
mod tracing;

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "dotenv")]
    dotenv::dotenv()?;

    let _guard = tracing::init()?;

    info!(
        "Launching {}, version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = config::load().context("Failed to load config")?;
    app::run(config).await
}
