use crate::config::DbConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgConnection};

pub mod classroom;

/// Opens a dedicated connection for a single request. The connection is
/// exclusively owned by the caller and closes when dropped, so every exit
/// path releases it. Connections are never shared or reused across requests.
pub async fn connect(config: &DbConfig) -> sqlx::Result<PgConnection> {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
        .connect()
        .await
}
