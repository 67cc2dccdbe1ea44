use crate::config::Config;
use crate::state::{AppState, State};
use anyhow::Result;
use tracing::info;

pub mod api;
pub mod error;
pub mod router;

pub(crate) async fn run(config: Config) -> Result<()> {
    let state = AppState::new(config);
    let listener_address = state.config().listener_address;

    let app = router::new(state);

    info!("Server is listening on {}", listener_address);

    axum::Server::bind(&listener_address)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
