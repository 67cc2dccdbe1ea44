use crate::app::api;
use crate::state::State;
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn new<S: State>(state: S) -> Router {
    api_router::<S>().layer(Extension(state))
}

fn api_router<S: State>() -> Router {
    Router::new()
        .route("/healthz", get(api::healthz))
        .route(
            "/api/timetable-image/:classroom_id",
            get(api::classroom::get_timetable_image::<S>),
        )
        .layer(cors_layer())
}

// Browser clients are served from other origins, so the API answers any of
// them. GET only, no credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
