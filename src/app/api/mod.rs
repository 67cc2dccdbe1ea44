use axum::response::Response;

pub mod classroom;

pub type AppError = crate::app::error::Error;
pub type AppResult = Result<Response, AppError>;

pub async fn healthz() -> &'static str {
    "Ok"
}
