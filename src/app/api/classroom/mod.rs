use crate::app::api::AppResult;
use crate::app::error::{Error, ErrorExt, ErrorKind};
use crate::classroom::ClassroomId;
use crate::db::classroom::ImageUrlQuery;
use crate::state::State;
use anyhow::Context;
use axum::body;
use axum::extract::{Extension, Path};
use http::{header, Response};

pub async fn get_timetable_image<S: State>(
    Extension(state): Extension<S>,
    Path(classroom_id): Path<ClassroomId>,
) -> AppResult {
    do_get_timetable_image(state, classroom_id).await
}

async fn do_get_timetable_image<S: State>(state: S, classroom_id: ClassroomId) -> AppResult {
    let mut conn = state.connect().await.error(ErrorKind::DbConnectionFailed)?;

    let image = ImageUrlQuery::new(&classroom_id)
        .execute(&mut conn)
        .await
        .context("Failed to fetch timetable image")
        .error(ErrorKind::DbQueryFailed)?
        .ok_or_else(|| Error::from_kind(ErrorKind::ClassroomNotFound))?;

    let body = serde_json::to_string(&image)
        .context("Failed to serialize timetable image")
        .error(ErrorKind::SerializationFailed)?;

    let resp = Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(body::boxed(body::Full::from(body)))
        .context("Failed to build timetable image response")
        .error(ErrorKind::ResponseBuildFailed)?;

    Ok(resp)
}
