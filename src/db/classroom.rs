use crate::classroom::ClassroomId;
use serde_derive::Serialize;
use sqlx::PgConnection;

/// The stored URL may be NULL; it serializes as JSON `null` in that case.
#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct TimetableImage {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

pub struct ImageUrlQuery<'a> {
    classroom_id: &'a ClassroomId,
}

impl<'a> ImageUrlQuery<'a> {
    pub fn new(classroom_id: &'a ClassroomId) -> Self {
        Self { classroom_id }
    }

    pub async fn execute(&self, conn: &mut PgConnection) -> sqlx::Result<Option<TimetableImage>> {
        sqlx::query_as::<_, TimetableImage>(
            r#"
            SELECT timetable_image_url AS image_url
            FROM classrooms
            WHERE classroom_id = $1
            LIMIT 1
            "#,
        )
        .bind(self.classroom_id)
        .fetch_optional(conn)
        .await
    }
}
