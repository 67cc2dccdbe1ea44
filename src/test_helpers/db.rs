use sqlx::{Connection, PgConnection};

/// Hands out request-style dedicated connections to the test database and
/// makes sure the classrooms table exists there. The service itself never
/// touches the schema.
#[derive(Clone)]
pub struct TestDb {
    url: String,
}

impl TestDb {
    pub async fn new(url: &str) -> Self {
        let mut conn = PgConnection::connect(url)
            .await
            .expect("Failed to connect to the DB");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS classrooms (
                classroom_id TEXT PRIMARY KEY,
                timetable_image_url TEXT
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .expect("Failed to create classrooms table");

        Self {
            url: url.to_owned(),
        }
    }

    pub async fn conn(&self) -> PgConnection {
        PgConnection::connect(&self.url)
            .await
            .expect("Failed to connect to the DB")
    }
}
