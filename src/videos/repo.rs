use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub original_url: Option<String>,
    pub processed_url: Option<String>,
    pub target_language: String,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Insert payload. `name` and `target_language` stay `Option` so a missing
/// field reaches the NOT NULL constraint instead of being validated here.
#[derive(Debug)]
pub struct NewVideo {
    pub name: Option<String>,
    pub original_url: Option<String>,
    pub processed_url: Option<String>,
    pub target_language: Option<String>,
    pub status: String,
}

impl Video {
    pub async fn create(db: &SqlitePool, user_id: Uuid, new: NewVideo) -> sqlx::Result<Uuid> {
        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        sqlx::query(
            r#"
            INSERT INTO videos (id, user_id, name, original_url, processed_url,
                                target_language, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(new.name)
        .bind(new.original_url)
        .bind(new.processed_url)
        .bind(new.target_language)
        .bind(new.status)
        .bind(now)
        .bind(now)
        .execute(db)
        .await?;
        Ok(id)
    }

    /// All of one user's rows, in whatever order the store returns them.
    pub async fn list_by_user(db: &SqlitePool, user_id: Uuid) -> sqlx::Result<Vec<Video>> {
        let rows = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, name, original_url, processed_url,
                   target_language, status, created_at, updated_at
            FROM videos
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
