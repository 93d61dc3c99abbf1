use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct AvatarGeneration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub avatar_id: String,
    pub voice_id: String,
    pub text: String,
    pub video_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Insert payload; required fields reach the NOT NULL constraints as-is.
#[derive(Debug)]
pub struct NewGeneration {
    pub avatar_id: Option<String>,
    pub voice_id: Option<String>,
    pub text: Option<String>,
    pub video_url: Option<String>,
}

impl AvatarGeneration {
    pub async fn create(
        db: &SqlitePool,
        user_id: Uuid,
        new: NewGeneration,
    ) -> sqlx::Result<Uuid> {
        let id = Uuid::new_v4();
        let now = OffsetDateTime::now_utc();
        sqlx::query(
            r#"
            INSERT INTO avatar_generations (id, user_id, avatar_id, voice_id,
                                            text, video_url, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(new.avatar_id)
        .bind(new.voice_id)
        .bind(new.text)
        .bind(new.video_url)
        .bind(now)
        .bind(now)
        .execute(db)
        .await?;
        Ok(id)
    }

    /// All of one user's rows, in whatever order the store returns them.
    pub async fn list_by_user(
        db: &SqlitePool,
        user_id: Uuid,
    ) -> sqlx::Result<Vec<AvatarGeneration>> {
        let rows = sqlx::query_as::<_, AvatarGeneration>(
            r#"
            SELECT id, user_id, avatar_id, voice_id, text, video_url,
                   created_at, updated_at
            FROM avatar_generations
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
