use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    state::AppState,
    videos::{
        dto::{CreateVideoRequest, CreatedVideoResponse, VideoItem, VideoListResponse},
        repo::{NewVideo, Video},
    },
};

pub fn video_routes() -> Router<AppState> {
    Router::new().route("/videos", get(list_videos).post(create_video))
}

#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<VideoListResponse>, AppError> {
    let videos = Video::list_by_user(&state.db, user_id)
        .await?
        .into_iter()
        .map(|v| VideoItem {
            id: v.id,
            name: v.name,
            original_url: v.original_url,
            processed_url: v.processed_url,
            target_language: v.target_language,
            status: v.status,
        })
        .collect();
    Ok(Json(VideoListResponse { videos }))
}

#[instrument(skip(state, payload))]
pub async fn create_video(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<Json<CreatedVideoResponse>, AppError> {
    let id = Video::create(
        &state.db,
        user_id,
        NewVideo {
            name: payload.name,
            original_url: payload.original_url,
            processed_url: payload.processed_url,
            target_language: payload.target_language,
            status: payload.status.unwrap_or_else(|| "pending".into()),
        },
    )
    .await?;

    info!(video_id = %id, user_id = %user_id, "video created");
    Ok(Json(CreatedVideoResponse {
        id,
        message: "Video created successfully".into(),
    }))
}
