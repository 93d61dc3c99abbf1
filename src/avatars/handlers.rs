use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    avatars::{
        dto::{
            CreateGenerationRequest, CreatedGenerationResponse, GenerationItem,
            GenerationListResponse,
        },
        repo::{AvatarGeneration, NewGeneration},
    },
    error::AppError,
    state::AppState,
};

pub fn generation_routes() -> Router<AppState> {
    Router::new().route(
        "/avatar-generations",
        get(list_generations).post(create_generation),
    )
}

#[instrument(skip(state))]
pub async fn list_generations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<GenerationListResponse>, AppError> {
    let generations = AvatarGeneration::list_by_user(&state.db, user_id)
        .await?
        .into_iter()
        .map(|g| GenerationItem {
            id: g.id,
            avatar_id: g.avatar_id,
            voice_id: g.voice_id,
            text: g.text,
            video_url: g.video_url,
        })
        .collect();
    Ok(Json(GenerationListResponse { generations }))
}

#[instrument(skip(state, payload))]
pub async fn create_generation(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateGenerationRequest>,
) -> Result<Json<CreatedGenerationResponse>, AppError> {
    let id = AvatarGeneration::create(
        &state.db,
        user_id,
        NewGeneration {
            avatar_id: payload.avatar_id,
            voice_id: payload.voice_id,
            text: payload.text,
            video_url: payload.video_url,
        },
    )
    .await?;

    info!(generation_id = %id, user_id = %user_id, "avatar generation created");
    Ok(Json(CreatedGenerationResponse {
        id,
        message: "Avatar generation created successfully".into(),
    }))
}
