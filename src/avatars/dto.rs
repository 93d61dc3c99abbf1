use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateGenerationRequest {
    pub avatar_id: Option<String>,
    pub voice_id: Option<String>,
    pub text: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerationItem {
    pub id: Uuid,
    pub avatar_id: String,
    pub voice_id: String,
    pub text: String,
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerationListResponse {
    pub generations: Vec<GenerationItem>,
}

#[derive(Debug, Serialize)]
pub struct CreatedGenerationResponse {
    pub id: Uuid,
    pub message: String,
}
