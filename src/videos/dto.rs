use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for creating a video job. Required fields are still
/// `Option` here: an absent one is inserted as NULL and rejected by the
/// table constraint, not by the handler.
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub name: Option<String>,
    pub original_url: Option<String>,
    pub processed_url: Option<String>,
    pub target_language: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoItem {
    pub id: Uuid,
    pub name: String,
    pub original_url: Option<String>,
    pub processed_url: Option<String>,
    pub target_language: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoItem>,
}

#[derive(Debug, Serialize)]
pub struct CreatedVideoResponse {
    pub id: Uuid,
    pub message: String,
}
