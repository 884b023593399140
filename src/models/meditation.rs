use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A guided meditation in the read-only catalog. Every field is required at
/// seed time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Meditation {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
