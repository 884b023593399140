use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::meditation::Meditation;
use super::mood::MoodEntry;

/// Input for recording a mood
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMoodInput {
    pub mood: String,
    pub note: Option<String>,
}

/// Response for a recorded mood: the stored entry plus up to three
/// meditations matched to the reported mood.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MoodWithRecommendations {
    pub mood: MoodEntry,
    pub recommendations: Vec<Meditation>,
}
