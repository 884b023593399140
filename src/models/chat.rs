use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const SENDER_USER: &str = "user";
pub const SENDER_AI: &str = "ai";

/// One turn of a user's conversation with the companion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub sender: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
