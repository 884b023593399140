use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for sending a chat message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMessageInput {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatMutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
