use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::journal::JournalEntry;

/// Input for creating a journal entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateJournalInput {
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
}

/// Input for updating a journal entry; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateJournalInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
}

/// Paginated journal listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JournalPage {
    pub entries: Vec<JournalEntry>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalMutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
