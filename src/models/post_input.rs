use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::post::PostView;

/// Input for creating a community post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    #[serde(rename = "isAnonymous", default)]
    pub is_anonymous: bool,
    pub category: Option<String>,
}

/// Input for commenting on a post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentInput {
    pub content: String,
    #[serde(rename = "isAnonymous", default)]
    pub is_anonymous: bool,
}

/// Paginated community listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostPage {
    pub posts: Vec<PostView>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
}

/// Result of a like toggle: the new count and whether the caller currently
/// likes the post.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LikeResponse {
    pub likes: i64,
    #[serde(rename = "userLiked")]
    pub user_liked: bool,
}
