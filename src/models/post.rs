use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

pub const ANONYMOUS_NAME: &str = "Anonymous";

/// A community post as stored: comments embedded in a JSONB column, the
/// liker set as a UUID array. Author identity is always persisted; hiding it
/// happens only in the outbound views below.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_anonymous: bool,
    pub author_id: Uuid,
    pub comments: Json<Vec<Comment>>,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A comment embedded in a post document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub is_anonymous: bool,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Author identity at the presentation boundary. Computed at read time,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorView {
    Identified { name: String },
    Anonymous,
}

impl AuthorView {
    pub fn name(&self) -> &str {
        match self {
            AuthorView::Identified { name } => name,
            AuthorView::Anonymous => ANONYMOUS_NAME,
        }
    }
}

// Wire shape is `{ "name": ... }` for both variants
impl Serialize for AuthorView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AuthorView", 1)?;
        state.serialize_field("name", self.name())?;
        state.end()
    }
}

/// Response shape of a comment, author resolved and possibly redacted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub is_anonymous: bool,
    #[schema(value_type = Object)]
    pub author: AuthorView,
    pub created_at: DateTime<Utc>,
}

/// Response shape of a post with its embedded comments.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_anonymous: bool,
    #[schema(value_type = Object)]
    pub author: AuthorView,
    pub comments: Vec<CommentView>,
    pub likes: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

fn resolve_name(names: &HashMap<Uuid, String>, author_id: Uuid) -> String {
    names
        .get(&author_id)
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string())
}

impl Comment {
    pub fn into_view(self, names: &HashMap<Uuid, String>) -> CommentView {
        let name = resolve_name(names, self.author_id);
        CommentView {
            id: self.id,
            content: self.content,
            is_anonymous: self.is_anonymous,
            author: AuthorView::Identified { name },
            created_at: self.created_at,
        }
        .redacted()
    }
}

impl CommentView {
    /// Replace the author with the placeholder when the comment is flagged
    /// anonymous. Idempotent.
    pub fn redacted(mut self) -> Self {
        if self.is_anonymous {
            self.author = AuthorView::Anonymous;
        }
        self
    }
}

impl Post {
    /// Build the outbound representation, resolving author names through the
    /// given id→name map and redacting per the anonymity flags.
    pub fn into_view(self, names: &HashMap<Uuid, String>) -> PostView {
        let name = resolve_name(names, self.author_id);
        let comments = self
            .comments
            .0
            .into_iter()
            .map(|c| c.into_view(names))
            .collect();

        PostView {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            is_anonymous: self.is_anonymous,
            author: AuthorView::Identified { name },
            comments,
            likes: self.likes,
            created_at: self.created_at,
        }
        .redacted()
    }

    /// Author ids referenced by the post and its comments, for the name
    /// lookup query.
    pub fn author_ids(&self) -> Vec<Uuid> {
        let mut ids = vec![self.author_id];
        ids.extend(self.comments.0.iter().map(|c| c.author_id));
        ids.sort();
        ids.dedup();
        ids
    }
}

impl PostView {
    /// Apply the anonymization transform to the post and every embedded
    /// comment. Idempotent.
    pub fn redacted(mut self) -> Self {
        if self.is_anonymous {
            self.author = AuthorView::Anonymous;
        }
        self.comments = self.comments.into_iter().map(CommentView::redacted).collect();
        self
    }
}

/// Toggle `user_id` in the liker set. Returns whether the user likes the
/// post after the toggle.
pub fn toggle_like(likes: &mut Vec<Uuid>, user_id: Uuid) -> bool {
    if let Some(pos) = likes.iter().position(|id| *id == user_id) {
        likes.remove(pos);
        false
    } else {
        likes.push(user_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view(post_anonymous: bool, comment_anonymous: bool) -> PostView {
        PostView {
            id: Uuid::new_v4(),
            title: "Sleep trouble".to_string(),
            content: "Can't wind down at night".to_string(),
            category: "General".to_string(),
            is_anonymous: post_anonymous,
            author: AuthorView::Identified {
                name: "Asha".to_string(),
            },
            comments: vec![CommentView {
                id: Uuid::new_v4(),
                content: "Same here".to_string(),
                is_anonymous: comment_anonymous,
                author: AuthorView::Identified {
                    name: "Milo".to_string(),
                },
                created_at: Utc::now(),
            }],
            likes: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_redaction_replaces_flagged_authors() {
        let view = sample_view(true, true).redacted();

        assert_eq!(view.author, AuthorView::Anonymous);
        assert_eq!(view.comments[0].author, AuthorView::Anonymous);
        assert_eq!(view.author.name(), ANONYMOUS_NAME);
    }

    #[test]
    fn test_redaction_leaves_identified_authors() {
        let view = sample_view(false, false).redacted();

        assert_eq!(view.author.name(), "Asha");
        assert_eq!(view.comments[0].author.name(), "Milo");
    }

    #[test]
    fn test_redaction_is_independent_per_flag() {
        let view = sample_view(false, true).redacted();

        assert_eq!(view.author.name(), "Asha");
        assert_eq!(view.comments[0].author, AuthorView::Anonymous);
    }

    #[test]
    fn test_redaction_is_idempotent() {
        let once = sample_view(true, false).redacted();
        let twice = once.clone().redacted();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_author_view_serializes_as_name_object() {
        let identified = serde_json::to_value(AuthorView::Identified {
            name: "Asha".to_string(),
        })
        .unwrap();
        let anonymous = serde_json::to_value(AuthorView::Anonymous).unwrap();

        assert_eq!(identified, serde_json::json!({"name": "Asha"}));
        assert_eq!(anonymous, serde_json::json!({"name": "Anonymous"}));
    }

    #[test]
    fn test_toggle_like_adds_then_removes() {
        let user = Uuid::new_v4();
        let mut likes = vec![Uuid::new_v4()];
        let original = likes.clone();

        assert!(toggle_like(&mut likes, user));
        assert_eq!(likes.len(), 2);

        assert!(!toggle_like(&mut likes, user));
        assert_eq!(likes, original);
    }

    #[test]
    fn test_toggle_like_never_duplicates() {
        let user = Uuid::new_v4();
        let mut likes = vec![];

        toggle_like(&mut likes, user);
        toggle_like(&mut likes, user);
        toggle_like(&mut likes, user);

        assert_eq!(likes, vec![user]);
    }
}
