pub mod chat;
pub mod chat_input;
pub mod journal;
pub mod journal_input;
pub mod meditation;
pub mod mood;
pub mod mood_input;
pub mod post;
pub mod post_input;
pub mod user;

pub use chat::ChatMessage;
pub use chat_input::{ChatMutationResponse, SendMessageInput};
pub use journal::JournalEntry;
pub use journal_input::{CreateJournalInput, JournalMutationResponse, JournalPage, UpdateJournalInput};
pub use meditation::Meditation;
pub use mood::{MoodEntry, MoodLabel};
pub use mood_input::{CreateMoodInput, MoodWithRecommendations};
pub use post::{AuthorView, Comment, CommentView, Post, PostView};
pub use post_input::{CreateCommentInput, CreatePostInput, LikeResponse, PostPage};
pub use user::User;
