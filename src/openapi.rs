use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mindwell API",
        version = "1.0.0",
        description = "Backend API for the Mindwell mental-wellness application"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Auth
        crate::handlers::auth_handler::signup,
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::get_me,

        // Journal
        crate::handlers::journal_handler::get_journal,
        crate::handlers::journal_handler::create_journal_entry,
        crate::handlers::journal_handler::get_journal_entry,
        crate::handlers::journal_handler::update_journal_entry,
        crate::handlers::journal_handler::delete_journal_entry,

        // Meditation
        crate::handlers::meditation_handler::get_meditations,
        crate::handlers::meditation_handler::get_meditation,

        // Mood
        crate::handlers::mood_handler::get_moods,
        crate::handlers::mood_handler::create_mood,

        // Community
        crate::handlers::community_handler::get_posts,
        crate::handlers::community_handler::get_post,
        crate::handlers::community_handler::create_post,
        crate::handlers::community_handler::create_comment,
        crate::handlers::community_handler::like_post,

        // Chat
        crate::handlers::chat_handler::get_history,
        crate::handlers::chat_handler::send_message,
        crate::handlers::chat_handler::reset_chat,
    ),
    components(
        schemas(
            // Core models
            crate::models::User,
            crate::models::JournalEntry,
            crate::models::MoodEntry,
            crate::models::MoodLabel,
            crate::models::Meditation,
            crate::models::Comment,
            crate::models::CommentView,
            crate::models::PostView,
            crate::models::ChatMessage,

            // Input and response models
            crate::models::CreateJournalInput,
            crate::models::UpdateJournalInput,
            crate::models::JournalPage,
            crate::models::JournalMutationResponse,
            crate::models::CreateMoodInput,
            crate::models::MoodWithRecommendations,
            crate::models::CreatePostInput,
            crate::models::CreateCommentInput,
            crate::models::PostPage,
            crate::models::LikeResponse,
            crate::models::SendMessageInput,
            crate::models::ChatMutationResponse,

            // Auth types
            crate::handlers::auth_handler::SignupInput,
            crate::handlers::auth_handler::LoginInput,
            crate::handlers::auth_handler::TokenResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Signup, login and session introspection"),
        (name = "journal", description = "Owner-scoped journal entries"),
        (name = "meditation", description = "Read-only meditation catalog"),
        (name = "mood", description = "Mood tracking and recommendations"),
        (name = "community", description = "Community posts, comments and likes"),
        (name = "chat", description = "AI companion conversation"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}
