use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    chat_bridge,
    extractors::AuthenticatedUser,
    models::{chat, ChatMessage, ChatMutationResponse, SendMessageInput},
    AppError, AppResult, AppState,
};

const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";

async fn fetch_history(
    db: &sqlx::PgPool,
    user_id: uuid::Uuid,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT * FROM "ChatMessages"
        WHERE user_id = $1
        ORDER BY timestamp
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

async fn insert_message(
    db: &sqlx::PgPool,
    user_id: uuid::Uuid,
    sender: &str,
    message: &str,
) -> Result<ChatMessage, sqlx::Error> {
    sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO "ChatMessages" (user_id, sender, message)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(sender)
    .bind(message)
    .fetch_one(db)
    .await
}

/// GET /api/chat
#[utoipa::path(
    get,
    path = "/api/chat",
    responses(
        (status = 200, description = "Caller's conversation history, oldest first", body = Vec<ChatMessage>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn get_history(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = fetch_history(&state.db, auth.user_id).await?;

    Ok(Json(messages))
}

/// POST /api/chat
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = SendMessageInput,
    responses(
        (status = 200, description = "The companion's reply turn", body = ChatMessage),
        (status = 422, description = "Empty message")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<SendMessageInput>,
) -> AppResult<Json<ChatMessage>> {
    if input.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    let history = fetch_history(&state.db, auth.user_id).await?;

    insert_message(&state.db, auth.user_id, chat::SENDER_USER, &input.message).await?;

    // Provider failures degrade to a persisted fallback turn so the
    // conversation never ends up one-sided
    let reply = match chat_bridge::generate_reply(&state.config, &history, &input.message).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, user_id = %auth.user_id, "Chat bridge failed");
            FALLBACK_REPLY.to_string()
        }
    };

    let ai_message = insert_message(&state.db, auth.user_id, chat::SENDER_AI, &reply).await?;

    Ok(Json(ai_message))
}

/// POST /api/chat/reset
#[utoipa::path(
    post,
    path = "/api/chat/reset",
    responses(
        (status = 200, description = "Conversation history cleared", body = ChatMutationResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "chat",
    security(("bearer_auth" = []))
)]
pub async fn reset_chat(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<ChatMutationResponse>> {
    sqlx::query(r#"DELETE FROM "ChatMessages" WHERE user_id = $1"#)
        .bind(auth.user_id)
        .execute(&state.db)
        .await?;

    Ok(Json(ChatMutationResponse {
        success: true,
        message: Some("Chat history cleared".to_string()),
    }))
}
