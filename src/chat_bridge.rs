//! Bridge to the language-model provider behind the chat companion.
//!
//! Forwards the stored conversation plus the new user message to an
//! OpenAI-compatible chat-completions endpoint and extracts the reply text.

use serde_json::{json, Value};

use crate::models::{chat, ChatMessage};
use crate::{AppConfig, AppError};

const SYSTEM_PROMPT: &str = "You are a supportive mental-wellness companion. \
    Listen with empathy, keep replies short and encouraging, and suggest \
    simple grounding or mindfulness techniques where they fit. You are not a \
    therapist and do not give medical advice; encourage professional help \
    for anything serious.";

/// Most recent turns forwarded as context with each request
const HISTORY_WINDOW: usize = 20;

pub async fn generate_reply(
    config: &AppConfig,
    history: &[ChatMessage],
    message: &str,
) -> Result<String, AppError> {
    let mut messages = vec![json!({"role": "system", "content": SYSTEM_PROMPT})];

    let recent = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[recent..] {
        let role = if turn.sender == chat::SENDER_AI {
            "assistant"
        } else {
            "user"
        };
        messages.push(json!({"role": role, "content": turn.message}));
    }
    messages.push(json!({"role": "user", "content": message}));

    let client = reqwest::Client::new();
    let response = client
        .post(&config.chat_api_url)
        .header("Authorization", format!("Bearer {}", config.chat_api_key))
        .header("Content-Type", "application/json")
        .json(&json!({
            "model": config.chat_model,
            "messages": messages,
        }))
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Chat provider request failed");
            AppError::Internal(format!("Chat provider request failed: {}", e))
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = %status, body, "Chat provider returned error");
        return Err(AppError::Internal(format!(
            "Chat provider error: {} - {}",
            status, body
        )));
    }

    let completion: Value = response.json().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to parse chat provider response");
        AppError::Internal(format!("Failed to parse chat provider response: {}", e))
    })?;

    let reply = completion
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| {
            tracing::error!("No completion content in chat provider response");
            AppError::Internal("No completion content in chat provider response".to_string())
        })?
        .trim()
        .to_string();

    Ok(reply)
}
