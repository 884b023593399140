use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use uuid::Uuid;

use crate::{auth, AppState};

/// Extracts the session token from the Authorization header (Bearer scheme)
/// or the legacy x-auth-token header carrying the bare token
fn extract_token_from_request(parts: &Parts) -> Option<String> {
    if let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = auth_str.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    // Older clients send the token in x-auth-token instead
    if let Some(legacy_header) = parts.headers.get("x-auth-token") {
        if let Ok(token) = legacy_header.to_str() {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    None
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = extract_token_from_request(parts);

        let state = state.clone();

        async move {
            let token = token.ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(
                        json!({"message": "Missing authentication: no Authorization or x-auth-token header"}),
                    ),
                )
            })?;

            let claims = auth::validate_token(&token, &state.config.jwt_secret).map_err(|e| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({"message": format!("Invalid token: {}", e)})),
                )
            })?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({"message": "Invalid token: malformed subject"})),
                )
            })?;

            let user = sqlx::query_as::<_, crate::models::User>(
                r#"SELECT * FROM "Users" WHERE id = $1"#,
            )
            .bind(user_id)
            .fetch_optional(&state.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %user_id, "Database query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({"message": "Server error"})),
                )
            })?
            .ok_or_else(|| {
                tracing::warn!(%user_id, "Token subject no longer exists");
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({"message": "User not found"})),
                )
            })?;

            tracing::debug!(%user_id, "Authenticated request");

            Ok(AuthenticatedUser {
                user_id: user.id,
                name: user.name,
                email: user.email,
            })
        }
    }
}
