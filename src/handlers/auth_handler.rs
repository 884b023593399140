use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    auth,
    extractors::AuthenticatedUser,
    models::User,
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/auth/signup
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupInput,
    responses(
        (status = 200, description = "Account created, session token returned", body = TokenResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Missing required fields")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SignupInput>,
) -> AppResult<Json<TokenResponse>> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Validation(
            "name, email and password are required".to_string(),
        ));
    }

    let existing = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM "Users" WHERE LOWER(email) = LOWER($1)"#,
    )
    .bind(&input.email)
    .fetch_one(&state.db)
    .await?;

    if existing > 0 {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = auth::hash_password(&input.password)?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO "Users" (name, email, password_hash)
        VALUES ($1, LOWER($2), $3)
        RETURNING *
        "#,
    )
    .bind(input.name.trim())
    .bind(input.email.trim())
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(user_id = %user.id, "New user signed up");

    let token = auth::sign_token(user.id, &user.email, &state.config.jwt_secret)
        .map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginInput,
    responses(
        (status = 200, description = "Session token returned", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<TokenResponse>> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let user = sqlx::query_as::<_, User>(
        r#"SELECT * FROM "Users" WHERE LOWER(email) = LOWER($1)"#,
    )
    .bind(input.email.trim())
    .fetch_optional(&state.db)
    .await?;

    // Same response for unknown email and wrong password
    let user = user.ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    if !auth::verify_password(&input.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = auth::sign_token(user.id, &user.email, &state.config.jwt_secret)
        .map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current authenticated user", body = User),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth",
    security(("bearer_auth" = []))
)]
pub async fn get_me(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<User>> {
    let user = sqlx::query_as::<_, User>(r#"SELECT * FROM "Users" WHERE id = $1"#)
        .bind(auth.user_id)
        .fetch_one(&state.db)
        .await?;

    Ok(Json(user))
}
