use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    extractors::AuthenticatedUser,
    handlers::total_pages,
    models::{
        CreateJournalInput, JournalEntry, JournalMutationResponse, JournalPage, UpdateJournalInput,
    },
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetJournalQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// GET /api/journal?page=&limit=
#[utoipa::path(
    get,
    path = "/api/journal",
    params(GetJournalQuery),
    responses(
        (status = 200, description = "Caller's journal entries, newest first", body = JournalPage),
        (status = 401, description = "Unauthorized")
    ),
    tag = "journal",
    security(("bearer_auth" = []))
)]
pub async fn get_journal(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Query(query): Query<GetJournalQuery>,
) -> AppResult<Json<JournalPage>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);

    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT * FROM "Journals"
        WHERE user_id = $1
        ORDER BY date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(auth.user_id)
    .bind(limit)
    .bind((page - 1) * limit)
    .fetch_all(&state.db)
    .await?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM "Journals" WHERE user_id = $1"#,
    )
    .bind(auth.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(JournalPage {
        entries,
        total_pages: total_pages(total, limit),
        current_page: page,
    }))
}

/// POST /api/journal
#[utoipa::path(
    post,
    path = "/api/journal",
    request_body = CreateJournalInput,
    responses(
        (status = 200, description = "Journal entry created", body = JournalEntry),
        (status = 422, description = "Missing title or content")
    ),
    tag = "journal",
    security(("bearer_auth" = []))
)]
pub async fn create_journal_entry(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateJournalInput>,
) -> AppResult<Json<JournalEntry>> {
    if input.title.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::Validation(
            "title and content are required".to_string(),
        ));
    }

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO "Journals" (user_id, title, content, mood)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(auth.user_id)
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.mood)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

/// GET /api/journal/{id}
#[utoipa::path(
    get,
    path = "/api/journal/{id}",
    params(
        ("id" = Uuid, Path, description = "Journal entry ID")
    ),
    responses(
        (status = 200, description = "Journal entry", body = JournalEntry),
        (status = 404, description = "Entry not found or not owned by the caller")
    ),
    tag = "journal",
    security(("bearer_auth" = []))
)]
pub async fn get_journal_entry(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JournalEntry>> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"SELECT * FROM "Journals" WHERE id = $1 AND user_id = $2"#,
    )
    .bind(id)
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Journal entry not found".to_string()))?;

    Ok(Json(entry))
}

/// PUT /api/journal/{id}
#[utoipa::path(
    put,
    path = "/api/journal/{id}",
    params(
        ("id" = Uuid, Path, description = "Journal entry ID")
    ),
    request_body = UpdateJournalInput,
    responses(
        (status = 200, description = "Updated journal entry", body = JournalEntry),
        (status = 404, description = "Entry not found or not owned by the caller")
    ),
    tag = "journal",
    security(("bearer_auth" = []))
)]
pub async fn update_journal_entry(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateJournalInput>,
) -> AppResult<Json<JournalEntry>> {
    if matches!(&input.title, Some(t) if t.trim().is_empty())
        || matches!(&input.content, Some(c) if c.trim().is_empty())
    {
        return Err(AppError::Validation(
            "title and content cannot be empty".to_string(),
        ));
    }

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        UPDATE "Journals"
        SET title = COALESCE($3, title),
            content = COALESCE($4, content),
            mood = COALESCE($5, mood)
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(auth.user_id)
    .bind(&input.title)
    .bind(&input.content)
    .bind(&input.mood)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Journal entry not found".to_string()))?;

    Ok(Json(entry))
}

/// DELETE /api/journal/{id}
#[utoipa::path(
    delete,
    path = "/api/journal/{id}",
    params(
        ("id" = Uuid, Path, description = "Journal entry ID")
    ),
    responses(
        (status = 200, description = "Journal entry deleted", body = JournalMutationResponse),
        (status = 404, description = "Entry not found or not owned by the caller")
    ),
    tag = "journal",
    security(("bearer_auth" = []))
)]
pub async fn delete_journal_entry(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JournalMutationResponse>> {
    let result = sqlx::query(r#"DELETE FROM "Journals" WHERE id = $1 AND user_id = $2"#)
        .bind(id)
        .bind(auth.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Journal entry not found".to_string()));
    }

    Ok(Json(JournalMutationResponse {
        success: true,
        message: Some("Journal entry deleted".to_string()),
    }))
}
