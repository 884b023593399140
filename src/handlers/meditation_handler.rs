use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{models::Meditation, AppError, AppResult, AppState};

/// GET /api/meditation
#[utoipa::path(
    get,
    path = "/api/meditation",
    responses(
        (status = 200, description = "Full meditation catalog", body = Vec<Meditation>)
    ),
    tag = "meditation"
)]
pub async fn get_meditations(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<Meditation>>> {
    let meditations = sqlx::query_as::<_, Meditation>(r#"SELECT * FROM "Meditations""#)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(meditations))
}

/// GET /api/meditation/{id}
#[utoipa::path(
    get,
    path = "/api/meditation/{id}",
    params(
        ("id" = Uuid, Path, description = "Meditation ID")
    ),
    responses(
        (status = 200, description = "Meditation", body = Meditation),
        (status = 404, description = "Meditation not found")
    ),
    tag = "meditation"
)]
pub async fn get_meditation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Meditation>> {
    let meditation = sqlx::query_as::<_, Meditation>(
        r#"SELECT * FROM "Meditations" WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Meditation not found".to_string()))?;

    Ok(Json(meditation))
}
