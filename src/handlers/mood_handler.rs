use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    models::{CreateMoodInput, MoodEntry, MoodLabel, MoodWithRecommendations},
    recommend, AppError, AppResult, AppState,
};

/// GET /api/mood
#[utoipa::path(
    get,
    path = "/api/mood",
    responses(
        (status = 200, description = "Caller's mood entries, newest first", body = Vec<MoodEntry>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "mood",
    security(("bearer_auth" = []))
)]
pub async fn get_moods(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let moods = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM "Moods"
        WHERE user_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(moods))
}

/// POST /api/mood
#[utoipa::path(
    post,
    path = "/api/mood",
    request_body = CreateMoodInput,
    responses(
        (status = 200, description = "Mood recorded, with meditation recommendations", body = MoodWithRecommendations),
        (status = 422, description = "Unknown mood label")
    ),
    tag = "mood",
    security(("bearer_auth" = []))
)]
pub async fn create_mood(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateMoodInput>,
) -> AppResult<Json<MoodWithRecommendations>> {
    if MoodLabel::parse(&input.mood).is_none() {
        return Err(AppError::Validation(
            "mood must be one of: happy, neutral, sad, anxious".to_string(),
        ));
    }

    let mood = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO "Moods" (user_id, mood, note)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(auth.user_id)
    .bind(&input.mood)
    .bind(&input.note)
    .fetch_one(&state.db)
    .await?;

    // Recommendations are best-effort: a failed catalog query degrades to an
    // empty list, the mood entry is already persisted
    let recommendations = match recommend::recommended_for_mood(&state.db, &mood.mood).await {
        Ok(meditations) => meditations,
        Err(e) => {
            tracing::error!(error = %e, mood = %mood.mood, "Failed to fetch recommendations");
            Vec::new()
        }
    };

    Ok(Json(MoodWithRecommendations {
        mood,
        recommendations,
    }))
}
