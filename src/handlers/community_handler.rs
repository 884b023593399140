use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::types::Json as Jsonb;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    extractors::AuthenticatedUser,
    handlers::total_pages,
    models::{
        post::toggle_like, Comment, CommentView, CreateCommentInput, CreatePostInput,
        LikeResponse, Post, PostPage, PostView,
    },
    AppError, AppResult, AppState,
};

const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCommunityQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
}

/// Display names for the given author ids
async fn author_names(db: &PgPool, ids: &[Uuid]) -> Result<HashMap<Uuid, String>, sqlx::Error> {
    let rows: Vec<(Uuid, String)> =
        sqlx::query_as(r#"SELECT id, name FROM "Users" WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_all(db)
            .await?;

    Ok(rows.into_iter().collect())
}

async fn fetch_post(db: &PgPool, id: Uuid) -> AppResult<Post> {
    sqlx::query_as::<_, Post>(r#"SELECT * FROM "Posts" WHERE id = $1"#)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
}

/// GET /api/community?page=&limit=&category=
#[utoipa::path(
    get,
    path = "/api/community",
    params(GetCommunityQuery),
    responses(
        (status = 200, description = "Community posts, newest first, anonymized per flag", body = PostPage)
    ),
    tag = "community"
)]
pub async fn get_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetCommunityQuery>,
) -> AppResult<Json<PostPage>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);
    let offset = (page - 1) * limit;

    let (posts, total) = if let Some(category) = &query.category {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM "Posts"
            WHERE category = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM "Posts" WHERE category = $1"#,
        )
        .bind(category)
        .fetch_one(&state.db)
        .await?;

        (posts, total)
    } else {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT * FROM "Posts"
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM "Posts""#)
            .fetch_one(&state.db)
            .await?;

        (posts, total)
    };

    let mut ids: Vec<Uuid> = posts.iter().flat_map(|p| p.author_ids()).collect();
    ids.sort();
    ids.dedup();
    let names = author_names(&state.db, &ids).await?;

    let views = posts.into_iter().map(|p| p.into_view(&names)).collect();

    Ok(Json(PostPage {
        posts: views,
        total_pages: total_pages(total, limit),
        current_page: page,
    }))
}

/// GET /api/community/{id}
#[utoipa::path(
    get,
    path = "/api/community/{id}",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with comments, anonymized per flag", body = PostView),
        (status = 404, description = "Post not found")
    ),
    tag = "community"
)]
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PostView>> {
    let post = fetch_post(&state.db, id).await?;
    let names = author_names(&state.db, &post.author_ids()).await?;

    Ok(Json(post.into_view(&names)))
}

/// POST /api/community
#[utoipa::path(
    post,
    path = "/api/community",
    request_body = CreatePostInput,
    responses(
        (status = 201, description = "Post created", body = PostView),
        (status = 422, description = "Missing title or content")
    ),
    tag = "community",
    security(("bearer_auth" = []))
)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreatePostInput>,
) -> AppResult<(StatusCode, Json<PostView>)> {
    if input.title.trim().is_empty() || input.content.trim().is_empty() {
        return Err(AppError::Validation(
            "title and content are required".to_string(),
        ));
    }

    let category = input
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO "Posts" (title, content, category, is_anonymous, author_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(&input.content)
    .bind(&category)
    .bind(input.is_anonymous)
    .bind(auth.user_id)
    .fetch_one(&state.db)
    .await?;

    // The only author so far is the caller; no lookup query needed
    let names = HashMap::from([(auth.user_id, auth.name)]);

    Ok((StatusCode::CREATED, Json(post.into_view(&names))))
}

/// POST /api/community/{id}/comments
#[utoipa::path(
    post,
    path = "/api/community/{id}/comments",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    request_body = CreateCommentInput,
    responses(
        (status = 201, description = "The new comment, anonymized per its flag", body = CommentView),
        (status = 404, description = "Post not found"),
        (status = 422, description = "Missing content")
    ),
    tag = "community",
    security(("bearer_auth" = []))
)]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateCommentInput>,
) -> AppResult<(StatusCode, Json<CommentView>)> {
    if input.content.trim().is_empty() {
        return Err(AppError::Validation("content is required".to_string()));
    }

    // Existence check keeps the append a plain not-found instead of a no-op
    fetch_post(&state.db, id).await?;

    let comment = Comment {
        id: Uuid::new_v4(),
        content: input.content,
        is_anonymous: input.is_anonymous,
        author_id: auth.user_id,
        created_at: Utc::now(),
    };

    sqlx::query(r#"UPDATE "Posts" SET comments = comments || $2 WHERE id = $1"#)
        .bind(id)
        .bind(Jsonb(&comment))
        .execute(&state.db)
        .await?;

    let names = HashMap::from([(auth.user_id, auth.name)]);
    let view = comment.into_view(&names);

    Ok((StatusCode::CREATED, Json(view)))
}

/// POST /api/community/{id}/like
#[utoipa::path(
    post,
    path = "/api/community/{id}/like",
    params(
        ("id" = Uuid, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Like toggled", body = LikeResponse),
        (status = 404, description = "Post not found")
    ),
    tag = "community",
    security(("bearer_auth" = []))
)]
pub async fn like_post(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LikeResponse>> {
    let post = fetch_post(&state.db, id).await?;

    let mut likes = post.likes;
    let user_liked = toggle_like(&mut likes, auth.user_id);

    sqlx::query(r#"UPDATE "Posts" SET likes = $2 WHERE id = $1"#)
        .bind(id)
        .bind(&likes)
        .execute(&state.db)
        .await?;

    Ok(Json(LikeResponse {
        likes: likes.len() as i64,
        user_liked,
    }))
}
