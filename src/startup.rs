use axum::{
    http::{header, HeaderValue, Method},
    response::Html,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:5173".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            "x-auth-token".parse().unwrap(),
        ]);

    // Auth routes
    let auth_routes = Router::new()
        .route("/signup", post(handlers::auth_handler::signup))
        .route("/login", post(handlers::auth_handler::login))
        .route("/me", get(handlers::auth_handler::get_me));

    // Journal routes
    let journal_routes = Router::new()
        .route("/", get(handlers::journal_handler::get_journal))
        .route("/", post(handlers::journal_handler::create_journal_entry))
        .route("/{id}", get(handlers::journal_handler::get_journal_entry))
        .route("/{id}", put(handlers::journal_handler::update_journal_entry))
        .route("/{id}", delete(handlers::journal_handler::delete_journal_entry));

    // Meditation routes (public catalog)
    let meditation_routes = Router::new()
        .route("/", get(handlers::meditation_handler::get_meditations))
        .route("/{id}", get(handlers::meditation_handler::get_meditation));

    // Mood routes
    let mood_routes = Router::new()
        .route("/", get(handlers::mood_handler::get_moods))
        .route("/", post(handlers::mood_handler::create_mood));

    // Community routes
    let community_routes = Router::new()
        .route("/", get(handlers::community_handler::get_posts))
        .route("/", post(handlers::community_handler::create_post))
        .route("/{id}", get(handlers::community_handler::get_post))
        .route("/{id}/like", post(handlers::community_handler::like_post))
        .route("/{id}/comments", post(handlers::community_handler::create_comment));

    // Chat routes
    let chat_routes = Router::new()
        .route("/", get(handlers::chat_handler::get_history))
        .route("/", post(handlers::chat_handler::send_message))
        .route("/reset", post(handlers::chat_handler::reset_chat));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/auth", auth_routes)
        .nest("/api/journal", journal_routes)
        .nest("/api/meditation", meditation_routes)
        .nest("/api/mood", mood_routes)
        .nest("/api/community", community_routes)
        .nest("/api/chat", chat_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(axum::middleware::from_fn(middleware::metrics_middleware))
                .layer(cors),
        )
        .with_state(state)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Mindwell API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}
