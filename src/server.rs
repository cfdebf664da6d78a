use crate::arc::StoryRequest;
use crate::error::{ArcError, Stage};
use crate::orchestrator::ArcOrchestrator;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Any origin, any method, any header. Narrow this when serving beyond a trusted frontend.
pub fn build_router(orchestrator: ArcOrchestrator) -> Router {
    Router::new()
        .route("/generate", post(generate_handler))
        .route("/genres", get(genres_handler))
        .route("/health", get(health_handler))
        .with_state(orchestrator)
        .layer(CorsLayer::permissive())
}

/// Serves until the listener fails.
pub async fn serve(listener: tokio::net::TcpListener, orchestrator: ArcOrchestrator) -> anyhow::Result<()> {
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(orchestrator)).await?;
    Ok(())
}

async fn generate_handler(
    State(orchestrator): State<ArcOrchestrator>,
    Json(request): Json<StoryRequest>,
) -> Response {
    info!("POST /generate genre={}", request.genre);
    match orchestrator.generate(&request).await {
        Ok(arc) => Json(arc).into_response(),
        Err(e) => error_response(e),
    }
}

async fn genres_handler(State(orchestrator): State<ArcOrchestrator>) -> Response {
    Json(json!({ "genres": orchestrator.genres().names() })).into_response()
}

async fn health_handler() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

fn error_response(err: ArcError) -> Response {
    match err {
        ArcError::UnsupportedGenre(_) => Json(json!({ "error": "Genre not supported." })).into_response(),
        ArcError::MalformedModelOutput {
            stage: Stage::Story,
            raw,
            ..
        } => Json(json!({ "error": "Model output is not valid JSON", "raw": raw })).into_response(),
        other => {
            error!("Generation failed: {:#}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
