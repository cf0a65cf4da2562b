use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::orchestrator::Orchestrator;
use crate::request::{GenerationRequest, Mode};

pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/generate", post(generate))
        .route("/orchestrate", post(orchestrate))
        .with_state(orchestrator)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "recipe_genie is running" }))
}

/// Single-recipe endpoint: the body's `mode` is ignored.
async fn generate(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(body): Json<Value>,
) -> Response {
    handle(orchestrator, body, Some(Mode::Recipe)).await
}

/// Mode comes from the body, defaulting to recipe.
async fn orchestrate(
    State(orchestrator): State<Arc<Orchestrator>>,
    Json(body): Json<Value>,
) -> Response {
    handle(orchestrator, body, None).await
}

async fn handle(
    orchestrator: Arc<Orchestrator>,
    body: Value,
    forced_mode: Option<Mode>,
) -> Response {
    let mut request: GenerationRequest = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(err) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Invalid request",
                &format!("Request body could not be parsed: {}", err),
            );
        }
    };
    if let Some(mode) = forced_mode {
        request.mode = mode;
    }

    if let Err(validation) = request.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!(validation))).into_response();
    }

    match orchestrator.run(&request).await {
        Ok(result) => (StatusCode::OK, Json(json!({ "data": result }))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "orchestration failed");
            error_response(
                StatusCode::BAD_GATEWAY,
                "Generation failed",
                &err.to_string(),
            )
        }
    }
}

fn error_response(status: StatusCode, error: &str, message: &str) -> Response {
    (
        status,
        Json(json!({ "error": error, "message": message })),
    )
        .into_response()
}
