use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use recipe_genie::generation::GenerationClient;
use recipe_genie::normalizer::ResponseNormalizer;
use recipe_genie::orchestrator::Orchestrator;
use recipe_genie::server::router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router backed by the credential-less pipeline, so every generation
/// resolves to the mock response without touching the network.
fn offline_router() -> Router {
    let orchestrator = Orchestrator::new(
        GenerationClient::new(vec![]),
        ResponseNormalizer::new(None),
    );
    router(Arc::new(orchestrator))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_the_service_is_running() {
    let response = offline_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn blank_ingredients_return_400_with_the_fixed_error_body() {
    let response = offline_router()
        .oneshot(post_json("/generate", json!({ "ingredients": "   " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "Ingredients are required",
            "message": "Please provide at least one ingredient"
        })
    );
}

#[tokio::test]
async fn missing_ingredients_field_returns_the_same_error_body() {
    let response = offline_router()
        .oneshot(post_json("/orchestrate", json!({ "mode": "recipe" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        json!("Ingredients are required")
    );
}

#[tokio::test]
async fn successful_generation_wraps_the_result_in_a_data_envelope() {
    let response = offline_router()
        .oneshot(post_json("/generate", json!({ "ingredients": ["egg", "bread"] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let data = &body["data"];
    assert_eq!(data["recipe_name"], json!("Mock Recipe"));
    assert_eq!(
        data["missing_ingredients"],
        json!(["ingredient1", "ingredient2"])
    );
}

#[tokio::test]
async fn generate_forces_recipe_mode_regardless_of_the_body() {
    // Recipe mode reconciles missing ingredients into the mock result; meal
    // plan mode would leave the field absent.
    let response = offline_router()
        .oneshot(post_json(
            "/generate",
            json!({ "ingredients": ["egg"], "mode": "mealplan" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"].get("missing_ingredients").is_some());
}

#[tokio::test]
async fn orchestrate_honors_the_mode_from_the_body() {
    let response = offline_router()
        .oneshot(post_json(
            "/orchestrate",
            json!({ "ingredients": ["egg"], "mode": "mealplan" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"].get("missing_ingredients").is_none());
}
