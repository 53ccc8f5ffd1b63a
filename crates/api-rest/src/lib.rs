//! # API REST
//!
//! REST API implementation for the task service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (status mapping, CORS)
//!
//! Routes are registered explicitly in [`app`]; handlers receive their
//! collaborators through [`AppState`] rather than any ambient lookup.

#![warn(rust_2018_idioms)]

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use task_core::TaskService;

/// Application state shared across REST API handlers
///
/// Currently holds the TaskService instance that the task lookup endpoint
/// reads through.
#[derive(Clone)]
pub struct AppState {
    pub task_service: TaskService,
}

/// Health check response body.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, random_error, get_task),
    components(schemas(HealthRes))
)]
struct ApiDoc;

/// Build the REST API router.
///
/// Registers every route explicitly, mounts the Swagger UI, and applies a
/// permissive CORS layer. The returned router is ready to serve.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/random-error", get(random_error))
        .route("/task", get(get_task))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Task REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/random-error",
    responses(
        (status = 200, description = "Coin flip landed on success", body = String),
        (status = 500, description = "Coin flip landed on failure", body = String)
    )
)]
/// Random outcome endpoint
///
/// Flips a fair coin on each request and returns either `200 OK` or
/// `500 Internal Server Error` with the matching fixed body. The failure
/// branch is a designed outcome, not an error condition; the handler itself
/// never fails. Each request draws from the thread-local RNG, so concurrent
/// invocations are independent.
#[axum::debug_handler]
async fn random_error() -> (StatusCode, &'static str) {
    let is_error = rand::random::<bool>();
    if is_error {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    }
    (StatusCode::OK, "OK")
}

#[utoipa::path(
    get,
    path = "/task",
    responses(
        (status = 200, description = "Current task content as plain text", body = String),
        (status = 500, description = "Repository failure")
    )
)]
/// Task lookup endpoint
///
/// Delegates to the task service and returns the task's content as a
/// plain-text 200 response. An empty body is valid. The endpoint performs no
/// local recovery: a repository failure is logged and translated to a generic
/// 500 here, the single place errors meet HTTP.
///
/// # Errors
///
/// Returns `500 Internal Server Error` if:
/// - the task lookup fails.
#[axum::debug_handler]
async fn get_task(State(state): State<AppState>) -> Result<String, (StatusCode, &'static str)> {
    match state.task_service.find() {
        Ok(task) => Ok(task.content),
        Err(e) => {
            tracing::error!("Task lookup error: {:?}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"))
        }
    }
}
