use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;

/// Body of the liveness endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// One named readiness probe; `Err` carries a description of the failure.
pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs all readiness probes concurrently and folds them into one response.
///
/// Returns 200 with `{"status": "ready", "<name>": "connected", ...}` when
/// every probe passes, 503 with the failing probes marked "disconnected"
/// otherwise.
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture<'_>)>) -> (StatusCode, Json<Value>) {
    let (names, futures): (Vec<_>, Vec<_>) = checks.into_iter().unzip();
    let outcomes = join_all(futures).await;

    let mut body = serde_json::Map::new();
    let mut ready = true;

    for (name, outcome) in names.into_iter().zip(outcomes) {
        let state = match outcome {
            Ok(()) => "connected",
            Err(e) => {
                tracing::error!("Readiness check '{}' failed: {}", name, e);
                ready = false;
                "disconnected"
            }
        };
        body.insert(name.to_string(), json!(state));
    }

    body.insert(
        "status".to_string(),
        json!(if ready { "ready" } else { "not ready" }),
    );

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(Value::Object(body)))
}

/// Liveness handler: answers 200 with the app name and version whenever the
/// process is up. Readiness (with real probes) is the app's concern.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "healthy",
        name: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Router exposing `/health`, state already applied.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
