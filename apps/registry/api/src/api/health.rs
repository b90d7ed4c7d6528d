//! Application-specific health check handlers with a real database check.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};

/// Readiness check endpoint that verifies the record store is reachable.
///
/// When the service runs on PostgreSQL, the connection is pinged; the
/// in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            match &state.db {
                Some(db) => db
                    .ping()
                    .await
                    .map_err(|e| format!("Database ping failed: {}", e)),
                None => Ok(()),
            }
        }),
    )];

    run_health_checks(checks).await.into_response()
}
