use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{messages, ErrorResponse};

/// Router fallback for paths no route matched.
pub async fn not_found() -> Response {
    let body = ErrorResponse::new("NotFound", messages::NOT_FOUND_RESOURCE)
        .with_code(messages::CODE_NOT_FOUND);

    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Method fallback for routes that exist but not for the requested verb.
pub async fn method_not_allowed() -> Response {
    let body = ErrorResponse::new("MethodNotAllowed", messages::METHOD_NOT_ALLOWED);

    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}
