//! JSON body extraction with `validator`-derived checks applied on the way in.

use crate::errors::{messages, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Drop-in replacement for `axum::Json` that also runs the payload's
/// [`Validate`] implementation.
///
/// Deserialization failures keep axum's standard rejection; validation
/// failures answer 400 with an [`ErrorResponse`] whose `details` maps each
/// offending field to its violated rules.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        payload
            .validate()
            .map_err(|e| validation_rejection(&e).into_response())?;

        Ok(ValidatedJson(payload))
    }
}

fn validation_rejection(errors: &validator::ValidationErrors) -> (StatusCode, Json<ErrorResponse>) {
    let details: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, violations)| {
            let rules: Vec<serde_json::Value> = violations
                .iter()
                .map(|v| {
                    serde_json::json!({
                        "code": v.code,
                        "message": v.message,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(rules))
        })
        .collect();

    let body = ErrorResponse::new("BadRequest", messages::VALIDATION_FAILED)
        .with_code(messages::CODE_VALIDATION)
        .with_details(serde_json::Value::Object(details));

    (StatusCode::BAD_REQUEST, Json(body))
}
