pub mod handlers;
pub mod messages;

use serde::Serialize;
use utoipa::ToSchema;

/// JSON body used by every error response in the workspace.
///
/// ```json
/// {
///   "error": "Conflict",
///   "message": "User with email bob@example.com already exists"
/// }
/// ```
///
/// `details` and `code` are omitted from the JSON when unset; validation
/// rejections fill `details` with per-field rule violations.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable explanation
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Stable code for client-side dispatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            code: None,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted_from_json() {
        let body = ErrorResponse::new("Conflict", "email already exists");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["error"], "Conflict");
        assert_eq!(json["message"], "email already exists");
        assert!(json.get("details").is_none());
        assert!(json.get("code").is_none());
    }

    #[test]
    fn test_builder_attaches_code_and_details() {
        let body = ErrorResponse::new("BadRequest", "validation failed")
            .with_code("VALIDATION_ERROR")
            .with_details(serde_json::json!({"first_name": ["length"]}));
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["first_name"][0], "length");
    }
}
