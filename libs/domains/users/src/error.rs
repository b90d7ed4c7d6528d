use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User by id {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    InvalidBirthDate(String),

    #[error("Registration is allowed only to adults")]
    AgeNotAllowed,

    #[error("{0}")]
    EmailNotValid(String),

    #[error("User with email {0} already exists")]
    EmailTaken(String),

    #[error("\"From date\" must be less than \"To date\".")]
    InvalidDateRange,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),
            // Validation failures are conflict-class responses: the request is
            // well-formed but clashes with the registry's invariants.
            UserError::InvalidBirthDate(_)
            | UserError::AgeNotAllowed
            | UserError::EmailNotValid(_)
            | UserError::EmailTaken(_)
            | UserError::InvalidDateRange => (StatusCode::CONFLICT, "Conflict", self.to_string()),
            UserError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(error_type, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = UserError::NotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_failures_map_to_409() {
        for err in [
            UserError::InvalidBirthDate("Birth date is missing".to_string()),
            UserError::AgeNotAllowed,
            UserError::EmailNotValid("Invalid email test@test..com".to_string()),
            UserError::EmailTaken("bob@example.com".to_string()),
            UserError::InvalidDateRange,
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_internal_maps_to_500_with_generic_message() {
        let err = UserError::Internal("connection refused".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages_carry_offending_values() {
        assert_eq!(
            UserError::NotFound(7).to_string(),
            "User by id 7 not found"
        );
        assert_eq!(
            UserError::EmailTaken("bob@example.com".to_string()).to_string(),
            "User with email bob@example.com already exists"
        );
    }
}
