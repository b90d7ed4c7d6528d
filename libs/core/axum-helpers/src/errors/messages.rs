//! Standard error messages for consistent API responses.

pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
pub const VALIDATION_FAILED: &str = "Request validation failed";

// Error codes for client parsing
pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
