// --- File: crates/bookify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared across the Bookify crates.
///
/// Feature crates keep their own error enums and convert into this one
/// at the HTTP boundary.
#[derive(Error, Debug)]
pub enum BookifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for BookifyError {
    fn status_code(&self) -> u16 {
        match self {
            BookifyError::HttpError(_) => 500,
            BookifyError::ConfigError(_) => 500,
            BookifyError::AuthError(_) => 401,
            BookifyError::ValidationError(_) => 400,
            BookifyError::DatabaseError(_) => 500,
            BookifyError::ExternalServiceError { .. } => 502,
            BookifyError::ConflictError(_) => 409,
            BookifyError::NotFoundError(_) => 404,
            BookifyError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for BookifyError {
    fn from(err: reqwest::Error) -> Self {
        BookifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for BookifyError {
    fn from(err: serde_json::Error) -> Self {
        BookifyError::InternalError(err.to_string())
    }
}

impl From<std::io::Error> for BookifyError {
    fn from(err: std::io::Error) -> Self {
        BookifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BookifyError {
    BookifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> BookifyError {
    BookifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> BookifyError {
    BookifyError::NotFoundError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> BookifyError {
    BookifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> BookifyError {
    BookifyError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(validation_error("missing name").status_code(), 400);
        assert_eq!(BookifyError::AuthError("bad secret".into()).status_code(), 401);
        assert_eq!(not_found("appointment 42").status_code(), 404);
        assert_eq!(
            external_service_error("sms", "provider down").status_code(),
            502
        );
        assert_eq!(BookifyError::DatabaseError("io".into()).status_code(), 500);
    }
}
