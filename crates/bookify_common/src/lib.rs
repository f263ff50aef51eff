// --- File: crates/bookify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod features; // Runtime feature gating
pub mod logging;  // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, not_found, validation_error,
    BookifyError, HttpStatusCode,
};

// Re-export feature flag handling
pub use features::is_feature_enabled;

// Re-export logging utilities
pub use logging::{init, init_with_level};
