// --- File: crates/bookify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! Trait definitions for the external collaborators of the booking flow.
//! They decouple the workflow from concrete providers so tests can drop
//! in recording fakes.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for notification service operations.
///
/// The booking workflow treats delivery as best-effort: the caller
/// discards the result after logging. Implementations must not block
/// indefinitely (bounded timeout, no retry).
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an SMS notification.
    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A factory for creating service instances.
///
/// The backend wires concrete providers in here based on configuration;
/// handlers only ever see the trait objects.
pub trait ServiceFactory: Send + Sync {
    /// Get a notification service instance, if one is configured.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The provider-side ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}
