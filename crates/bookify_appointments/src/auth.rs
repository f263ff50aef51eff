// --- File: crates/bookify_appointments/src/auth.rs ---

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bookify_config::AppConfig;
use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use tracing::{error, warn};

/// State for the admin auth middleware: it only needs the config to get
/// the shared secret.
#[derive(Clone)]
pub struct AdminAuthState {
    pub config: Arc<AppConfig>,
}

pub const ADMIN_AUTH_HEADER: &str = "X-Admin-Secret";

/// Axum middleware gating the management routes.
///
/// Compares the `X-Admin-Secret` header against the configured shared
/// secret in constant time. A wrong or missing secret is a plain 401
/// rejection; there is no lockout and no audit trail. An unset secret is
/// a server configuration error, not an open door.
pub async fn admin_auth_middleware(
    State(auth_state): State<Arc<AdminAuthState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let expected_secret: String = match auth_state
        .config
        .admin
        .as_ref()
        .map(|a| a.shared_secret.clone())
    {
        Some(secret) => secret,
        None => {
            error!("Admin shared secret not configured");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error for admin auth.".to_string(),
            )
                .into_response();
        }
    };

    let provided_secret: Option<&str> = req
        .headers()
        .get(ADMIN_AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided_secret {
        Some(provided) => {
            if constant_time_eq(provided.as_bytes(), expected_secret.as_bytes()) {
                next.run(req).await
            } else {
                warn!("Admin request: invalid secret provided");
                (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized: invalid admin secret.".to_string(),
                )
                    .into_response()
            }
        }
        None => (
            StatusCode::UNAUTHORIZED,
            format!("Unauthorized: missing {} header.", ADMIN_AUTH_HEADER),
        )
            .into_response(),
    }
}
