// --- File: crates/bookify_appointments/src/routes.rs ---

use crate::auth::{admin_auth_middleware, AdminAuthState};
use crate::handlers::{
    admin_list_bookings_handler, cancel_appointment_handler, create_booking_handler,
    get_availability_handler, list_bookings_handler, reschedule_appointment_handler, BookingState,
};
use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
///
/// Public surface: availability lookup, booking submission, masked list.
/// Management surface: unmasked list, reschedule, cancel. All of these
/// sit behind the shared-secret middleware; every mutation requires
/// authentication.
pub fn routes(state: Arc<BookingState>) -> Router {
    let auth_state = Arc::new(AdminAuthState {
        config: state.config.clone(),
    });

    let admin_routes = Router::new()
        .route("/admin/bookings", get(admin_list_bookings_handler))
        .route(
            "/admin/bookings/{id}",
            patch(reschedule_appointment_handler).delete(cancel_appointment_handler),
        )
        .layer(middleware::from_fn_with_state(
            auth_state,
            admin_auth_middleware,
        ));

    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/book", post(create_booking_handler))
        .route("/bookings", get(list_bookings_handler))
        .merge(admin_routes)
        .with_state(state)
}
