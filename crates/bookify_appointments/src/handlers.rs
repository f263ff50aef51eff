// --- File: crates/bookify_appointments/src/handlers.rs ---
use crate::logic::{
    cancel_appointment, confirmation_message, create_appointment, get_available_slots,
    reschedule_appointment, validate_booking, validate_schedule, AppointmentView,
    AppointmentsResponse, AvailabilityQuery, AvailableSlotsResponse, BookingError, BookingRequest,
    BookingResponse, CancellationResponse, RescheduleRequest, RescheduleResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use bookify_common::error::{BookifyError, HttpStatusCode};
use bookify_common::services::{BoxedError, NotificationService};
use bookify_config::AppConfig;
use bookify_db::AppointmentRepository;
use std::sync::Arc;
use tracing::{info, warn};

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn AppointmentRepository>,
    /// Present only when SMS is enabled and configured; booking succeeds
    /// either way.
    pub notifier: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

fn booking_error_response(err: BookingError) -> (StatusCode, String) {
    if let BookingError::Storage(ref e) = err {
        warn!("Storage error: {}", e);
    }
    let err = BookifyError::from(err);
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match &err {
        // don't leak driver details to the client
        BookifyError::DatabaseError(_) => "Storage error, please try again later.".to_string(),
        _ => err.to_string(),
    };
    (status, message)
}

/// Handler to get available time slots for a date.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, (StatusCode, String)> {
    chrono::NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;

    let slots = get_available_slots(
        state.repository.as_ref(),
        &state.config,
        &query.date,
        query.exclude.as_deref(),
    )
    .await
    .map_err(booking_error_response)?;

    Ok(Json(AvailableSlotsResponse { slots }))
}

/// Handler to create a booking.
///
/// Validation failures keep everything untouched; once the record is
/// stored, the confirmation SMS is fire-and-forget and can never turn
/// the booking into a failure.
#[axum::debug_handler]
pub async fn create_booking_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    validate_booking(&request, &state.config).map_err(booking_error_response)?;

    let date = request.date.clone();
    let appointment = create_appointment(state.repository.as_ref(), request)
        .await
        .map_err(booking_error_response)?;

    info!(
        "Appointment {} booked for {} at {}",
        appointment.id, appointment.date, appointment.time
    );

    if let Some(notifier) = state.notifier.clone() {
        let appointment = appointment.clone();
        tokio::spawn(async move {
            let message = confirmation_message(
                &appointment.patient_name,
                &appointment.date,
                &appointment.time,
            );
            match notifier.send_sms(&appointment.phone, &message).await {
                Ok(result) => info!(
                    "Confirmation SMS for appointment {} accepted: {}",
                    appointment.id, result.status
                ),
                Err(e) => warn!(
                    "Confirmation SMS for appointment {} failed, booking unaffected: {}",
                    appointment.id, e
                ),
            }
        });
    }

    // Refresh availability for the booked date; a failure here must not
    // misreport the already-committed booking.
    let remaining_slots =
        match get_available_slots(state.repository.as_ref(), &state.config, &date, None).await {
            Ok(slots) => slots,
            Err(e) => {
                warn!("Slot refresh after booking failed: {}", e);
                Vec::new()
            }
        };

    Ok(Json(BookingResponse {
        success: true,
        appointment_id: Some(appointment.id),
        message: "Appointment booked successfully.".to_string(),
        remaining_slots,
    }))
}

/// Handler for the public booking list: personal fields masked.
#[axum::debug_handler]
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<AppointmentsResponse>, (StatusCode, String)> {
    let appointments = state
        .repository
        .list()
        .await
        .map_err(|e| booking_error_response(e.into()))?;

    Ok(Json(AppointmentsResponse {
        appointments: appointments.iter().map(AppointmentView::masked).collect(),
    }))
}

/// Handler for the management list: stored values verbatim.
#[axum::debug_handler]
pub async fn admin_list_bookings_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<AppointmentsResponse>, (StatusCode, String)> {
    let appointments = state
        .repository
        .list()
        .await
        .map_err(|e| booking_error_response(e.into()))?;

    Ok(Json(AppointmentsResponse {
        appointments: appointments.iter().map(AppointmentView::unmasked).collect(),
    }))
}

/// Handler to reschedule an appointment (admin only, behind the auth
/// middleware). A missing id is an explicit 404.
#[axum::debug_handler]
pub async fn reschedule_appointment_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<i64>,
    Json(request): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, (StatusCode, String)> {
    validate_schedule(&request.date, &request.time, &state.config)
        .map_err(booking_error_response)?;

    let appointment =
        reschedule_appointment(state.repository.as_ref(), id, &request.date, &request.time)
            .await
            .map_err(booking_error_response)?;

    info!(
        "Appointment {} rescheduled to {} at {}",
        id, appointment.date, appointment.time
    );

    Ok(Json(RescheduleResponse {
        success: true,
        message: format!("Appointment {} rescheduled.", id),
        appointment: AppointmentView::unmasked(&appointment),
    }))
}

/// Handler to cancel an appointment (admin only, behind the auth
/// middleware). Idempotent: cancelling an absent id succeeds quietly.
#[axum::debug_handler]
pub async fn cancel_appointment_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<i64>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    let deleted = cancel_appointment(state.repository.as_ref(), id)
        .await
        .map_err(booking_error_response)?;

    if deleted {
        info!("Appointment {} cancelled", id);
    }

    Ok(Json(CancellationResponse {
        success: true,
        message: if deleted {
            format!("Appointment {} cancelled.", id)
        } else {
            format!("Appointment {} was already gone.", id)
        },
    }))
}
