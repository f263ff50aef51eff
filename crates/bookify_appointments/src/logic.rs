// --- File: crates/bookify_appointments/src/logic.rs ---
use crate::masking::{mask_name, mask_phone};
use bookify_config::AppConfig;
use bookify_db::{Appointment, AppointmentRepository, DbError, NewAppointment};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- Error Handling ---
use bookify_common::error::BookifyError;
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Appointment {0} not found")]
    NotFound(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] DbError),
}

impl From<BookingError> for BookifyError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => BookifyError::ValidationError(msg),
            BookingError::NotFound(id) => {
                BookifyError::NotFoundError(format!("appointment {}", id))
            }
            BookingError::Storage(e) => BookifyError::DatabaseError(e.to_string()),
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Consultation date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-01"))]
    pub date: String,

    /// Slot label currently held by the record being edited; always
    /// re-offered even if booked
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub exclude: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableSlotsResponse {
    pub slots: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingRequest {
    pub patient_name: String,
    pub phone: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // one of the configured slot labels
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub appointment_id: Option<i64>,
    pub message: String,
    /// Availability for the booked date after the write, so the client
    /// never renders the stale slot list
    pub remaining_slots: Vec<String>,
}

/// An appointment as rendered in list views, masked or not.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppointmentView {
    pub id: i64,
    pub patient_name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

impl AppointmentView {
    /// Public list rendering: personal fields redacted.
    pub fn masked(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_name: mask_name(&appointment.patient_name),
            phone: mask_phone(&appointment.phone),
            date: appointment.date.clone(),
            time: appointment.time.clone(),
        }
    }

    /// Management rendering: stored values verbatim.
    pub fn unmasked(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_name: appointment.patient_name.clone(),
            phone: appointment.phone.clone(),
            date: appointment.date.clone(),
            time: appointment.time.clone(),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppointmentsResponse {
    pub appointments: Vec<AppointmentView>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RescheduleRequest {
    pub date: String, // YYYY-MM-DD
    pub time: String, // one of the configured slot labels
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RescheduleResponse {
    pub success: bool,
    pub message: String,
    pub appointment: AppointmentView,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CancellationResponse {
    pub success: bool,
    pub message: String,
}

// --- Availability Logic ---

/// Filters the configured slot labels down to the ones still bookable on
/// a date, preserving the configured order.
///
/// `exclude` is the slot a record under edit already occupies; it is
/// always re-offered even when booked, so an edit can keep its own slot.
pub fn available_slots(configured: &[String], booked: &[String], exclude: Option<&str>) -> Vec<String> {
    configured
        .iter()
        .filter(|slot| {
            exclude == Some(slot.as_str()) || !booked.iter().any(|b| b.as_str() == slot.as_str())
        })
        .cloned()
        .collect()
}

/// Fetches the booked times for a date and applies the slot filter.
///
/// An empty result is the "no slots available" state; submission against
/// it fails validation. Purely a filtered read, no locking: two
/// concurrent submissions can both observe a slot as free.
pub async fn get_available_slots(
    repository: &dyn AppointmentRepository,
    config: &AppConfig,
    date: &str,
    exclude: Option<&str>,
) -> Result<Vec<String>, BookingError> {
    let booked = repository.booked_times(date).await?;
    Ok(available_slots(&config.booking.slots, &booked, exclude))
}

// --- Validation ---

/// Validates a booking submission: non-empty name and phone, a real
/// date, and a time from the configured slot set (which rejects the
/// UI's "no slots available" sentinel along with arbitrary input).
pub fn validate_booking(request: &BookingRequest, config: &AppConfig) -> Result<(), BookingError> {
    if request.patient_name.trim().is_empty() {
        return Err(BookingError::Validation("patient name is required".to_string()));
    }
    if request.phone.trim().is_empty() {
        return Err(BookingError::Validation("phone number is required".to_string()));
    }
    validate_schedule(&request.date, &request.time, config)
}

/// Date/time half of the validation, shared with the reschedule flow.
pub fn validate_schedule(date: &str, time: &str, config: &AppConfig) -> Result<(), BookingError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| BookingError::Validation("invalid date format (YYYY-MM-DD)".to_string()))?;

    if !config.booking.slots.iter().any(|s| s == time) {
        return Err(BookingError::Validation(format!(
            "'{}' is not a bookable time slot",
            time
        )));
    }
    Ok(())
}

// --- Booking Logic ---

/// Inserts a validated booking. Durable once this returns: the
/// notification step that follows must not undo or fail it.
pub async fn create_appointment(
    repository: &dyn AppointmentRepository,
    request: BookingRequest,
) -> Result<Appointment, BookingError> {
    let appointment = repository
        .create(NewAppointment {
            patient_name: request.patient_name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            date: request.date,
            time: request.time,
        })
        .await?;
    Ok(appointment)
}

/// Overwrites date/time of an existing appointment and returns the
/// refreshed record. Name and phone are never touched.
pub async fn reschedule_appointment(
    repository: &dyn AppointmentRepository,
    id: i64,
    date: &str,
    time: &str,
) -> Result<Appointment, BookingError> {
    match repository.update_schedule(id, date, time).await {
        Ok(()) => {}
        Err(DbError::NotFound(_)) => return Err(BookingError::NotFound(id)),
        Err(e) => return Err(e.into()),
    }

    repository
        .find_by_id(id)
        .await?
        .ok_or(BookingError::NotFound(id))
}

/// Deletes an appointment. Idempotent: `false` when the id was already
/// gone.
pub async fn cancel_appointment(
    repository: &dyn AppointmentRepository,
    id: i64,
) -> Result<bool, BookingError> {
    Ok(repository.delete(id).await?)
}

// --- Notification text ---

/// The confirmation SMS body for a freshly created booking.
pub fn confirmation_message(patient_name: &str, date: &str, time: &str) -> String {
    format!(
        "[Bookify] {}, your consultation on {} at {} is confirmed.",
        patient_name, date, time
    )
}
