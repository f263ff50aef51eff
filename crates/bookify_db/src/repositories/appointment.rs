//! Repository for appointments
//!
//! The single persisted entity of the booking flow and the interface for
//! storing and retrieving it. The trait is object-safe (boxed futures)
//! so the workflow can hold `Arc<dyn AppointmentRepository>` and tests
//! can substitute an in-memory store.

use crate::error::DbError;
use bookify_common::services::BoxFuture;
use serde::{Deserialize, Serialize};

/// A persisted appointment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned id: unique, monotonically increasing, never reused.
    pub id: i64,
    /// Patient name as submitted.
    pub patient_name: String,
    /// Unmasked phone number; masking is display-only.
    pub phone: String,
    /// Calendar date, ISO `YYYY-MM-DD`.
    pub date: String,
    /// One of the configured slot labels.
    pub time: String,
}

/// Insert form of an appointment, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
}

/// Repository for appointments
///
/// No uniqueness constraint exists on `(date, time)`: the slot check is a
/// selection-time read in the calendar, and two concurrent submissions
/// can both insert. That race is part of the contract, not a bug in the
/// implementations.
pub trait AppointmentRepository: Send + Sync {
    /// Initialize the database schema.
    ///
    /// Idempotent; called on every process start.
    fn init_schema(&self) -> BoxFuture<'_, (), DbError>;

    /// Insert a new appointment and return the stored record with its id.
    fn create(&self, appointment: NewAppointment) -> BoxFuture<'_, Appointment, DbError>;

    /// All appointments in insertion order (id ascending).
    fn list(&self) -> BoxFuture<'_, Vec<Appointment>, DbError>;

    /// Look up a single appointment by id.
    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<Appointment>, DbError>;

    /// The slot labels already booked on a date.
    fn booked_times(&self, date: &str) -> BoxFuture<'_, Vec<String>, DbError>;

    /// Overwrite date and time of an existing appointment.
    ///
    /// Name and phone are never touched. Fails with [`DbError::NotFound`]
    /// when the id does not exist.
    fn update_schedule(&self, id: i64, date: &str, time: &str) -> BoxFuture<'_, (), DbError>;

    /// Delete an appointment by id.
    ///
    /// Idempotent: `false` when no row had that id, never an error.
    fn delete(&self, id: i64) -> BoxFuture<'_, bool, DbError>;
}
