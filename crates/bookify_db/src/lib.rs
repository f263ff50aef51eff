//! Database integration for Bookify
//!
//! A database client over SQLx designed to be backend agnostic: SQLite by
//! default, PostgreSQL and MySQL through feature flags. The appointment
//! repository lives here; the booking workflow only ever talks to the
//! [`AppointmentRepository`] trait.

pub mod client;
pub mod error;
pub mod repositories;

pub use client::DbClient;
pub use error::DbError;
pub use repositories::{
    Appointment, AppointmentRepository, NewAppointment, SqlAppointmentRepository,
};
