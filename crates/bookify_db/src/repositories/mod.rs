//! Repositories for database access

pub mod appointment;
pub mod appointment_sql;

pub use appointment::{Appointment, AppointmentRepository, NewAppointment};
pub use appointment_sql::SqlAppointmentRepository;
