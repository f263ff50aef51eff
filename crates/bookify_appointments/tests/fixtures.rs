//! Test fixtures for booking tests
//!
//! Factory functions for a mock configuration, an in-memory appointment
//! repository, and a recording notification service, so the booking flow
//! can be exercised without a database or a provider account.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use bookify_common::services::{BoxFuture, BoxedError, NotificationResult, NotificationService};
use bookify_config::{AdminConfig, AppConfig, BookingConfig, ServerConfig};
use bookify_db::{Appointment, AppointmentRepository, DbError, NewAppointment};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_ADMIN_SECRET: &str = "test-secret";

/// Creates a mock AppConfig for testing
pub fn create_mock_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        use_sms: true,
        database: None,
        sms: None,
        admin: Some(AdminConfig {
            shared_secret: TEST_ADMIN_SECRET.to_string(),
        }),
        booking: BookingConfig::default(),
    })
}

/// In-memory appointment repository with the same id semantics as the
/// SQL implementation: monotonically increasing, never reused.
#[derive(Default)]
pub struct MemoryAppointmentRepository {
    rows: Mutex<Vec<Appointment>>,
    next_id: AtomicI64,
}

impl MemoryAppointmentRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl AppointmentRepository for MemoryAppointmentRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move { Ok(()) })
    }

    fn create(&self, appointment: NewAppointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let stored = Appointment {
                id,
                patient_name: appointment.patient_name,
                phone: appointment.phone,
                date: appointment.date,
                time: appointment.time,
            };
            self.rows.lock().unwrap().push(stored.clone());
            Ok(stored)
        })
    }

    fn list(&self) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        Box::pin(async move { Ok(self.rows.lock().unwrap().clone()) })
    }

    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<Appointment>, DbError> {
        Box::pin(async move {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id)
                .cloned())
        })
    }

    fn booked_times(&self, date: &str) -> BoxFuture<'_, Vec<String>, DbError> {
        let date = date.to_string();
        Box::pin(async move {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.date == date)
                .map(|a| a.time.clone())
                .collect())
        })
    }

    fn update_schedule(&self, id: i64, date: &str, time: &str) -> BoxFuture<'_, (), DbError> {
        let date = date.to_string();
        let time = time.to_string();
        Box::pin(async move {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|a| a.id == id) {
                Some(row) => {
                    row.date = date;
                    row.time = time;
                    Ok(())
                }
                None => Err(DbError::NotFound(format!("appointment {}", id))),
            }
        })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, bool, DbError> {
        Box::pin(async move {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.id != id);
            Ok(rows.len() < before)
        })
    }
}

/// Notification service that records instead of sending, optionally
/// failing every call to prove the workflow swallows delivery errors.
#[derive(Default)]
pub struct RecordingNotificationService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

impl NotificationService for RecordingNotificationService {
    type Error = BoxedError;

    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let body = body.to_string();
        Box::pin(async move {
            if self.fail {
                return Err(BoxedError(Box::new(std::io::Error::other(
                    "provider down",
                ))));
            }
            self.sent.lock().unwrap().push((to, body));
            Ok(NotificationResult {
                id: "SM_test".to_string(),
                status: "sent".to_string(),
            })
        })
    }
}
