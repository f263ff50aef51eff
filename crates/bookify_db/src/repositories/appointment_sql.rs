//! SQL implementation of the appointment repository

use crate::error::DbError;
use crate::repositories::appointment::{Appointment, AppointmentRepository, NewAppointment};
use crate::DbClient;
use bookify_common::services::BoxFuture;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the appointment repository
#[derive(Debug, Clone)]
pub struct SqlAppointmentRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlAppointmentRepository {
    /// Create a new SQL appointment repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn row_to_appointment(row: &sqlx::any::AnyRow) -> Result<Appointment, DbError> {
    Ok(Appointment {
        id: row
            .try_get("id")
            .map_err(|e| DbError::QueryError(e.to_string()))?,
        patient_name: row.try_get("patient_name").unwrap_or_default(),
        phone: row.try_get("phone").unwrap_or_default(),
        date: row.try_get("date").unwrap_or_default(),
        time: row.try_get("time").unwrap_or_default(),
    })
}

impl AppointmentRepository for SqlAppointmentRepository {
    fn init_schema(&self) -> BoxFuture<'_, (), DbError> {
        Box::pin(async move {
            debug!("Initializing appointment schema");

            // No UNIQUE(date, time): the slot check is selection-time only.
            let query = r#"
                CREATE TABLE IF NOT EXISTS appointments (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    patient_name TEXT NOT NULL,
                    phone TEXT NOT NULL,
                    date TEXT NOT NULL,
                    time TEXT NOT NULL
                )
            "#;

            self.db_client.execute(query).await?;

            info!("Appointment schema initialized successfully");
            Ok(())
        })
    }

    fn create(&self, appointment: NewAppointment) -> BoxFuture<'_, Appointment, DbError> {
        Box::pin(async move {
            debug!(
                "Creating appointment for {} on {} at {}",
                appointment.patient_name, appointment.date, appointment.time
            );

            let query = r#"
                INSERT INTO appointments (patient_name, phone, date, time)
                VALUES ($1, $2, $3, $4)
                RETURNING id, patient_name, phone, date, time
            "#;

            let row = sqlx::query(query)
                .bind(&appointment.patient_name)
                .bind(&appointment.phone)
                .bind(&appointment.date)
                .bind(&appointment.time)
                .fetch_one(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to insert appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            let inserted = row_to_appointment(&row)?;

            info!("Appointment {} created successfully", inserted.id);
            Ok(inserted)
        })
    }

    fn list(&self) -> BoxFuture<'_, Vec<Appointment>, DbError> {
        Box::pin(async move {
            debug!("Listing all appointments");

            let query = r#"
                SELECT id, patient_name, phone, date, time
                FROM appointments
                ORDER BY id ASC
            "#;

            let rows = sqlx::query(query)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to list appointments: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            rows.iter().map(row_to_appointment).collect()
        })
    }

    fn find_by_id(&self, id: i64) -> BoxFuture<'_, Option<Appointment>, DbError> {
        Box::pin(async move {
            debug!("Finding appointment: {}", id);

            let query = r#"
                SELECT id, patient_name, phone, date, time
                FROM appointments
                WHERE id = $1
            "#;

            let result = sqlx::query(query)
                .bind(id)
                .fetch_optional(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to find appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            result.as_ref().map(row_to_appointment).transpose()
        })
    }

    fn booked_times(&self, date: &str) -> BoxFuture<'_, Vec<String>, DbError> {
        let date = date.to_string();
        Box::pin(async move {
            debug!("Fetching booked times for {}", date);

            let query = r#"
                SELECT time FROM appointments
                WHERE date = $1
                ORDER BY id ASC
            "#;

            let rows = sqlx::query(query)
                .bind(&date)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to fetch booked times: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(rows
                .into_iter()
                .map(|row| row.try_get("time").unwrap_or_default())
                .collect())
        })
    }

    fn update_schedule(&self, id: i64, date: &str, time: &str) -> BoxFuture<'_, (), DbError> {
        let date = date.to_string();
        let time = time.to_string();
        Box::pin(async move {
            debug!("Rescheduling appointment {} to {} {}", id, date, time);

            let query = r#"
                UPDATE appointments
                SET date = $1, time = $2
                WHERE id = $3
            "#;

            let result = sqlx::query(query)
                .bind(&date)
                .bind(&time)
                .bind(id)
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to update appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            if result.rows_affected() == 0 {
                return Err(DbError::NotFound(format!("appointment {}", id)));
            }

            info!("Appointment {} rescheduled successfully", id);
            Ok(())
        })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, bool, DbError> {
        Box::pin(async move {
            debug!("Deleting appointment: {}", id);

            let query = r#"
                DELETE FROM appointments
                WHERE id = $1
            "#;

            let result = sqlx::query(query)
                .bind(id)
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to delete appointment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

            Ok(result.rows_affected() > 0)
        })
    }
}
