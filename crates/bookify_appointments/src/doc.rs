// File: crates/bookify_appointments/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AppointmentView, AppointmentsResponse, AvailabilityQuery, AvailableSlotsResponse,
    BookingRequest, BookingResponse, CancellationResponse, RescheduleRequest, RescheduleResponse,
};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("date" = String, Query, description = "Consultation date in YYYY-MM-DD format", example = "2025-03-01", format = "date"),
        ("exclude" = Option<String>, Query, description = "Slot held by the record being edited; always re-offered", example = "09:00")
    ),
    responses(
        (status = 200, description = "Available time slots", body = AvailableSlotsResponse,
         example = json!({ "slots": ["09:00", "13:00", "17:00"] })
        ),
        (status = 400, description = "Invalid date format", body = String),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookingRequest, example = json!({
        "patient_name": "Kim Min",
        "phone": "01012345678",
        "date": "2025-03-01",
        "time": "09:00"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "appointment_id": 1,
             "message": "Appointment booked successfully.",
             "remaining_slots": ["10:30", "13:00", "15:00", "17:00"]
         })
        ),
        (status = 400, description = "Validation failed",
         example = json!({ "success": false, "message": "patient name is required" })
        ),
        (status = 500, description = "Booking failed",
         example = json!({ "success": false, "message": "Storage error, please try again later." })
        )
    )
)]
fn doc_create_booking_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "All bookings, personal fields masked", body = AppointmentsResponse,
         example = json!({
             "appointments": [
                 { "id": 1, "patient_name": "K*****n", "phone": "********678",
                   "date": "2025-03-01", "time": "09:00" }
             ]
         })
        ),
        (status = 500, description = "Listing failed", body = String)
    )
)]
fn doc_list_bookings_handler() {}

#[utoipa::path(
    get,
    path = "/admin/bookings",
    responses(
        (status = 200, description = "All bookings, unmasked", body = AppointmentsResponse),
        (status = 401, description = "Missing or invalid admin secret", body = String),
        (status = 500, description = "Listing failed", body = String)
    )
)]
fn doc_admin_list_bookings_handler() {}

#[utoipa::path(
    patch,
    path = "/admin/bookings/{id}",
    params(
        ("id" = i64, Path, description = "The id of the appointment to reschedule")
    ),
    request_body(content = RescheduleRequest, example = json!({
        "date": "2025-03-01",
        "time": "10:30"
    })),
    responses(
        (status = 200, description = "Reschedule result", body = RescheduleResponse),
        (status = 400, description = "Validation failed", body = String),
        (status = 401, description = "Missing or invalid admin secret", body = String),
        (status = 404, description = "Appointment not found", body = String)
    )
)]
fn doc_reschedule_appointment_handler() {}

#[utoipa::path(
    delete,
    path = "/admin/bookings/{id}",
    params(
        ("id" = i64, Path, description = "The id of the appointment to cancel")
    ),
    responses(
        (status = 200, description = "Cancellation result (idempotent)", body = CancellationResponse,
         example = json!({ "success": true, "message": "Appointment 1 cancelled." })
        ),
        (status = 401, description = "Missing or invalid admin secret", body = String)
    )
)]
fn doc_cancel_appointment_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_create_booking_handler,
        doc_list_bookings_handler,
        doc_admin_list_bookings_handler,
        doc_reschedule_appointment_handler,
        doc_cancel_appointment_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailableSlotsResponse,
            BookingRequest,
            BookingResponse,
            AppointmentView,
            AppointmentsResponse,
            RescheduleRequest,
            RescheduleResponse,
            CancellationResponse
        )
    ),
    tags(
        (name = "booking", description = "Consultation Booking API")
    ),
    servers(
        (url = "/api", description = "Booking API server")
    )
)]
pub struct BookingApiDoc;
