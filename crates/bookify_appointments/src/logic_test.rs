#[cfg(test)]
mod tests {
    use crate::logic::{
        available_slots, confirmation_message, validate_booking, validate_schedule, BookingError,
        BookingRequest,
    };
    use bookify_config::{AppConfig, BookingConfig, ServerConfig};

    fn slots(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            use_sms: false,
            database: None,
            sms: None,
            admin: None,
            booking: BookingConfig::default(),
        }
    }

    fn booking_request(name: &str, phone: &str, date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            patient_name: name.to_string(),
            phone: phone.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    #[test]
    fn no_bookings_means_all_slots_available() {
        let configured = slots(&["09:00", "10:30", "13:00", "15:00", "17:00"]);
        let result = available_slots(&configured, &[], None);
        assert_eq!(result, configured);
    }

    #[test]
    fn booked_slots_are_filtered_preserving_order() {
        let configured = slots(&["09:00", "10:30", "13:00", "15:00", "17:00"]);
        let booked = slots(&["10:30", "15:00"]);
        let result = available_slots(&configured, &booked, None);
        assert_eq!(result, slots(&["09:00", "13:00", "17:00"]));
    }

    #[test]
    fn fully_booked_date_yields_no_slots() {
        let configured = slots(&["09:00", "10:30"]);
        let booked = slots(&["09:00", "10:30"]);
        assert!(available_slots(&configured, &booked, None).is_empty());
    }

    #[test]
    fn excluded_slot_is_offered_even_when_booked() {
        let configured = slots(&["09:00", "10:30", "13:00", "15:00", "17:00"]);
        let booked = slots(&["09:00", "10:30"]);
        let result = available_slots(&configured, &booked, Some("09:00"));
        assert_eq!(result, slots(&["09:00", "13:00", "15:00", "17:00"]));
    }

    #[test]
    fn exclude_never_invents_labels_outside_the_configured_set() {
        let configured = slots(&["09:00", "10:30"]);
        let result = available_slots(&configured, &[], Some("23:59"));
        assert_eq!(result, configured);
    }

    #[test]
    fn unknown_booked_labels_are_ignored() {
        // Rows written under an older slot layout must not panic the filter
        let configured = slots(&["09:00", "10:30"]);
        let booked = slots(&["08:00"]);
        assert_eq!(available_slots(&configured, &booked, None), configured);
    }

    #[test]
    fn alternate_slot_sets_flow_through_configuration() {
        let mut config = test_config();
        config.booking = BookingConfig {
            slots: slots(&["06:00", "23:00"]),
        };
        assert!(validate_schedule("2025-03-01", "06:00", &config).is_ok());
        // a default slot is no longer valid under the alternate set
        assert!(matches!(
            validate_schedule("2025-03-01", "09:00", &config),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn validation_requires_name_phone_and_known_slot() {
        let config = test_config();

        let ok = booking_request("Kim Min", "01012345678", "2025-03-01", "09:00");
        assert!(validate_booking(&ok, &config).is_ok());

        let no_name = booking_request("   ", "01012345678", "2025-03-01", "09:00");
        assert!(matches!(
            validate_booking(&no_name, &config),
            Err(BookingError::Validation(_))
        ));

        let no_phone = booking_request("Kim Min", "", "2025-03-01", "09:00");
        assert!(matches!(
            validate_booking(&no_phone, &config),
            Err(BookingError::Validation(_))
        ));

        // the UI's "no slots available" sentinel is not a configured slot
        let sentinel = booking_request("Kim Min", "01012345678", "2025-03-01", "no slots available");
        assert!(matches!(
            validate_booking(&sentinel, &config),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn validation_rejects_malformed_dates() {
        let config = test_config();
        for bad in ["2025-3-1", "03-01-2025", "not-a-date", "2025-13-40"] {
            let request = booking_request("Kim Min", "01012345678", bad, "09:00");
            assert!(
                matches!(
                    validate_booking(&request, &config),
                    Err(BookingError::Validation(_))
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn confirmation_message_carries_the_booking_facts() {
        let message = confirmation_message("Kim Min", "2025-03-01", "09:00");
        assert!(message.contains("Kim Min"));
        assert!(message.contains("2025-03-01"));
        assert!(message.contains("09:00"));
    }
}
