// --- File: crates/bookify_sms/src/phone.rs ---
//! Phone number normalisation for the notification dispatcher.

/// Normalise a raw phone number into an E.164-ish string.
///
/// Strips everything that is not a digit; a Korean domestic mobile number
/// (leading `010`) loses its trunk `0` and gains the `+82` country code.
/// Best-effort only: anything else passes through as its digit string,
/// malformed input included.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with("010") {
        format!("+82{}", &digits[1..])
    } else {
        digits
    }
}
