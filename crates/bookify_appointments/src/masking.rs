// --- File: crates/bookify_appointments/src/masking.rs ---
//! Display-time redaction of personal fields.
//!
//! These transforms apply only when rendering lists; stored values stay
//! unmasked, and the notification path always uses the original phone
//! number. Both operate on character counts, so multi-byte names mask
//! per visible character.

/// Mask a patient name: `"Kim"` → `"K*m"`, `"Ko"` → `"K*"`, `"A"` → `"A"`.
pub fn mask_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    match chars.len() {
        0 | 1 => name.to_string(),
        2 => format!("{}*", chars[0]),
        n => {
            let mut masked = String::with_capacity(n);
            masked.push(chars[0]);
            for _ in 1..n - 1 {
                masked.push('*');
            }
            masked.push(chars[n - 1]);
            masked
        }
    }
}

/// Mask a phone number, keeping the last 3 characters.
///
/// Anything shorter than 7 characters is returned unchanged.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let n = chars.len();
    if n < 7 {
        return phone.to_string();
    }
    let mut masked = "*".repeat(n - 3);
    masked.extend(&chars[n - 3..]);
    masked
}
