// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., sqlite:data/bookify.db, loaded via BOOKIFY__DATABASE__URL
}

// --- SMS Provider Config ---
// Holds the three notification-provider credentials. Absent in offline/dev
// mode; secrets come in through env overrides (BOOKIFY__SMS__AUTH_TOKEN).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmsConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

// --- Admin Config ---
// The static shared secret gating the management routes. Compared for
// equality only; not hashed, not rotated.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminConfig {
    pub shared_secret: String,
}

// --- Booking Config ---
// The fixed ordered set of daily consultation slots. Injected through
// configuration so tests can run with alternate slot sets.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    #[serde(default = "default_slots")]
    pub slots: Vec<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slots: default_slots(),
        }
    }
}

fn default_slots() -> Vec<String> {
    ["09:00", "10:30", "13:00", "15:00", "17:00"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_sms: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub sms: Option<SmsConfig>,
    #[serde(default)]
    pub admin: Option<AdminConfig>,

    // --- Booking parameters (always present, defaulted) ---
    #[serde(default)]
    pub booking: BookingConfig,
}
