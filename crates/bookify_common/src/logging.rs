//! Logging utilities for the Bookify application.
//!
//! Standardized tracing setup used by the backend binary and by tests
//! that want log output.

use tracing::{info, Level};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific minimum level.
///
/// `RUST_LOG` still takes precedence through the env filter, so a dev
/// shell can raise individual targets without code changes.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    // try_init so a second call (e.g. from tests) is a no-op instead of a panic
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
