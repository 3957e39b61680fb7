//! Telemetry module
//!
//! Logging and counters

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use self::metrics::{record_fallback, record_flag, record_segment, FallbackKind};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
