use std::time::Duration;

use assetdesk_domain::AssetDeskError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. `json` switches
/// to one JSON object per event. Calling this twice is harmless; the second
/// call is ignored.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"inventory::delete"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert an `AssetDeskError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AssetDeskError) -> &'static str {
    match error {
        AssetDeskError::Config(_) => "config",
        AssetDeskError::Network(_) => "network",
        AssetDeskError::Auth(_) => "auth",
        AssetDeskError::NotFound(_) => "not_found",
        AssetDeskError::InvalidInput(_) => "invalid_input",
        AssetDeskError::Decode(_) => "decode",
        AssetDeskError::Io(_) => "io",
        AssetDeskError::Internal(_) => "internal",
    }
}
