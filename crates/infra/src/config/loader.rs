//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file from the working directory, if present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. The session token always comes from `ASSETDESK_TOKEN` when it is set
//!
//! ## Environment Variables
//! - `ASSETDESK_API_URL`: Inventory backend origin (required)
//! - `ASSETDESK_SNAPSHOT_PATH`: JSON export of the document store (required)
//! - `ASSETDESK_API_TIMEOUT_SECS`: Request timeout in seconds
//! - `ASSETDESK_SNAPSHOT_POLL_MS`: Snapshot file poll interval
//! - `ASSETDESK_TOKEN`: Bearer token of the signed-in user
//! - `ASSETDESK_FULL_NAME`: Display name of the signed-in user
//! - `ASSETDESK_STAFF_POSITIONS`: Comma-separated positions listed as staff
//!
//! ## File Locations
//! The loader probes `assetdesk.{toml,json}` then `config.{toml,json}` in the
//! working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use assetdesk_domain::constants::{DEFAULT_API_TIMEOUT_SECS, DEFAULT_SNAPSHOT_POLL_MS};
use assetdesk_domain::{
    ApiConfig, AssetDeskError, CollectionNames, Config, Result, Session, SnapshotConfig,
};

const CONFIG_FILE_NAMES: [&str; 4] = [
    "assetdesk.toml",
    "assetdesk.json",
    "config.toml",
    "config.json",
];

const NO_CONFIG_FOUND: &str = "No config file found and ASSETDESK_API_URL is not set";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `AssetDeskError::Config` if neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let mut config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    apply_session_env(&mut config.session);
    Ok(config)
}

/// Load configuration from environment variables alone.
///
/// # Errors
/// Returns `AssetDeskError::Config` if a required variable is missing or a
/// numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("ASSETDESK_API_URL")?;
    let snapshot_path = env_var("ASSETDESK_SNAPSHOT_PATH")?;
    let timeout_secs = env_parse("ASSETDESK_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;
    let poll_interval_ms = env_parse("ASSETDESK_SNAPSHOT_POLL_MS", DEFAULT_SNAPSHOT_POLL_MS)?;

    let mut session = Session::default();
    apply_session_env(&mut session);

    let mut config = Config {
        api: ApiConfig {
            base_url,
            timeout_secs,
        },
        session,
        snapshots: SnapshotConfig {
            path: snapshot_path,
            poll_interval_ms,
        },
        collections: CollectionNames::default(),
        ..Config::default()
    };
    if let Some(positions) = env_list("ASSETDESK_STAFF_POSITIONS") {
        config.staff_positions = positions;
    }
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// supported, detected by file extension.
///
/// # Errors
/// Returns `AssetDeskError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                let message = format!("Config file not found: {}", p.display());
                return Err(AssetDeskError::Config(message));
            }
            p
        }
        None => probe_config_paths()
            .ok_or_else(|| AssetDeskError::Config(NO_CONFIG_FOUND.to_string()))?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AssetDeskError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| invalid_format("TOML", e)),
        "json" => serde_json::from_str(contents).map_err(|e| invalid_format("JSON", e)),
        _ => Err(AssetDeskError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn invalid_format(format: &str, err: impl std::fmt::Display) -> AssetDeskError {
    AssetDeskError::Config(format!("Invalid {format} format: {err}"))
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Overlay session values from the environment onto `session`.
fn apply_session_env(session: &mut Session) {
    if let Some(token) = env_optional("ASSETDESK_TOKEN") {
        session.token = Some(token);
    }
    if let Some(name) = env_optional("ASSETDESK_FULL_NAME") {
        session.full_name = Some(name);
    }
}

fn env_var(key: &str) -> Result<String> {
    env_optional(key).ok_or_else(|| {
        AssetDeskError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set and non-blank, trimmed.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_optional(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| AssetDeskError::Config(format!("Invalid {key}: {e}"))),
        None => Ok(default),
    }
}

fn env_list(key: &str) -> Option<Vec<String>> {
    let values: Vec<String> = env_optional(key)?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!values.is_empty()).then_some(values)
}
