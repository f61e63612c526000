//! Configuration loading
//!
//! Environment variables (after `.env`) win; otherwise the first probed
//! `assetdesk.{toml,json}` or `config.{toml,json}` file is used.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths};
