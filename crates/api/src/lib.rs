//! # AssetDesk App
//!
//! Application layer - commands and the command line entry point.
//!
//! This crate contains:
//! - Console commands (dashboard, receivers, inventory)
//! - Application context (dependency injection)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - The `assetdesk` binary is a thin clap front end over the commands

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
