//! # AssetDesk Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with retry and the inventory REST client
//! - Snapshot sources (JSON export on disk, in-memory)
//! - CSV export writer
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `assetdesk-core`
//! - Depends on `assetdesk-domain` and `assetdesk-core`
//! - Contains all "impure" code (network, file system)

pub mod api;
pub mod config;
pub mod errors;
pub mod export;
pub mod http;
pub mod snapshot;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, InventoryApiClient, SessionTokenProvider};
pub use errors::InfraError;
pub use export::CsvExporter;
pub use http::HttpClient;
pub use snapshot::{FileSnapshotSource, InMemorySnapshotSource};
