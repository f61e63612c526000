//! # AssetDesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Repair statistics aggregation, selection and highlights
//! - Topic and user directories
//! - Inventory querying, paging and batch delete orchestration
//! - Export table models
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `assetdesk-domain`
//! - No HTTP, file system or document store code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod dashboard;
pub mod directory;
pub mod export;
pub mod inventory;
pub mod snapshot;
pub mod statistics;

// Re-export specific items to avoid ambiguity
pub use dashboard::{DashboardService, DashboardView, TopicDetail};
pub use directory::{TopicDirectory, UserDirectory};
pub use export::ExportTable;
pub use inventory::ports::InventoryRepository;
pub use inventory::{BatchDeleteOutcome, FailedDelete, InventoryQuery, InventoryService, Page};
pub use snapshot::{CollectionSnapshot, SnapshotSource};
pub use statistics::aggregate;
