//! Snapshot source adapters
//!
//! Implementations of [`assetdesk_core::SnapshotSource`].

pub mod file;
pub mod memory;

pub use file::FileSnapshotSource;
pub use memory::InMemorySnapshotSource;
