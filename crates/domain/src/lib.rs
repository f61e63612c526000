//! # AssetDesk Domain
//!
//! Business domain types and models for AssetDesk.
//!
//! This crate contains:
//! - Repair request, topic, staff and inventory records
//! - Statistics structures produced by the aggregator
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other AssetDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
