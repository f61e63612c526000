//! Domain types and models
//!
//! Records as they arrive from the document store and the inventory backend,
//! plus the statistics structures derived from them.

pub mod directory;
pub mod inventory;
pub mod repair;
pub mod stats;

pub use directory::{StaffMember, Topic};
pub use inventory::{InventoryItem, InventoryKind, SortDirection, SortField};
pub use repair::{RepairRequest, RepairStatus};
pub use stats::{
    CountEntry, ReceiverProfileStats, ReceiverStats, RepairStatistics, RoomStats, TopicStats,
};
