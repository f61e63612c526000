//! Equipment and supplies listings

use assetdesk_domain::InventoryItem;

pub mod ports;
pub mod query;
pub mod service;

pub use query::{available_years, InventoryQuery, Page};
pub use service::{BatchDeleteOutcome, FailedDelete, InventoryService};

/// Items whose id is in `equipment_ids`, in listing order.
pub fn select_by_ids<'a>(
    items: &'a [InventoryItem],
    equipment_ids: &[String],
) -> Vec<&'a InventoryItem> {
    items
        .iter()
        .filter(|item| equipment_ids.contains(&item.equipment_id))
        .collect()
}
