//! Port interfaces for the inventory backend

use assetdesk_domain::{InventoryItem, InventoryKind, Result};
use async_trait::async_trait;

/// Trait for reading and deleting inventory records
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// List every record of one kind
    async fn list(&self, kind: InventoryKind) -> Result<Vec<InventoryItem>>;

    /// Delete a record by its equipment id (both kinds share one endpoint)
    async fn delete(&self, equipment_id: &str) -> Result<()>;

    /// Ask the backend to push the inventory to its spreadsheet mirror.
    ///
    /// Returns the backend's confirmation message.
    async fn sync_sheet(&self) -> Result<String>;
}
