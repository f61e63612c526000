//! Inventory service - core business logic

use std::collections::HashSet;
use std::sync::Arc;

use assetdesk_domain::{AssetDeskError, InventoryItem, InventoryKind, Result};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::ports::InventoryRepository;
use super::query::{available_years, InventoryQuery, Page};

/// A delete that the backend rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDelete {
    pub equipment_id: String,
    pub error: AssetDeskError,
}

/// Result of deleting a multi-selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteOutcome {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDelete>,
}

impl BatchDeleteOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

/// Inventory list and delete use cases
pub struct InventoryService {
    repository: Arc<dyn InventoryRepository>,
}

impl InventoryService {
    /// Create a new inventory service
    pub fn new(repository: Arc<dyn InventoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, kind: InventoryKind) -> Result<Vec<InventoryItem>> {
        self.repository.list(kind).await
    }

    /// Fetch the list and return one page of it.
    pub async fn browse(
        &self,
        kind: InventoryKind,
        query: &InventoryQuery,
    ) -> Result<Page<InventoryItem>> {
        let items = self.repository.list(kind).await?;
        Ok(query.apply(kind, &items))
    }

    /// Buddhist-era years the year filter can offer.
    pub async fn years(&self, kind: InventoryKind) -> Result<Vec<i32>> {
        let items = self.repository.list(kind).await?;
        Ok(available_years(&items))
    }

    pub async fn delete(&self, equipment_id: &str) -> Result<()> {
        self.repository.delete(equipment_id).await
    }

    /// Delete every selected record concurrently.
    ///
    /// Duplicate ids are deleted once. Individual failures are collected in
    /// the outcome instead of aborting the batch; only an empty selection is
    /// an error.
    pub async fn delete_selected(&self, equipment_ids: &[String]) -> Result<BatchDeleteOutcome> {
        let mut seen = HashSet::new();
        let ids: Vec<&String> = equipment_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .collect();
        if ids.is_empty() {
            return Err(AssetDeskError::InvalidInput("no items selected for deletion".to_string()));
        }

        let deletes = ids.iter().map(|id| self.repository.delete(id));
        let results = join_all(deletes).await;

        let mut outcome = BatchDeleteOutcome::default();
        for (id, result) in ids.into_iter().zip(results) {
            match result {
                Ok(()) => outcome.deleted.push(id.clone()),
                Err(error) => {
                    warn!(equipment_id = %id, error = %error, "failed to delete inventory item");
                    outcome.failed.push(FailedDelete {
                        equipment_id: id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            deleted = outcome.deleted.len(),
            failed = outcome.failed.len(),
            "batch delete finished"
        );
        Ok(outcome)
    }

    pub async fn sync_sheet(&self) -> Result<String> {
        self.repository.sync_sheet().await
    }
}
