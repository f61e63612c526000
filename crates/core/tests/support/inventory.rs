//! In-memory `InventoryRepository` for inventory service tests

use std::collections::HashSet;
use std::sync::Mutex;

use assetdesk_core::inventory::ports::InventoryRepository;
use assetdesk_domain::{AssetDeskError, InventoryItem, InventoryKind, Result as DomainResult};
use async_trait::async_trait;

/// Mock backend holding equipment and supplies lists.
///
/// Ids listed in `failing` reject deletes with a network error; every
/// delete attempt is recorded.
#[derive(Default)]
pub struct MockInventoryRepository {
    equipment: Mutex<Vec<InventoryItem>>,
    supplies: Mutex<Vec<InventoryItem>>,
    failing: HashSet<String>,
    delete_calls: Mutex<Vec<String>>,
}

impl MockInventoryRepository {
    pub fn new(equipment: Vec<InventoryItem>, supplies: Vec<InventoryItem>) -> Self {
        Self {
            equipment: Mutex::new(equipment),
            supplies: Mutex::new(supplies),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, equipment_id: &str) -> Self {
        self.failing.insert(equipment_id.to_string());
        self
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    pub fn remaining(&self, kind: InventoryKind) -> usize {
        self.list_for(kind).lock().unwrap().len()
    }

    fn list_for(&self, kind: InventoryKind) -> &Mutex<Vec<InventoryItem>> {
        match kind {
            InventoryKind::Equipment => &self.equipment,
            InventoryKind::Supplies => &self.supplies,
        }
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn list(&self, kind: InventoryKind) -> DomainResult<Vec<InventoryItem>> {
        Ok(self.list_for(kind).lock().unwrap().clone())
    }

    async fn delete(&self, equipment_id: &str) -> DomainResult<()> {
        self.delete_calls
            .lock()
            .unwrap()
            .push(equipment_id.to_string());
        if self.failing.contains(equipment_id) {
            return Err(AssetDeskError::Network(format!("delete {equipment_id} failed")));
        }

        let mut found = false;
        for list in [&self.equipment, &self.supplies] {
            let mut items = list.lock().unwrap();
            let before = items.len();
            items.retain(|item| item.equipment_id != equipment_id);
            found |= items.len() != before;
        }
        if found {
            Ok(())
        } else {
            Err(AssetDeskError::NotFound(equipment_id.to_string()))
        }
    }

    async fn sync_sheet(&self) -> DomainResult<String> {
        Ok("sheet updated".to_string())
    }
}
