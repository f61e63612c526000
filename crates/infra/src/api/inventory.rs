//! Inventory backend adapter
//!
//! Implements [`InventoryRepository`] over the REST endpoints of the
//! equipment service.

use std::sync::Arc;

use assetdesk_core::InventoryRepository;
use assetdesk_domain::{AssetDeskError, InventoryItem, InventoryKind, Result, Session};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use super::auth::SessionTokenProvider;
use super::client::{ApiClient, ApiClientConfig};

const DELETE_PATH: &str = "/api/equipment";
const SYNC_SHEET_PATH: &str = "/api/equipment/updateSheet";
const SYNC_SHEET_DONE: &str = "spreadsheet updated";

#[derive(Debug, Deserialize)]
struct BackendMessage {
    #[serde(default)]
    message: Option<String>,
}

/// REST implementation of [`InventoryRepository`]
pub struct InventoryApiClient {
    client: Arc<ApiClient>,
}

impl InventoryApiClient {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Client authenticated with the given session.
    pub fn for_session(config: ApiClientConfig, session: Session) -> Result<Self> {
        let client = ApiClient::new(config, Arc::new(SessionTokenProvider::new(session)))?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl InventoryRepository for InventoryApiClient {
    async fn list(&self, kind: InventoryKind) -> Result<Vec<InventoryItem>> {
        let records: Vec<Value> = self.client.get(kind.list_path()).await?;
        let total = records.len();

        let items: Vec<InventoryItem> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match InventoryItem::deserialize(record) {
                Ok(item) => Some(item),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed inventory record");
                    None
                }
            })
            .collect();

        debug!(?kind, total, decoded = items.len(), "listed inventory");
        Ok(items)
    }

    async fn delete(&self, equipment_id: &str) -> Result<()> {
        let equipment_id = equipment_id.trim();
        if equipment_id.is_empty() {
            return Err(AssetDeskError::InvalidInput("equipment id is empty".into()));
        }

        let path = format!("{DELETE_PATH}/{}", encode(equipment_id));
        self.client.delete(&path).await?;
        Ok(())
    }

    async fn sync_sheet(&self) -> Result<String> {
        let body = serde_json::json!({});
        let reply: BackendMessage = self.client.post(SYNC_SHEET_PATH, &body).await?;
        Ok(reply.message.unwrap_or_else(|| SYNC_SHEET_DONE.to_string()))
    }
}
