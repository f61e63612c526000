//! Shared helpers for `assetdesk-infra` integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

use assetdesk_domain::Session;
use assetdesk_infra::api::{ApiClientConfig, InventoryApiClient};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-session-token";

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness writer.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Inventory client pointed at the mock server, signed in with [`TEST_TOKEN`].
pub fn inventory_client(server: &MockServer) -> InventoryApiClient {
    inventory_client_with(server, Session::new(TEST_TOKEN))
}

pub fn inventory_client_with(server: &MockServer, session: Session) -> InventoryApiClient {
    let config = ApiClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    };
    InventoryApiClient::for_session(config, session).expect("inventory client should build")
}

/// Equipment record as the backend returns it.
pub fn equipment_json(id: &str, name: &str, price: f64, date_add: &str) -> Value {
    json!({
        "equipment_id": id,
        "equipment_name": name,
        "spec": "standard",
        "equipment_type": "Computer",
        "price": price,
        "date_add": date_add,
        "location": "Building 5",
    })
}

/// Temporary JSON export of the document store.
pub struct ExportFile {
    pub path: PathBuf,
    _dir: TempDir,
}

impl ExportFile {
    pub fn new(document: &Value) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("export.json");
        replace_document(&path, document);
        Self { path, _dir: dir }
    }

    pub fn replace(&self, document: &Value) {
        replace_document(&self.path, document);
    }
}

fn replace_document(path: &Path, document: &Value) {
    let staging = path.with_extension("tmp");
    std::fs::write(&staging, document.to_string())
        .expect("export should be written");
    std::fs::rename(&staging, path).expect("export should be renamed into place");
}
