//! Shared helpers for command integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use assetdesk_domain::{Config, Session};
use assetdesk_infra::{ApiClientConfig, InMemorySnapshotSource, InventoryApiClient};
use assetdesk_lib::AppContext;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "command-test-token";

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Application context over an in-memory store and a mock inventory backend.
pub struct TestApp {
    pub ctx: AppContext,
    pub snapshots: Arc<InMemorySnapshotSource>,
    pub server: MockServer,
    pub export_dir: TempDir,
}

impl TestApp {
    /// Context whose store already holds [`store_collections`].
    pub async fn seeded() -> Self {
        let app = Self::empty().await;
        app.publish(store_collections());
        app
    }

    pub async fn empty() -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let export_dir = TempDir::new().expect("export dir should be created");
        let snapshots = Arc::new(InMemorySnapshotSource::new());

        let config = Config {
            session: Session::new(TEST_TOKEN),
            ..Config::default()
        };
        let api = ApiClientConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(5),
        };
        let inventory = InventoryApiClient::for_session(api, config.session.clone())
            .expect("inventory client should build");

        let ctx = AppContext::with_ports(
            config,
            snapshots.clone(),
            Arc::new(inventory),
            export_dir.path().to_path_buf(),
        );

        Self {
            ctx,
            snapshots,
            server,
            export_dir,
        }
    }

    /// Number of files written to the export directory.
    pub fn export_count(&self) -> usize {
        std::fs::read_dir(self.export_dir.path())
            .expect("export dir should be readable")
            .count()
    }

    /// Publish every collection of a `{ collection: records }` document.
    pub fn publish(&self, document: Value) {
        let Value::Object(collections) = document else {
            panic!("store document must be an object");
        };
        for (name, records) in collections {
            self.snapshots
                .publish(&name, records)
                .expect("publish should succeed");
        }
    }
}

/// Three requests over two topics, handled by one staff member.
pub fn store_collections() -> Value {
    json!({
        "คำขอแจ้งซ่อม": {
            "-r1": {
                "รหัสหัวเรื่อง": "T1",
                "ห้อง": "501",
                "สถานะการซ่อม": "ซ่อมเสร็จแล้ว",
                "วันที่เวลาแจ้ง": "2024-03-01T08:00:00Z",
                "วันที่เวลาซ่อมเสร็จ": "2024-03-01T10:00:00Z",
                "หมายเลขครุภัณฑ์": "7440-001",
                "รายการ": "Access point",
                "อีเมลผู้รับเรื่อง": "tech@example.org"
            },
            "-r2": {
                "รหัสหัวเรื่อง": "T1",
                "ห้อง": "502",
                "สถานะการซ่อม": "resolved",
                "วันที่เวลาแจ้ง": "2024-03-02T08:00:00Z",
                "วันที่เวลาซ่อมเสร็จ": "2024-03-02T12:00:00Z",
                "รายการ": "Switch",
                "อีเมลผู้รับเรื่อง": "tech@example.org"
            },
            "-r3": {
                "รหัสหัวเรื่อง": "T2",
                "ห้อง": "501",
                "สถานะการซ่อม": "แจ้งซ่อม",
                "รายละเอียดคำขอแจ้งซ่อม": "Projector flickers"
            }
        },
        "หัวเรื่อง": {
            "-t1": { "รหัสหัวเรื่อง": "T1", "ชื่อหัวเรื่อง": "ระบบเครือข่าย" },
            "-t2": { "รหัสหัวเรื่อง": "T2", "ชื่อหัวเรื่อง": "Audio/Visual" }
        },
        "ผู้ใช้งาน": {
            "-u1": { "อีเมล": "tech@example.org", "ชื่อ": "Somchai", "ตำแหน่ง": "ช่างเทคนิค" },
            "-u2": { "อีเมล": "clerk@example.org", "ชื่อ": "Malee", "ตำแหน่ง": "เจ้าหน้าที่ธุรการ" }
        }
    })
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

/// Read an exported CSV without its byte order mark.
pub fn read_export(path: &std::path::Path) -> String {
    let text = std::fs::read_to_string(path).expect("export should be readable");
    text.trim_start_matches('\u{feff}').to_string()
}
