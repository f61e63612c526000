//! Application context - dependency injection container

use std::path::{Path, PathBuf};
use std::sync::Arc;

use assetdesk_core::{DashboardService, InventoryRepository, InventoryService, SnapshotSource};
use assetdesk_domain::{Config, Result};
use assetdesk_infra::{config, ApiClientConfig, CsvExporter, FileSnapshotSource, InventoryApiClient};
use tracing::info;

/// Type alias for snapshot source port trait object
type DynSnapshotSource = dyn SnapshotSource + Send + Sync + 'static;

/// Type alias for inventory repository port trait object
type DynInventoryRepository = dyn InventoryRepository + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub dashboard: Arc<DashboardService>,
    pub inventory: Arc<InventoryService>,
    pub exporter: CsvExporter,
}

impl AppContext {
    /// Load configuration from the environment or a config file and wire the
    /// production adapters.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::new_with_config(config)
    }

    /// Wire the production adapters for `config`, exporting into the current
    /// directory.
    pub fn new_with_config(config: Config) -> Result<Self> {
        Self::new_with_config_in_export_dir(config, ".")
    }

    pub fn new_with_config_in_export_dir<P>(config: Config, export_dir: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let snapshots: Arc<DynSnapshotSource> =
            Arc::new(FileSnapshotSource::from_config(&config.snapshots));
        let client = InventoryApiClient::for_session(
            ApiClientConfig::from(&config.api),
            config.session.clone(),
        )?;
        let inventory: Arc<DynInventoryRepository> = Arc::new(client);

        info!(
            snapshot_path = %config.snapshots.path,
            api = %config.api.base_url,
            signed_in = config.session.is_authenticated(),
            "application context initialised"
        );

        let export_dir = export_dir.as_ref().to_path_buf();
        Ok(Self::with_ports(config, snapshots, inventory, export_dir))
    }

    /// Build a context around already constructed ports.
    pub fn with_ports(
        config: Config,
        snapshots: Arc<DynSnapshotSource>,
        inventory: Arc<DynInventoryRepository>,
        export_dir: PathBuf,
    ) -> Self {
        let dashboard = Arc::new(DashboardService::new(snapshots, config.collections.clone()));
        let inventory = Arc::new(InventoryService::new(inventory));
        Self {
            config,
            dashboard,
            inventory,
            exporter: CsvExporter::new(export_dir),
        }
    }

    /// Same context, exporting into `export_dir` instead.
    pub fn with_export_dir(mut self, export_dir: impl Into<PathBuf>) -> Self {
        self.exporter = CsvExporter::new(export_dir);
        self
    }
}
