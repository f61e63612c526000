//! Snapshot source backed by a JSON export of the document store
//!
//! The file holds one top-level object keyed by collection name, the shape
//! the realtime database console exports. Subscriptions poll the file and
//! emit a new snapshot only when the collection's content hash changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use assetdesk_core::{CollectionSnapshot, SnapshotSource};
use assetdesk_domain::{AssetDeskError, Result, SnapshotConfig};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Polling snapshot source over a JSON export file
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
    poll_interval: Duration,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
        }
    }

    pub fn from_config(config: &SnapshotConfig) -> Self {
        Self::new(&config.path, Duration::from_millis(config.poll_interval_ms))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch(&self, collection: &str) -> Result<CollectionSnapshot> {
        let value = read_collection(&self.path, collection).await?;
        Ok(CollectionSnapshot::from_value(collection, value))
    }

    fn subscribe(&self, collection: &str) -> BoxStream<'static, Result<CollectionSnapshot>> {
        let state = PollState {
            path: self.path.clone(),
            collection: collection.to_string(),
            interval: self.poll_interval,
            last_hash: None,
            failing: false,
            started: false,
        };

        stream::unfold(state, |mut state| async move {
            loop {
                if state.started {
                    tokio::time::sleep(state.interval).await;
                }
                state.started = true;

                match read_collection(&state.path, &state.collection).await {
                    Ok(value) => {
                        state.failing = false;
                        let hash = content_hash(&value);
                        if state.last_hash == Some(hash) {
                            continue;
                        }
                        debug!(
                            collection = %state.collection,
                            hash = %hash.to_hex(),
                            "collection changed"
                        );
                        state.last_hash = Some(hash);
                        let collection = state.collection.clone();
                        let snapshot = CollectionSnapshot::from_value(collection, value);
                        return Some((Ok(snapshot), state));
                    }
                    // one error per failure run; the next good read re-emits
                    Err(_) if state.failing => continue,
                    Err(err) => {
                        warn!(
                            collection = %state.collection,
                            error = %err,
                            "snapshot file unreadable"
                        );
                        state.failing = true;
                        state.last_hash = None;
                        return Some((Err(err), state));
                    }
                }
            }
        })
        .boxed()
    }
}

struct PollState {
    path: PathBuf,
    collection: String,
    interval: Duration,
    last_hash: Option<blake3::Hash>,
    failing: bool,
    started: bool,
}

async fn read_collection(path: &Path, collection: &str) -> Result<Value> {
    let bytes = tokio::fs::read(path).await.map_err(to_domain)?;
    let document: Value = serde_json::from_slice(&bytes).map_err(to_domain)?;

    match document {
        Value::Object(mut collections) => Ok(collections.remove(collection).unwrap_or(Value::Null)),
        Value::Null => Ok(Value::Null),
        _ => Err(AssetDeskError::Decode(format!(
            "{} must contain an object keyed by collection name",
            path.display()
        ))),
    }
}

fn to_domain<E>(err: E) -> AssetDeskError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

fn content_hash(value: &Value) -> blake3::Hash {
    blake3::hash(value.to_string().as_bytes())
}
