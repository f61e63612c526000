//! Scripted `SnapshotSource` for dashboard tests

use std::collections::HashMap;
use std::sync::Mutex;

use assetdesk_core::snapshot::{CollectionSnapshot, SnapshotSource};
use assetdesk_domain::{AssetDeskError, Result as DomainResult};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;

/// One scripted item of a subscription.
#[derive(Clone)]
pub enum Scripted {
    Snapshot(Value),
    Failure(AssetDeskError),
}

/// In-memory source that replays a fixed script per collection.
///
/// `fetch` returns the last scripted snapshot; `subscribe` replays the
/// whole script and then ends.
#[derive(Default)]
pub struct ScriptedSnapshotSource {
    scripts: Mutex<HashMap<String, Vec<Scripted>>>,
}

impl ScriptedSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(self, collection: &str, value: Value) -> Self {
        self.push(collection, Scripted::Snapshot(value));
        self
    }

    pub fn with_failure(self, collection: &str, error: AssetDeskError) -> Self {
        self.push(collection, Scripted::Failure(error));
        self
    }

    fn push(&self, collection: &str, item: Scripted) {
        self.scripts
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(item);
    }

    fn script(&self, collection: &str) -> Vec<Scripted> {
        self.scripts
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn materialize(collection: &str, item: Scripted) -> DomainResult<CollectionSnapshot> {
    match item {
        Scripted::Snapshot(value) => Ok(CollectionSnapshot::from_value(collection, value)),
        Scripted::Failure(error) => Err(error),
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSnapshotSource {
    async fn fetch(&self, collection: &str) -> DomainResult<CollectionSnapshot> {
        match self.script(collection).pop() {
            Some(item) => materialize(collection, item),
            None => Ok(CollectionSnapshot::empty(collection)),
        }
    }

    fn subscribe(&self, collection: &str) -> BoxStream<'static, DomainResult<CollectionSnapshot>> {
        let name = collection.to_string();
        stream::iter(self.script(collection))
            .map(move |item| materialize(&name, item))
            .boxed()
    }
}
