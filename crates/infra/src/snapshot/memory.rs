//! Snapshot source fed by the embedding program
//!
//! Each collection is a `tokio::sync::watch` channel holding the latest raw
//! value. A collection nobody has published yet reads as empty.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use assetdesk_core::{CollectionSnapshot, SnapshotSource};
use assetdesk_domain::{AssetDeskError, Result};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

type Channels = HashMap<String, watch::Sender<Value>>;

/// In-process snapshot source
#[derive(Default)]
pub struct InMemorySnapshotSource {
    channels: Mutex<Channels>,
}

impl InMemorySnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content of `collection` and notify subscribers.
    pub fn publish(&self, collection: &str, value: Value) -> Result<()> {
        let mut channels = self.lock()?;
        match channels.entry(collection.to_string()) {
            Entry::Occupied(entry) => {
                entry.get().send_replace(value);
            }
            Entry::Vacant(entry) => {
                entry.insert(watch::channel(value).0);
            }
        }
        debug!(collection, "published collection snapshot");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Channels>> {
        self.channels
            .lock()
            .map_err(|_| AssetDeskError::Internal("snapshot channel lock poisoned".into()))
    }

    fn receiver(&self, collection: &str) -> Result<watch::Receiver<Value>> {
        let mut channels = self.lock()?;
        let sender = channels
            .entry(collection.to_string())
            .or_insert_with(|| watch::channel(Value::Null).0);
        Ok(sender.subscribe())
    }
}

#[async_trait]
impl SnapshotSource for InMemorySnapshotSource {
    async fn fetch(&self, collection: &str) -> Result<CollectionSnapshot> {
        let value = self
            .lock()?
            .get(collection)
            .map(|sender| sender.borrow().clone())
            .unwrap_or(Value::Null);
        Ok(CollectionSnapshot::from_value(collection, value))
    }

    fn subscribe(&self, collection: &str) -> BoxStream<'static, Result<CollectionSnapshot>> {
        let receiver = match self.receiver(collection) {
            Ok(receiver) => receiver,
            Err(err) => return stream::once(async move { Err(err) }).boxed(),
        };
        let initial = (receiver, collection.to_string(), true);

        stream::unfold(initial, |(mut receiver, collection, first)| async move {
            // closed channel ends the subscription
            if !first && receiver.changed().await.is_err() {
                return None;
            }
            let value = receiver.borrow_and_update().clone();
            let snapshot = CollectionSnapshot::from_value(collection.clone(), value);
            Some((Ok(snapshot), (receiver, collection, false)))
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn unpublished_collection_is_empty() {
        let source = InMemorySnapshotSource::new();

        assert!(source.fetch("topics").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_returns_latest_publish() {
        let source = InMemorySnapshotSource::new();
        source.publish("topics", json!([{"code": "T1"}])).unwrap();
        let both = json!([{"code": "T1"}, {"code": "T2"}]);
        source.publish("topics", both).unwrap();

        assert_eq!(source.fetch("topics").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn subscription_starts_with_current_then_follows_publishes() {
        let source = InMemorySnapshotSource::new();
        let first = json!({"-a": {"code": "T1"}});
        source.publish("topics", first).unwrap();

        let mut updates = source.subscribe("topics");
        assert_eq!(updates.next().await.unwrap().unwrap().len(), 1);

        let both = json!({"-a": {"code": "T1"}, "-b": {"code": "T2"}});
        source.publish("topics", both).unwrap();
        let next = tokio::time::timeout(Duration::from_secs(1), updates.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn subscribing_before_publish_sees_the_publish() {
        let source = InMemorySnapshotSource::new();

        let mut updates = source.subscribe("users");
        assert!(updates.next().await.unwrap().unwrap().is_empty());

        source.publish("users", json!([{"email": "a@x"}])).unwrap();
        let next = tokio::time::timeout(Duration::from_secs(1), updates.next())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(next.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn dropping_the_source_ends_subscriptions() {
        let source = InMemorySnapshotSource::new();
        let mut updates = source.subscribe("topics");
        assert!(updates.next().await.is_some());

        drop(source);
        assert!(updates.next().await.is_none());
    }
}
