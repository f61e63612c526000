//! Collection snapshots and the port that delivers them
//!
//! A snapshot is the complete current content of one document store
//! collection. Sources never send deltas: every item a subscription yields
//! fully replaces the previous one.

use assetdesk_domain::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Full image of a collection at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub collection: String,
    pub records: Vec<Value>,
    pub received_at: DateTime<Utc>,
}

impl CollectionSnapshot {
    /// Build a snapshot from the raw value stored under a collection.
    ///
    /// Objects keyed by push id contribute their values in key order, arrays
    /// their non-null elements, and `null` (a collection that does not exist)
    /// nothing.
    pub fn from_value(collection: impl Into<String>, value: Value) -> Self {
        let collection = collection.into();
        let records = match value {
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                entries.into_iter().map(|(_, record)| record).collect()
            }
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .collect(),
            Value::Null => Vec::new(),
            other => {
                warn!(
                    collection = %collection,
                    kind = value_kind(&other),
                    "collection is not a container, treating as empty"
                );
                Vec::new()
            }
        };
        Self {
            collection,
            records,
            received_at: Utc::now(),
        }
    }

    pub fn empty(collection: impl Into<String>) -> Self {
        Self::from_value(collection, Value::Null)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decode every record as `T`, skipping (and logging) the ones that fail.
    pub fn decode_records<T: DeserializeOwned>(&self) -> Vec<T> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match T::deserialize(record) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    warn!(
                        collection = %self.collection,
                        index,
                        error = %err,
                        "skipping undecodable record"
                    );
                    None
                }
            })
            .collect()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Source of full collection snapshots
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Read the current content of a collection once.
    async fn fetch(&self, collection: &str) -> Result<CollectionSnapshot>;

    /// Subscribe to a collection.
    ///
    /// The stream yields the current content first and then one snapshot per
    /// change. Dropping the stream ends the subscription; calling `subscribe`
    /// again starts a fresh one.
    fn subscribe(&self, collection: &str) -> BoxStream<'static, Result<CollectionSnapshot>>;
}
