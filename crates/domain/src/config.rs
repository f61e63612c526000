//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_SNAPSHOT_POLL_MS, DEFAULT_STAFF_POSITIONS,
    REPAIR_REQUESTS_COLLECTION, TOPICS_COLLECTION, USERS_COLLECTION,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: Session,
    pub snapshots: SnapshotConfig,
    #[serde(default)]
    pub collections: CollectionNames,
    #[serde(default = "default_staff_positions")]
    pub staff_positions: Vec<String>,
}

/// Inventory REST backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Explicitly passed session state.
///
/// Replaces the browser-local token; whoever constructs the session owns how
/// the token was obtained.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub full_name: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            full_name: None,
        }
    }

    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// Snapshot source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// JSON export of the document store, keyed by collection name.
    pub path: String,
    #[serde(default = "default_poll_ms")]
    pub poll_interval_ms: u64,
}

/// Names of the document store collections the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNames {
    pub repair_requests: String,
    pub topics: String,
    pub users: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            repair_requests: REPAIR_REQUESTS_COLLECTION.to_string(),
            topics: TOPICS_COLLECTION.to_string(),
            users: USERS_COLLECTION.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            },
            session: Session::default(),
            snapshots: SnapshotConfig {
                path: "snapshot.json".to_string(),
                poll_interval_ms: DEFAULT_SNAPSHOT_POLL_MS,
            },
            collections: CollectionNames::default(),
            staff_positions: default_staff_positions(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

fn default_poll_ms() -> u64 {
    DEFAULT_SNAPSHOT_POLL_MS
}

fn default_staff_positions() -> Vec<String> {
    DEFAULT_STAFF_POSITIONS
        .iter()
        .map(|p| (*p).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_debug_redacts_token() {
        let session = Session::new("secret-token").with_full_name("Somchai");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("Somchai"));
    }

    #[test]
    fn blank_token_is_not_authenticated() {
        assert!(!Session::new("   ").is_authenticated());
        assert!(!Session::default().is_authenticated());
        assert!(Session::new("abc").is_authenticated());
    }

    #[test]
    fn token_is_never_serialized() {
        let json = serde_json::to_string(&Session::new("secret")).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let config: Config = serde_json::from_str(
            r#"{"api":{"base_url":"http://api"},"snapshots":{"path":"dump.json"}}"#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, DEFAULT_API_TIMEOUT_SECS);
        assert_eq!(config.snapshots.poll_interval_ms, DEFAULT_SNAPSHOT_POLL_MS);
        assert_eq!(config.collections, CollectionNames::default());
        assert_eq!(config.staff_positions.len(), 3);
    }
}
