//! Statistics types produced from repair request snapshots
//!
//! All grouped maps keep the order in which a key was first seen. That order
//! is an artefact of the input and must not be used for display; use the
//! sorted views in `assetdesk-core` instead.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::UNSPECIFIED;

/* -------------------------------------------------------------------------- */
/* Dashboard statistics */
/* -------------------------------------------------------------------------- */

/// Requests filed under one topic code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicStats {
    /// Number of requests with this topic
    pub total: usize,

    /// Sub-count per room
    pub rooms: IndexMap<String, usize>,
}

/// Requests filed for one room
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    /// Number of requests for this room
    pub total: usize,

    /// Sub-count per topic code
    pub topics: IndexMap<String, usize>,

    /// Detail text of the most recent request seen for this room
    pub last_detail: Option<String>,
}

/// Requests handled by one receiver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverStats {
    pub total: usize,

    /// Full name from the user directory, or the e-mail itself
    pub display_name: String,
}

/// Aggregate over one repair-request snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepairStatistics {
    /// Length of the input list
    pub total_requests: usize,

    /// Topic code → stats
    pub topics: IndexMap<String, TopicStats>,

    /// Room → stats
    pub rooms: IndexMap<String, RoomStats>,

    /// Status label → count
    pub statuses: IndexMap<String, usize>,

    /// Receiver e-mail → stats
    pub receivers: IndexMap<String, ReceiverStats>,

    /// Mean resolved-request duration in hours (0 when nothing qualifies)
    pub average_repair_hours: f64,

    /// Resolved requests that contributed to the average
    pub timed_resolutions: usize,
}

impl RepairStatistics {
    pub fn is_empty(&self) -> bool {
        self.total_requests == 0
    }
}

/* -------------------------------------------------------------------------- */
/* Receiver profile statistics */
/* -------------------------------------------------------------------------- */

/// Breakdown for a single staff member's workload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverProfileStats {
    pub total_handled: usize,

    /// Topic code → count
    pub topics: IndexMap<String, usize>,

    /// Item description → count
    pub items: IndexMap<String, usize>,
}

/* -------------------------------------------------------------------------- */
/* Render-ready rows */
/* -------------------------------------------------------------------------- */

/// One row of a sorted count listing or chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    /// Grouping key (topic code, room, status label, e-mail)
    pub key: String,

    /// Human-readable label for the key
    pub label: String,

    pub count: usize,
}

impl CountEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            count,
        }
    }

    /// Placeholder shown when a highlight has no entry.
    pub fn unspecified() -> Self {
        Self::new(UNSPECIFIED, UNSPECIFIED, 0)
    }
}
