//! Repair request statistics
//!
//! Everything here is a pure function of an in-memory snapshot, so the
//! dashboard can simply re-run it whenever a newer snapshot arrives.

pub mod aggregator;
pub mod highlights;
pub mod receivers;
pub mod selection;

pub use aggregator::aggregate;
pub use highlights::{
    most_active_receiver, most_repaired_room, sorted_receivers, sorted_rooms, sorted_statuses,
    sorted_topics, topic_chart_series,
};
pub use receivers::{receiver_profile, staff_overview, ReceiverOverview};
pub use selection::{filter_by_receiver, filter_by_topic};
