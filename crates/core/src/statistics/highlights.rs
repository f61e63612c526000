//! Render-ready views over [`RepairStatistics`]
//!
//! The grouped maps iterate in first-occurrence order, which depends on the
//! input. Everything shown to a user goes through one of these functions so
//! the display order is explicit: count descending, then label ascending.

use std::cmp::Ordering;

use assetdesk_domain::constants::UNSPECIFIED;
use assetdesk_domain::{CountEntry, RepairStatistics};

use crate::directory::TopicDirectory;

/* -------------------------------------------------------------------------- */
/* "Most" highlights */
/* -------------------------------------------------------------------------- */

/// Room with the strictly greatest number of requests.
///
/// On a tie the room seen first in the input wins. `None` when there are no
/// requests at all.
pub fn most_repaired_room(stats: &RepairStatistics) -> Option<CountEntry> {
    first_maximum(room_entries(stats))
}

/// Receiver who handled the most requests, ignoring unassigned requests.
///
/// Same tie rule as [`most_repaired_room`].
pub fn most_active_receiver(stats: &RepairStatistics) -> Option<CountEntry> {
    let assigned = receiver_entries(stats).filter(|entry| entry.key != UNSPECIFIED);
    first_maximum(assigned)
}

fn first_maximum<I>(entries: I) -> Option<CountEntry>
where
    I: Iterator<Item = CountEntry>,
{
    entries.fold(None, |best, entry| match best {
        Some(current) if current.count >= entry.count => Some(current),
        _ => Some(entry),
    })
}

/* -------------------------------------------------------------------------- */
/* Sorted listings */
/* -------------------------------------------------------------------------- */

/// Topics labelled with their resolved names.
pub fn sorted_topics(stats: &RepairStatistics, topics: &TopicDirectory) -> Vec<CountEntry> {
    sort_entries(
        stats
            .topics
            .iter()
            .map(|(code, s)| CountEntry::new(code, topics.resolve(code), s.total)),
    )
}

pub fn sorted_rooms(stats: &RepairStatistics) -> Vec<CountEntry> {
    sort_entries(room_entries(stats))
}

pub fn sorted_statuses(stats: &RepairStatistics) -> Vec<CountEntry> {
    sort_entries(
        stats
            .statuses
            .iter()
            .map(|(status, &count)| CountEntry::new(status, status, count)),
    )
}

pub fn sorted_receivers(stats: &RepairStatistics) -> Vec<CountEntry> {
    sort_entries(receiver_entries(stats))
}

/// `(topic name, request count)` pairs for the topic chart.
pub fn topic_chart_series(
    stats: &RepairStatistics,
    topics: &TopicDirectory,
) -> Vec<(String, usize)> {
    sorted_topics(stats, topics)
        .into_iter()
        .map(|entry| (entry.label, entry.count))
        .collect()
}

fn room_entries(stats: &RepairStatistics) -> impl Iterator<Item = CountEntry> + '_ {
    stats
        .rooms
        .iter()
        .map(|(room, s)| CountEntry::new(room, room, s.total))
}

fn receiver_entries(stats: &RepairStatistics) -> impl Iterator<Item = CountEntry> + '_ {
    stats
        .receivers
        .iter()
        .map(|(email, s)| CountEntry::new(email, &s.display_name, s.total))
}

fn sort_entries<I>(entries: I) -> Vec<CountEntry>
where
    I: Iterator<Item = CountEntry>,
{
    let mut sorted: Vec<CountEntry> = entries.collect();
    sorted.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.label.cmp(&b.label).then_with(|| a.key.cmp(&b.key)),
        other => other,
    });
    sorted
}
