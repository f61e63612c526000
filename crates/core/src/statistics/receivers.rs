//! Per-staff workload breakdown for the admin view

use assetdesk_domain::{ReceiverProfileStats, RepairRequest, StaffMember};

use super::selection::filter_by_receiver;
use crate::directory::UserDirectory;

/// A staff member together with the requests they received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverOverview {
    pub member: StaffMember,
    pub stats: ReceiverProfileStats,
}

/// Workload of the receiver with `email`.
///
/// Missing topic codes and item descriptions count under `"unspecified"`.
pub fn receiver_profile(requests: &[RepairRequest], email: &str) -> ReceiverProfileStats {
    let handled = filter_by_receiver(requests, email);
    let mut stats = ReceiverProfileStats {
        total_handled: handled.len(),
        ..ReceiverProfileStats::default()
    };

    for request in handled {
        let topic = request.topic_or_unspecified().to_string();
        *stats.topics.entry(topic).or_default() += 1;
        let item = request.item_or_unspecified().to_string();
        *stats.items.entry(item).or_default() += 1;
    }

    stats
}

/// One overview per staff member holding one of `positions`.
pub fn staff_overview(
    requests: &[RepairRequest],
    users: &UserDirectory,
    positions: &[String],
) -> Vec<ReceiverOverview> {
    users
        .staff(positions)
        .filter_map(|member| {
            let email = member.email.as_deref()?;
            Some(ReceiverOverview {
                member: member.clone(),
                stats: receiver_profile(requests, email),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assetdesk_domain::constants::UNSPECIFIED;

    use super::*;

    fn handled_by(email: &str, topic: Option<&str>, item: Option<&str>) -> RepairRequest {
        RepairRequest {
            receiver_email: Some(email.to_string()),
            topic_code: topic.map(str::to_string),
            item_description: item.map(str::to_string),
            ..RepairRequest::default()
        }
    }

    #[test]
    fn profile_counts_topics_and_items() {
        let requests = vec![
            handled_by("tech@example.org", Some("T1"), Some("Projector")),
            handled_by("tech@example.org", Some("T1"), None),
            handled_by("tech@example.org", None, Some("Projector")),
            handled_by("other@example.org", Some("T2"), Some("Printer")),
        ];

        let stats = receiver_profile(&requests, "tech@example.org");
        assert_eq!(stats.total_handled, 3);
        assert_eq!(stats.topics["T1"], 2);
        assert_eq!(stats.topics[UNSPECIFIED], 1);
        assert_eq!(stats.items["Projector"], 2);
        assert_eq!(stats.items[UNSPECIFIED], 1);
        assert!(!stats.items.contains_key("Printer"));
    }

    #[test]
    fn profile_for_unknown_receiver_is_empty() {
        let stats = receiver_profile(&[], "nobody@example.org");
        assert_eq!(stats, ReceiverProfileStats::default());
    }

    #[test]
    fn overview_lists_staff_only() {
        let positions = vec!["ช่างเทคนิค".to_string()];
        let users = UserDirectory::from_members(vec![
            StaffMember::new("tech@example.org", "Tech").with_position("ช่างเทคนิค"),
            StaffMember::new("student@example.org", "Student").with_position("นักศึกษา"),
        ]);
        let requests = vec![handled_by("tech@example.org", Some("T1"), Some("Mouse"))];

        let overview = staff_overview(&requests, &users, &positions);
        assert_eq!(overview.len(), 1);
        assert_eq!(overview[0].member.full_name.as_deref(), Some("Tech"));
        assert_eq!(overview[0].stats.total_handled, 1);
    }
}
