//! Single-pass grouping of repair requests

use assetdesk_domain::utils::hours_between;
use assetdesk_domain::{ReceiverStats, RepairRequest, RepairStatistics};

use crate::directory::UserDirectory;

/// Group `requests` by topic, room, status and receiver and compute the mean
/// repair duration.
///
/// Missing topic, room and receiver values count under the `"unspecified"`
/// sentinel, so per-topic and per-room totals both add up to
/// `requests.len()`. Receiver display names are resolved through `users`.
///
/// The average only covers resolved requests with two parseable timestamps
/// and a non-negative duration; when none qualify it is `0.0`.
pub fn aggregate(requests: &[RepairRequest], users: &UserDirectory) -> RepairStatistics {
    let mut stats = RepairStatistics {
        total_requests: requests.len(),
        ..RepairStatistics::default()
    };
    let mut total_hours = 0.0_f64;

    for request in requests {
        let topic = request.topic_or_unspecified();
        let room = request.room_or_unspecified();

        let topic_stats = stats.topics.entry(topic.to_string()).or_default();
        topic_stats.total += 1;
        *topic_stats.rooms.entry(room.to_string()).or_default() += 1;

        let room_stats = stats.rooms.entry(room.to_string()).or_default();
        room_stats.total += 1;
        *room_stats.topics.entry(topic.to_string()).or_default() += 1;
        room_stats.last_detail = request.detail_text.clone();

        let status = request.status_label().to_string();
        *stats.statuses.entry(status).or_default() += 1;

        let receiver = request.receiver_or_unspecified();
        let receiver_stats = stats
            .receivers
            .entry(receiver.to_string())
            .or_insert_with(|| ReceiverStats {
                total: 0,
                display_name: users.display_name(receiver).to_string(),
            });
        receiver_stats.total += 1;

        if let Some(hours) = repair_hours(request) {
            total_hours += hours;
            stats.timed_resolutions += 1;
        }
    }

    stats.average_repair_hours = total_hours / stats.timed_resolutions.max(1) as f64;
    stats
}

/// Duration of a resolved request in hours, if it can be measured.
fn repair_hours(request: &RepairRequest) -> Option<f64> {
    if !request.is_resolved() {
        return None;
    }
    let reported = request.reported_at.as_deref()?;
    let resolved = request.resolved_at.as_deref()?;
    hours_between(reported, resolved)
}

#[cfg(test)]
mod tests {
    use assetdesk_domain::constants::UNSPECIFIED;
    use assetdesk_domain::{RepairStatus, StaffMember};

    use super::*;

    fn request(topic: Option<&str>, room: Option<&str>) -> RepairRequest {
        RepairRequest {
            topic_code: topic.map(str::to_string),
            room: room.map(str::to_string),
            ..RepairRequest::default()
        }
    }

    fn received_by(email: &str) -> RepairRequest {
        RepairRequest {
            receiver_email: Some(email.to_string()),
            ..RepairRequest::default()
        }
    }

    fn with_status(status: RepairStatus) -> RepairRequest {
        RepairRequest {
            status: Some(status),
            ..RepairRequest::default()
        }
    }

    fn resolved(reported: &str, resolved: &str) -> RepairRequest {
        RepairRequest {
            status: Some(RepairStatus::Resolved),
            reported_at: Some(reported.to_string()),
            resolved_at: Some(resolved.to_string()),
            ..RepairRequest::default()
        }
    }

    fn sample() -> Vec<RepairRequest> {
        vec![
            request(Some("T1"), Some("501")),
            request(Some("T1"), Some("502")),
            request(Some("T2"), Some("501")),
            request(None, Some("503")),
            request(Some("T2"), None),
            request(None, None),
        ]
    }

    #[test]
    fn topic_totals_sum_to_input_length() {
        let requests = sample();
        let stats = aggregate(&requests, &UserDirectory::default());

        let sum: usize = stats.topics.values().map(|t| t.total).sum();
        assert_eq!(sum, requests.len());
        assert_eq!(stats.total_requests, requests.len());
    }

    #[test]
    fn room_totals_sum_to_input_length() {
        let requests = sample();
        let stats = aggregate(&requests, &UserDirectory::default());

        let sum: usize = stats.rooms.values().map(|r| r.total).sum();
        assert_eq!(sum, requests.len());
    }

    #[test]
    fn missing_topic_and_room_use_sentinel() {
        let stats = aggregate(&sample(), &UserDirectory::default());

        assert_eq!(stats.topics[UNSPECIFIED].total, 2);
        assert_eq!(stats.rooms[UNSPECIFIED].total, 2);
        assert_eq!(stats.topics["T1"].rooms["501"], 1);
        assert_eq!(stats.rooms["501"].topics["T2"], 1);
    }

    #[test]
    fn maps_keep_first_occurrence_order() {
        let stats = aggregate(&sample(), &UserDirectory::default());
        let topics: Vec<_> = stats.topics.keys().map(String::as_str).collect();
        assert_eq!(topics, vec!["T1", "T2", UNSPECIFIED]);
    }

    #[test]
    fn average_over_resolved_requests_only() {
        let requests = vec![
            resolved("2024-03-01T08:00:00Z", "2024-03-01T10:00:00Z"),
            resolved("2024-03-02T08:00:00Z", "2024-03-02T12:00:00Z"),
            RepairRequest {
                status: Some(RepairStatus::InProgress),
                reported_at: Some("2024-03-03T08:00:00Z".into()),
                resolved_at: Some("2024-03-03T20:00:00Z".into()),
                ..RepairRequest::default()
            },
        ];
        let stats = aggregate(&requests, &UserDirectory::default());

        assert!((stats.average_repair_hours - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.timed_resolutions, 2);
    }

    #[test]
    fn no_resolved_requests_average_is_zero() {
        let stats = aggregate(&sample(), &UserDirectory::default());
        assert!(stats.average_repair_hours.abs() < f64::EPSILON);
        assert_eq!(stats.timed_resolutions, 0);

        let empty = aggregate(&[], &UserDirectory::default());
        assert!(empty.is_empty());
        assert!(empty.average_repair_hours.abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_and_negative_durations_are_excluded() {
        let requests = vec![
            resolved("2024-03-01T08:00:00Z", "2024-03-01T10:00:00Z"),
            resolved("not a date", "2024-03-01T10:00:00Z"),
            resolved("2024-03-01T10:00:00Z", "2024-03-01T08:00:00Z"),
            with_status(RepairStatus::Resolved),
        ];
        let stats = aggregate(&requests, &UserDirectory::default());

        assert!(stats.average_repair_hours.is_finite());
        assert!((stats.average_repair_hours - 2.0).abs() < f64::EPSILON);
        assert_eq!(stats.timed_resolutions, 1);
        assert_eq!(stats.statuses["resolved"], 4);
    }

    #[test]
    fn receivers_resolve_display_names() {
        let tech = StaffMember::new("tech@example.org", "Somchai");
        let users = UserDirectory::from_members(vec![tech]);
        let requests = vec![
            received_by("tech@example.org"),
            received_by("tech@example.org"),
            received_by("temp@example.org"),
            RepairRequest::default(),
        ];
        let stats = aggregate(&requests, &users);

        assert_eq!(stats.receivers["tech@example.org"].total, 2);
        assert_eq!(stats.receivers["tech@example.org"].display_name, "Somchai");
        assert_eq!(
            stats.receivers["temp@example.org"].display_name,
            "temp@example.org"
        );
        assert_eq!(stats.receivers[UNSPECIFIED].total, 1);
    }

    #[test]
    fn room_keeps_detail_of_last_request() {
        let requests: Vec<_> = ["first", "second"]
            .into_iter()
            .map(|detail| RepairRequest {
                room: Some("501".into()),
                detail_text: Some(detail.into()),
                ..RepairRequest::default()
            })
            .collect();
        let stats = aggregate(&requests, &UserDirectory::default());
        assert_eq!(stats.rooms["501"].last_detail.as_deref(), Some("second"));
    }

    #[test]
    fn status_counts_use_labels() {
        let requests = vec![
            with_status(RepairStatus::Reported),
            with_status(RepairStatus::Other("escalated".into())),
            RepairRequest::default(),
        ];
        let stats = aggregate(&requests, &UserDirectory::default());

        assert_eq!(stats.statuses["reported"], 1);
        assert_eq!(stats.statuses["escalated"], 1);
        assert_eq!(stats.statuses[UNSPECIFIED], 1);
    }
}
