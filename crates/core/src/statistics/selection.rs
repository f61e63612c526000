//! On-demand subsets of the request list
//!
//! These are plain filters over the original list. They do not apply the
//! `"unspecified"` sentinel: a request without a topic code never matches.

use assetdesk_domain::RepairRequest;

/// Requests filed under `code`, in original relative order.
pub fn filter_by_topic<'a>(requests: &'a [RepairRequest], code: &str) -> Vec<&'a RepairRequest> {
    requests
        .iter()
        .filter(|r| r.topic_code.as_deref() == Some(code))
        .collect()
}

/// Requests received by `email`, in original relative order.
pub fn filter_by_receiver<'a>(
    requests: &'a [RepairRequest],
    email: &str,
) -> Vec<&'a RepairRequest> {
    requests
        .iter()
        .filter(|r| r.receiver_email.as_deref() == Some(email))
        .collect()
}

#[cfg(test)]
mod tests {
    use assetdesk_domain::constants::UNSPECIFIED;

    use super::*;

    fn tagged(topic: Option<&str>, detail: &str) -> RepairRequest {
        RepairRequest {
            topic_code: topic.map(str::to_string),
            detail_text: Some(detail.to_string()),
            ..RepairRequest::default()
        }
    }

    #[test]
    fn returns_matching_requests_in_order() {
        let requests = vec![
            tagged(Some("T1"), "a"),
            tagged(Some("T2"), "b"),
            tagged(Some("T1"), "c"),
            tagged(Some("T3"), "d"),
            tagged(Some("T1"), "e"),
        ];

        let selected = filter_by_topic(&requests, "T1");
        let details: Vec<_> = selected
            .iter()
            .filter_map(|r| r.detail_text.as_deref())
            .collect();
        assert_eq!(details, vec!["a", "c", "e"]);
    }

    #[test]
    fn sentinel_does_not_match_missing_topic() {
        let requests = vec![tagged(None, "a")];
        assert!(filter_by_topic(&requests, UNSPECIFIED).is_empty());
    }

    #[test]
    fn filter_by_receiver_matches_exact_email() {
        let mut requests: Vec<_> = ["a@example.org", "A@example.org"]
            .into_iter()
            .map(|email| RepairRequest {
                receiver_email: Some(email.into()),
                ..RepairRequest::default()
            })
            .collect();
        requests.push(RepairRequest::default());
        assert_eq!(filter_by_receiver(&requests, "a@example.org").len(), 1);
    }
}
