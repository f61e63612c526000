//! Dashboard service - recomputes statistics from the latest snapshots

use std::sync::Arc;

use assetdesk_domain::{
    CollectionNames, CountEntry, RepairRequest, RepairStatistics, Result, StaffMember, Topic,
};
use futures::future::ready;
use futures::stream::{self, BoxStream, StreamExt};
use tracing::debug;

use crate::directory::{TopicDirectory, UserDirectory};
use crate::snapshot::{CollectionSnapshot, SnapshotSource};
use crate::statistics::{self, aggregate, filter_by_topic};

/// Everything the dashboard renders, computed from one set of snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub statistics: RepairStatistics,
    pub topics: TopicDirectory,
    pub users: UserDirectory,
    pub requests: Vec<RepairRequest>,
}

/// Requests behind one row of the topic table
#[derive(Debug, Clone, PartialEq)]
pub struct TopicDetail<'a> {
    pub code: String,
    pub name: String,
    pub requests: Vec<&'a RepairRequest>,
}

impl DashboardView {
    pub fn build(
        requests: Vec<RepairRequest>,
        topics: TopicDirectory,
        users: UserDirectory,
    ) -> Self {
        let statistics = aggregate(&requests, &users);
        Self {
            statistics,
            topics,
            users,
            requests,
        }
    }

    /// Requests filed under `code` plus the code's display name.
    pub fn topic_detail(&self, code: &str) -> TopicDetail<'_> {
        TopicDetail {
            code: code.to_string(),
            name: self.topics.resolve(code).to_string(),
            requests: filter_by_topic(&self.requests, code),
        }
    }

    pub fn most_repaired_room(&self) -> Option<CountEntry> {
        statistics::most_repaired_room(&self.statistics)
    }

    pub fn most_active_receiver(&self) -> Option<CountEntry> {
        statistics::most_active_receiver(&self.statistics)
    }

    pub fn sorted_topics(&self) -> Vec<CountEntry> {
        statistics::sorted_topics(&self.statistics, &self.topics)
    }
}

/// Dashboard use cases over a [`SnapshotSource`]
pub struct DashboardService {
    source: Arc<dyn SnapshotSource>,
    collections: CollectionNames,
}

impl DashboardService {
    pub fn new(source: Arc<dyn SnapshotSource>, collections: CollectionNames) -> Self {
        Self {
            source,
            collections,
        }
    }

    /// Fetch the three collections once and build a view.
    pub async fn load(&self) -> Result<DashboardView> {
        let (requests, topics, users) = futures::try_join!(
            self.source.fetch(&self.collections.repair_requests),
            self.source.fetch(&self.collections.topics),
            self.source.fetch(&self.collections.users),
        )?;

        Ok(DashboardView::build(
            decode_requests(&requests),
            decode_topics(&topics),
            decode_users(&users),
        ))
    }

    /// Subscribe to all three collections.
    ///
    /// A view is yielded once every collection has delivered its first
    /// snapshot, and again after every later snapshot from any of them.
    /// Errors are passed through; the caller decides whether to keep polling.
    pub fn watch(&self) -> BoxStream<'static, Result<DashboardView>> {
        let names = &self.collections;
        let updates = stream::select_all(vec![
            self.tagged(&names.repair_requests, Update::Requests),
            self.tagged(&names.topics, Update::Topics),
            self.tagged(&names.users, Update::Users),
        ]);

        let mut inputs = DashboardInputs::default();
        updates
            .filter_map(move |update| {
                ready(match update {
                    Ok(update) => {
                        inputs.apply(update);
                        inputs.view().map(Ok)
                    }
                    Err(err) => Some(Err(err)),
                })
            })
            .boxed()
    }

    fn tagged(
        &self,
        collection: &str,
        tag: fn(CollectionSnapshot) -> Update,
    ) -> BoxStream<'static, Result<Update>> {
        self.source
            .subscribe(collection)
            .map(move |snapshot| snapshot.map(tag))
            .boxed()
    }
}

enum Update {
    Requests(CollectionSnapshot),
    Topics(CollectionSnapshot),
    Users(CollectionSnapshot),
}

/// Latest decoded content of each collection
#[derive(Default)]
struct DashboardInputs {
    requests: Option<Vec<RepairRequest>>,
    topics: Option<TopicDirectory>,
    users: Option<UserDirectory>,
}

impl DashboardInputs {
    fn apply(&mut self, update: Update) {
        match update {
            Update::Requests(snapshot) => self.requests = Some(decode_requests(&snapshot)),
            Update::Topics(snapshot) => self.topics = Some(decode_topics(&snapshot)),
            Update::Users(snapshot) => self.users = Some(decode_users(&snapshot)),
        }
    }

    fn view(&self) -> Option<DashboardView> {
        let requests = self.requests.clone()?;
        let topics = self.topics.clone()?;
        let users = self.users.clone()?;
        Some(DashboardView::build(requests, topics, users))
    }
}

fn decode_requests(snapshot: &CollectionSnapshot) -> Vec<RepairRequest> {
    debug!(collection = %snapshot.collection, records = snapshot.len(), "decoding repair requests");
    snapshot.decode_records()
}

fn decode_topics(snapshot: &CollectionSnapshot) -> TopicDirectory {
    debug!(collection = %snapshot.collection, records = snapshot.len(), "decoding topics");
    TopicDirectory::from_topics(&snapshot.decode_records::<Topic>())
}

fn decode_users(snapshot: &CollectionSnapshot) -> UserDirectory {
    debug!(collection = %snapshot.collection, records = snapshot.len(), "decoding users");
    UserDirectory::from_members(snapshot.decode_records::<StaffMember>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_detail_resolves_name_and_filters() {
        let requests: Vec<_> = ["T1", "T2"]
            .into_iter()
            .map(|code| RepairRequest {
                topic_code: Some(code.into()),
                ..RepairRequest::default()
            })
            .collect();
        let topics = TopicDirectory::from_topics(&[Topic::new("T1", "Network")]);
        let view = DashboardView::build(requests, topics, UserDirectory::default());

        let detail = view.topic_detail("T1");
        assert_eq!(detail.name, "Network");
        assert_eq!(detail.requests.len(), 1);

        let unknown = view.topic_detail("T9");
        assert_eq!(unknown.name, "T9");
        assert!(unknown.requests.is_empty());
    }

    #[test]
    fn inputs_wait_for_every_collection() {
        let mut inputs = DashboardInputs::default();
        inputs.apply(Update::Requests(CollectionSnapshot::empty("requests")));
        inputs.apply(Update::Topics(CollectionSnapshot::empty("topics")));
        assert!(inputs.view().is_none());

        inputs.apply(Update::Users(CollectionSnapshot::empty("users")));
        let view = inputs.view().unwrap();
        assert!(view.statistics.is_empty());
    }
}
