//! Repair statistics dashboard commands

use std::path::PathBuf;

use assetdesk_core::export::{repair_export_file_name, repair_export_table};
use assetdesk_core::statistics::{
    sorted_receivers, sorted_rooms, sorted_statuses, topic_chart_series,
};
use assetdesk_core::DashboardView;
use assetdesk_domain::{AssetDeskError, CountEntry, RepairRequest, Result};
use futures::stream::{BoxStream, StreamExt};
use serde::Serialize;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// One row of the room table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub room: String,
    pub total: usize,
    pub last_detail: Option<String>,
}

/// Everything the dashboard page shows, already sorted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_requests: usize,
    pub average_repair_hours: f64,
    pub timed_resolutions: usize,
    pub most_repaired_room: Option<CountEntry>,
    pub most_active_receiver: Option<CountEntry>,
    pub topics: Vec<CountEntry>,
    pub rooms: Vec<RoomSummary>,
    pub statuses: Vec<CountEntry>,
    pub receivers: Vec<CountEntry>,
    /// `(topic name, count)` pairs for the bar chart
    pub topic_chart: Vec<(String, usize)>,
}

impl From<&DashboardView> for DashboardSummary {
    fn from(view: &DashboardView) -> Self {
        let stats = &view.statistics;
        let rooms = sorted_rooms(stats)
            .into_iter()
            .map(|entry| {
                let room = stats.rooms.get(&entry.key);
                RoomSummary {
                    last_detail: room.and_then(|room| room.last_detail.clone()),
                    total: entry.count,
                    room: entry.key,
                }
            })
            .collect();

        Self {
            total_requests: stats.total_requests,
            average_repair_hours: stats.average_repair_hours,
            timed_resolutions: stats.timed_resolutions,
            most_repaired_room: view.most_repaired_room(),
            most_active_receiver: view.most_active_receiver(),
            topics: view.sorted_topics(),
            rooms,
            statuses: sorted_statuses(stats),
            receivers: sorted_receivers(stats),
            topic_chart: topic_chart_series(stats, &view.topics),
        }
    }
}

impl DashboardSummary {
    /// Most repaired room, or `unspecified` with count 0.
    pub fn room_highlight(&self) -> CountEntry {
        self.most_repaired_room
            .clone()
            .unwrap_or_else(CountEntry::unspecified)
    }

    /// Most active receiver, or `unspecified` with count 0.
    pub fn receiver_highlight(&self) -> CountEntry {
        self.most_active_receiver
            .clone()
            .unwrap_or_else(CountEntry::unspecified)
    }
}

/// Requests behind one topic row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicDetailSummary {
    pub code: String,
    pub name: String,
    pub requests: Vec<RepairRequest>,
}

pub async fn get_dashboard(ctx: &AppContext) -> Result<DashboardSummary> {
    execute_command("dashboard::get_dashboard", || async {
        let view = ctx.dashboard.load().await?;
        Ok(DashboardSummary::from(&view))
    })
    .await
}

pub async fn get_topic_detail(ctx: &AppContext, code: &str) -> Result<TopicDetailSummary> {
    execute_command("dashboard::get_topic_detail", || async {
        let view = ctx.dashboard.load().await?;
        let detail = view.topic_detail(code);
        Ok(TopicDetailSummary {
            code: detail.code,
            name: detail.name,
            requests: detail.requests.into_iter().cloned().collect(),
        })
    })
    .await
}

/// Write the requests of one topic to `repair_stats_topic_<name>.csv`.
pub async fn export_topic(ctx: &AppContext, code: &str) -> Result<PathBuf> {
    execute_command("dashboard::export_topic", || async {
        let view = ctx.dashboard.load().await?;
        let detail = view.topic_detail(code);
        let table = repair_export_table(&detail.requests, &view.topics);
        if table.is_empty() {
            let message = format!("no requests to export for topic {code}");
            return Err(AssetDeskError::NotFound(message));
        }
        let file_name = repair_export_file_name(&detail.name);
        let path = ctx.exporter.export(&table, &file_name)?;
        info!(topic = code, rows = table.rows.len(), "topic exported");
        Ok(path)
    })
    .await
}

/// Summaries recomputed on every snapshot change.
///
/// Source errors are passed through; the stream keeps running after them.
pub fn watch_dashboard(ctx: &AppContext) -> BoxStream<'static, Result<DashboardSummary>> {
    info!(
        command = "dashboard::watch_dashboard",
        "subscribing to dashboard updates"
    );
    ctx.dashboard
        .watch()
        .map(|update| update.map(|view| DashboardSummary::from(&view)))
        .boxed()
}
