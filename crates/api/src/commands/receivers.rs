//! Staff workload commands

use assetdesk_core::statistics::{receiver_profile, staff_overview};
use assetdesk_domain::{ReceiverProfileStats, Result, StaffMember};
use serde::Serialize;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Workload of one staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiverSummary {
    pub email: String,
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub stats: ReceiverProfileStats,
}

/// Every staff member holding one of the configured positions, in directory
/// order.
pub async fn list_receivers(ctx: &AppContext) -> Result<Vec<ReceiverSummary>> {
    execute_command("receivers::list_receivers", || async {
        let view = ctx.dashboard.load().await?;
        let overview = staff_overview(&view.requests, &view.users, &ctx.config.staff_positions);
        Ok(overview
            .into_iter()
            .filter_map(|entry| {
                let StaffMember {
                    email,
                    full_name,
                    position,
                    ..
                } = entry.member;
                Some(ReceiverSummary {
                    email: email?,
                    full_name,
                    position,
                    stats: entry.stats,
                })
            })
            .collect())
    })
    .await
}

/// Workload of the receiver with `email`, whether or not they are staff.
pub async fn get_receiver(ctx: &AppContext, email: &str) -> Result<ReceiverSummary> {
    execute_command("receivers::get_receiver", || async {
        let view = ctx.dashboard.load().await?;
        let member = view.users.get(email);
        Ok(ReceiverSummary {
            email: email.to_string(),
            full_name: member.and_then(|m| m.full_name.clone()),
            position: member.and_then(|m| m.position.clone()),
            stats: receiver_profile(&view.requests, email),
        })
    })
    .await
}
