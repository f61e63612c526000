//! Equipment and supplies commands

use std::path::PathBuf;

use assetdesk_core::export::{inventory_export_table, timestamped_file_name};
use assetdesk_core::inventory::select_by_ids;
use assetdesk_core::{BatchDeleteOutcome, InventoryQuery, Page};
use assetdesk_domain::{AssetDeskError, InventoryItem, InventoryKind, Result};
use chrono::Local;
use tracing::info;

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn browse_inventory(
    ctx: &AppContext,
    kind: InventoryKind,
    query: &InventoryQuery,
) -> Result<Page<InventoryItem>> {
    execute_command("inventory::browse_inventory", || {
        ctx.inventory.browse(kind, query)
    })
    .await
}

pub async fn inventory_years(ctx: &AppContext, kind: InventoryKind) -> Result<Vec<i32>> {
    execute_command("inventory::inventory_years", || ctx.inventory.years(kind))
        .await
}

pub async fn delete_inventory(
    ctx: &AppContext,
    equipment_ids: &[String],
) -> Result<BatchDeleteOutcome> {
    execute_command("inventory::delete_inventory", || {
        ctx.inventory.delete_selected(equipment_ids)
    })
    .await
}

/// Export the selected records, or every record matching `query` when
/// nothing is selected. Fails with `NotFound` when that leaves no rows.
///
/// The file is named `<kind>-<YYYYMMDD-HHMMSS>.csv` in local time.
pub async fn export_inventory(
    ctx: &AppContext,
    kind: InventoryKind,
    query: &InventoryQuery,
    equipment_ids: &[String],
) -> Result<PathBuf> {
    execute_command("inventory::export_inventory", || async {
        let items = ctx.inventory.list(kind).await?;
        let table = if equipment_ids.is_empty() {
            let matching = query.select(kind, &items);
            inventory_export_table(kind, &matching.iter().collect::<Vec<_>>())
        } else {
            inventory_export_table(kind, &select_by_ids(&items, equipment_ids))
        };
        if table.is_empty() {
            let message = format!("no {kind} records to export");
            return Err(AssetDeskError::NotFound(message));
        }

        let now = Local::now().naive_local();
        let file_name = timestamped_file_name(&kind.to_string(), now);
        let path = ctx.exporter.export(&table, &file_name)?;
        info!(kind = %kind, rows = table.rows.len(), "inventory exported");
        Ok(path)
    })
    .await
}

/// Ask the backend to rewrite the shared spreadsheet; returns its message.
pub async fn sync_sheet(ctx: &AppContext) -> Result<String> {
    execute_command("inventory::sync_sheet", || ctx.inventory.sync_sheet())
        .await
}
