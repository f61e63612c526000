//! AssetDesk - repair statistics and inventory console
//!
//! Command line entry point over the application commands.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use assetdesk_core::InventoryQuery;
use assetdesk_domain::{AssetDeskError, InventoryKind, SortDirection, SortField};
use assetdesk_lib::utils::logging::init_tracing;
use assetdesk_lib::{
    browse_inventory, delete_inventory, export_inventory, export_topic, get_dashboard, get_receiver,
    get_topic_detail, inventory_years, list_receivers, sync_sheet, watch_dashboard, AppContext,
    DashboardSummary,
};
use clap::{Args, Parser, Subcommand};
use futures::StreamExt;
use serde::Serialize;
use tracing::warn;

const RETRY_HINT: &str = "check the connection or the session token and try again";

#[derive(Parser, Debug)]
#[command(name = "assetdesk")]
#[command(about = "Repair statistics and inventory console", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true, env = "ASSETDESK_LOG_JSON")]
    log_json: bool,

    /// Directory CSV exports are written to
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the repair statistics dashboard
    Stats,

    /// List the requests filed under one topic code
    Topic {
        code: String,

        /// Also write them to repair_stats_topic_<name>.csv
        #[arg(long)]
        export: bool,
    },

    /// Show staff workload
    Receivers {
        /// Only this receiver, staff or not
        #[arg(long)]
        email: Option<String>,
    },

    /// Reprint the dashboard whenever the snapshot changes
    Watch,

    /// Equipment and supplies
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
}

#[derive(Subcommand, Debug)]
enum InventoryAction {
    /// Show one page of the list
    List(ListArgs),

    /// Years the year filter can offer
    Years {
        #[arg(long, default_value = "equipment")]
        kind: InventoryKind,
    },

    /// Delete records by equipment number
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Write the selected or filtered records to a CSV file
    Export {
        #[command(flatten)]
        list: ListArgs,

        /// Export only these equipment numbers
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },

    /// Rewrite the shared spreadsheet from the backend
    SyncSheet,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, default_value = "equipment")]
    kind: InventoryKind,

    /// Case-insensitive search term
    #[arg(long)]
    search: Option<String>,

    #[arg(long, default_value = "name")]
    sort: SortField,

    #[arg(long, default_value = "asc")]
    direction: SortDirection,

    /// Buddhist-era year the item was added
    #[arg(long)]
    year: Option<i32>,

    #[arg(long, default_value_t = 1)]
    page: usize,
}

impl ListArgs {
    fn query(&self) -> InventoryQuery {
        let mut query = InventoryQuery::new()
            .sorted_by(self.sort, self.direction)
            .on_page(self.page);
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(year) = self.year {
            query = query.in_year(year);
        }
        query
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let transient = err
                .downcast_ref::<AssetDeskError>()
                .is_some_and(AssetDeskError::is_transient);
            if transient {
                eprintln!("assetdesk: {err:#} ({RETRY_HINT})");
            } else {
                eprintln!("assetdesk: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new()
        .context("failed to initialise application")?
        .with_export_dir(&cli.out_dir);
    let json = cli.json;

    match cli.command {
        Commands::Stats => {
            let summary = get_dashboard(&ctx).await?;
            emit(json, &summary, print_dashboard)?;
        }
        Commands::Topic { code, export } => {
            let detail = get_topic_detail(&ctx, &code).await?;
            emit(json, &detail, |detail| {
                println!(
                    "{} ({}): {} request(s)",
                    detail.name,
                    detail.code,
                    detail.requests.len()
                );
                for request in &detail.requests {
                    println!(
                        "  {:<10} {:<24} {:<8} {}",
                        request.equipment_id.as_deref().unwrap_or("-"),
                        request.item_description.as_deref().unwrap_or("-"),
                        request.room.as_deref().unwrap_or("-"),
                        request.status_label(),
                    );
                }
            })?;
            if export {
                let path = export_topic(&ctx, &code).await?;
                eprintln!("exported {}", path.display());
            }
        }
        Commands::Receivers { email: Some(email) } => {
            let receiver = get_receiver(&ctx, &email).await?;
            emit(json, &receiver, |r| {
                let name = r.full_name.as_deref().unwrap_or("-");
                println!("{name} <{}>: {} handled", r.email, r.stats.total_handled);
            })?;
        }
        Commands::Receivers { email: None } => {
            let receivers = list_receivers(&ctx).await?;
            emit(json, &receivers, |receivers| {
                for r in receivers {
                    println!(
                        "{:<28} {:<20} {:>4}",
                        r.full_name.as_deref().unwrap_or(&r.email),
                        r.position.as_deref().unwrap_or("-"),
                        r.stats.total_handled
                    );
                }
            })?;
        }
        Commands::Watch => {
            let mut updates = watch_dashboard(&ctx);
            loop {
                tokio::select! {
                    update = updates.next() => match update {
                        Some(Ok(summary)) => emit(json, &summary, print_dashboard)?,
                        Some(Err(err)) => warn!(error = %err, "snapshot update failed"),
                        None => break,
                    },
                    _ = tokio::signal::ctrl_c() => break,
                }
            }
        }
        Commands::Inventory { action } => run_inventory(&ctx, action, json).await?,
    }

    Ok(())
}

async fn run_inventory(
    ctx: &AppContext,
    action: InventoryAction,
    json: bool,
) -> anyhow::Result<()> {
    match action {
        InventoryAction::List(args) => {
            let page = browse_inventory(ctx, args.kind, &args.query()).await?;
            emit(json, &page, |page| {
                if page.items.is_empty() {
                    println!("No matching items.");
                }
                for item in &page.items {
                    println!(
                        "{:<12} {:<32} {:>12} {:<12} {}",
                        item.equipment_id,
                        item.equipment_name,
                        item.display_price(),
                        item.display_date(),
                        item.location.as_deref().unwrap_or("-"),
                    );
                }
                println!(
                    "page {}/{} ({}-{} of {})",
                    page.page,
                    page.total_pages.max(1),
                    page.first_position(),
                    page.last_position(),
                    page.total_items
                );
                if page.has_next() {
                    println!("next: --page {}", page.page + 1);
                }
            })?;
        }
        InventoryAction::Years { kind } => {
            let years = inventory_years(ctx, kind).await?;
            emit(json, &years, |years| {
                for year in years {
                    println!("{year}");
                }
            })?;
        }
        InventoryAction::Delete { ids } => {
            let outcome = delete_inventory(ctx, &ids).await?;
            emit(json, &outcome, |outcome| {
                let (deleted, attempted) = (outcome.deleted.len(), outcome.attempted());
                println!("deleted {deleted} of {attempted}");
                for failed in &outcome.failed {
                    println!("  {}: {}", failed.equipment_id, failed.error);
                }
            })?;
            if !outcome.all_succeeded() {
                anyhow::bail!("{} delete(s) failed", outcome.failed.len());
            }
        }
        InventoryAction::Export { list, ids } => {
            let path = export_inventory(ctx, list.kind, &list.query(), &ids).await?;
            println!("{}", path.display());
        }
        InventoryAction::SyncSheet => {
            let message = sync_sheet(ctx).await?;
            println!("{message}");
        }
    }

    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human(value);
    }
    Ok(())
}

fn print_dashboard(summary: &DashboardSummary) {
    if summary.total_requests == 0 {
        println!("No repair requests yet.");
        return;
    }

    println!("Total requests:        {}", summary.total_requests);
    println!(
        "Average repair time:   {:.1} h over {} resolved",
        summary.average_repair_hours, summary.timed_resolutions
    );
    let room = summary.room_highlight();
    println!("Most repaired room:    {} ({})", room.label, room.count);
    let receiver = summary.receiver_highlight();
    let (label, count) = (receiver.label, receiver.count);
    println!("Most active receiver:  {label} ({count})");

    println!("\nTopics");
    for topic in &summary.topics {
        println!("  {:<32} {:>4}", topic.label, topic.count);
    }
    println!("\nRooms");
    for room in &summary.rooms {
        let detail = room.last_detail.as_deref().unwrap_or("");
        println!("  {:<16} {:>4}  {detail}", room.room, room.total);
    }
    println!("\nStatuses");
    for status in &summary.statuses {
        println!("  {:<16} {:>4}", status.label, status.count);
    }
}
