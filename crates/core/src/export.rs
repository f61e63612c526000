//! Spreadsheet table models for the export side-channel
//!
//! Building the table is pure; writing it to disk is an infra concern.

use assetdesk_domain::{InventoryItem, InventoryKind, RepairRequest};
use chrono::NaiveDateTime;

use crate::directory::TopicDirectory;

const REPAIR_HEADERS: [&str; 7] = [
    "No",
    "Topic",
    "Equipment No",
    "Item",
    "Room",
    "Reported At",
    "Status",
];

const INVENTORY_HEADERS: [&str; 8] = [
    "#",
    "Equipment No",
    "Name",
    "Spec",
    "Type",
    "Price",
    "Date Added",
    "Location",
];

/// Header row plus data rows, all as display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Table for the requests behind one topic row.
///
/// Missing values are left blank; the topic column shows the resolved name
/// and the status column the stored wording.
pub fn repair_export_table(requests: &[&RepairRequest], topics: &TopicDirectory) -> ExportTable {
    let mut table = ExportTable::with_headers(&REPAIR_HEADERS);
    for (index, request) in requests.iter().enumerate() {
        let topic = request
            .topic_code
            .as_deref()
            .map(|code| topics.resolve(code).to_string());
        table.rows.push(vec![
            (index + 1).to_string(),
            topic.unwrap_or_default(),
            request.equipment_id.clone().unwrap_or_default(),
            request.item_description.clone().unwrap_or_default(),
            request.room.clone().unwrap_or_default(),
            request.reported_at.clone().unwrap_or_default(),
            request.status_display().unwrap_or_default().to_string(),
        ]);
    }
    table
}

/// Table matching the printed equipment or supplies list.
///
/// Supplies get an extra quantity column.
pub fn inventory_export_table(kind: InventoryKind, items: &[&InventoryItem]) -> ExportTable {
    let mut table = ExportTable::with_headers(&INVENTORY_HEADERS);
    if kind == InventoryKind::Supplies {
        table.headers.push("Quantity".to_string());
    }

    for (index, item) in items.iter().enumerate() {
        let mut row = vec![
            (index + 1).to_string(),
            item.equipment_id.clone(),
            item.equipment_name.clone(),
            item.spec.clone().unwrap_or_default(),
            item.equipment_type.clone().unwrap_or_default(),
            item.display_price(),
            item.display_date(),
            item.location.clone().unwrap_or_default(),
        ];
        if kind == InventoryKind::Supplies {
            let quantity = item.quantity.map(|q| q.to_string());
            row.push(quantity.unwrap_or_default());
        }
        table.rows.push(row);
    }
    table
}

/// `repair_stats_topic_<topic name>.csv`
pub fn repair_export_file_name(topic_name: &str) -> String {
    format!("repair_stats_topic_{}.csv", sanitize(topic_name))
}

/// `<prefix>-<YYYYMMDD-HHMMSS>.csv`
pub fn timestamped_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}-{}.csv", sanitize(prefix), at.format("%Y%m%d-%H%M%S"))
}

fn sanitize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
