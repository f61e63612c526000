//! Inventory records served by the REST backend
//!
//! Equipment (durable, individually numbered assets) and supplies
//! (consumables with a quantity) share one record shape and one delete
//! endpoint; only the list endpoint differs.

use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;
use crate::utils::lenient::{optional_integer, optional_number, optional_text, text_or_empty};
use crate::utils::timestamp;

/// Which inventory list a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryKind {
    Equipment,
    Supplies,
}

impl_label_conversions!(InventoryKind {
    Equipment => "equipment" | "equipments",
    Supplies => "supplies" | "supply",
});

impl InventoryKind {
    /// REST path listing every record of this kind.
    pub fn list_path(self) -> &'static str {
        match self {
            Self::Equipment => "/api/equipment/GETequipments",
            Self::Supplies => "/api/equipment/GETsupplies",
        }
    }

    /// Fields the free-text search looks at.
    ///
    /// Supplies are searched by name only.
    pub fn searches_all_fields(self) -> bool {
        matches!(self, Self::Equipment)
    }
}

/// Field an inventory listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Price,
    DateAdded,
    Type,
    Location,
    Id,
}

impl_label_conversions!(SortField {
    Name => "name" | "equipment_name",
    Price => "price",
    DateAdded => "date_added" | "date" | "date_add",
    Type => "type" | "equipment_type",
    Location => "location" | "room",
    Id => "id" | "equipment_id",
});

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl_label_conversions!(SortDirection {
    Asc => "asc" | "ascending",
    Desc => "desc" | "descending",
});

/// One equipment or supplies record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub equipment_id: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub equipment_name: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub spec: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub equipment_type: Option<String>,
    #[serde(default, deserialize_with = "optional_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "optional_text")]
    pub date_add: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "optional_integer")]
    pub quantity: Option<i64>,
}

impl InventoryItem {
    /// Buddhist-era year the item was received, if the date parses.
    pub fn buddhist_year(&self) -> Option<i32> {
        self.date_add.as_deref().and_then(timestamp::buddhist_year)
    }

    /// Received date as `dd/mm/yyyy` (Buddhist era), or the raw text.
    pub fn display_date(&self) -> String {
        self.date_add
            .as_deref()
            .map(|raw| {
                timestamp::format_buddhist_date(raw)
                    .unwrap_or_else(|| raw.to_string())
            })
            .unwrap_or_default()
    }

    /// Price with thousands separators and up to two decimals.
    pub fn display_price(&self) -> String {
        self.price.map(format_grouped).unwrap_or_default()
    }
}

fn format_grouped(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else if fraction % 10 == 0 {
        format!("{sign}{grouped}.{}", fraction / 10)
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}
