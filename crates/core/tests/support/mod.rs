//! Shared test helpers for `assetdesk-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! dashboard and inventory tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

pub mod inventory;
pub mod snapshots;

use assetdesk_domain::{CollectionNames, InventoryItem};
use serde_json::{json, Value};

/// Collection names used by every dashboard test.
pub fn collections() -> CollectionNames {
    CollectionNames {
        repair_requests: "requests".into(),
        topics: "topics".into(),
        users: "users".into(),
    }
}

/// Repair request record with Thai keys, as stored by the reporting flow.
pub fn repair_record(topic: &str, room: &str, status: &str) -> Value {
    json!({
        "รหัสหัวเรื่อง": topic,
        "ห้อง": room,
        "สถานะการซ่อม": status,
    })
}

/// Resolved request with both timestamps.
pub fn resolved_record(topic: &str, reported_at: &str, resolved_at: &str) -> Value {
    json!({
        "รหัสหัวเรื่อง": topic,
        "สถานะการซ่อม": "resolved",
        "วันที่เวลาแจ้ง": reported_at,
        "resolvedAt": resolved_at,
    })
}

pub fn topic_record(code: &str, name: &str) -> Value {
    json!({"รหัสหัวเรื่อง": code, "ชื่อหัวเรื่อง": name})
}

pub fn user_record(email: &str, name: &str, position: &str) -> Value {
    json!({"อีเมล": email, "ชื่อ": name, "ตำแหน่ง": position})
}

pub fn inventory_item(id: &str, name: &str, date_add: &str) -> InventoryItem {
    InventoryItem {
        equipment_id: id.to_string(),
        equipment_name: name.to_string(),
        date_add: Some(date_add.to_string()),
        ..InventoryItem::default()
    }
}
