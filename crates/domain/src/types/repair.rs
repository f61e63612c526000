//! Repair request records
//!
//! Repair requests are created by the citizen-facing reporting flow and are
//! read-only here. The document store keys them with Thai field names; other
//! writers use English camelCase. Both are accepted on input, and output is
//! always camelCase.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::UNSPECIFIED;
use crate::utils::lenient::optional_text;

/// Lifecycle state of a repair request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepairStatus {
    Reported,
    InProgress,
    Resolved,
    /// Any status text this system does not recognise, kept verbatim.
    Other(String),
}

impl RepairStatus {
    /// Parse stored status text. Never fails; unknown text becomes `Other`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "reported" | "pending" | "แจ้งซ่อม" | "รอดำเนินการ" => Self::Reported,
            "in_progress" | "inprogress" | "กำลังดำเนินการ" | "กำลังซ่อม" => Self::InProgress,
            "resolved" | "done" | "ซ่อมเสร็จ" | "ซ่อมเสร็จแล้ว" | "เสร็จสิ้น" => Self::Resolved,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Label used as the status-count key.
    pub fn label(&self) -> &str {
        match self {
            Self::Reported => "reported",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RepairStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RepairStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A single repair request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRepairRequest")]
pub struct RepairRequest {
    pub topic_code: Option<String>,
    pub room: Option<String>,
    pub detail_text: Option<String>,
    pub reported_at: Option<String>,
    pub status: Option<RepairStatus>,
    /// Status exactly as stored, for exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    pub resolved_at: Option<String>,
    pub equipment_id: Option<String>,
    pub item_description: Option<String>,
    pub receiver_email: Option<String>,
}

impl RepairRequest {
    /// Topic code, or the sentinel when absent.
    pub fn topic_or_unspecified(&self) -> &str {
        self.topic_code.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Room, or the sentinel when absent.
    pub fn room_or_unspecified(&self) -> &str {
        self.room.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn receiver_or_unspecified(&self) -> &str {
        self.receiver_email.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn item_or_unspecified(&self) -> &str {
        self.item_description.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn status_label(&self) -> &str {
        self.status
            .as_ref()
            .map_or(UNSPECIFIED, RepairStatus::label)
    }

    pub fn is_resolved(&self) -> bool {
        self.status.as_ref().is_some_and(RepairStatus::is_resolved)
    }

    /// Stored status wording, falling back to the normalised label.
    pub fn status_display(&self) -> Option<&str> {
        self.status_text
            .as_deref()
            .or_else(|| self.status.as_ref().map(RepairStatus::label))
    }
}

/// Wire shape accepting both key vocabularies.
///
/// Each vocabulary gets its own field so that a record carrying both never
/// trips serde's duplicate-field check; Thai keys win when both are present.
#[derive(Deserialize)]
struct RawRepairRequest {
    #[serde(rename = "รหัสหัวเรื่อง", default, deserialize_with = "optional_text")]
    topic_th: Option<String>,
    #[serde(rename = "topicCode", default, deserialize_with = "optional_text")]
    topic_en: Option<String>,

    #[serde(rename = "ห้อง", default, deserialize_with = "optional_text")]
    room_th: Option<String>,
    #[serde(rename = "room", default, deserialize_with = "optional_text")]
    room_en: Option<String>,

    #[serde(rename = "รายละเอียดคำขอแจ้งซ่อม", default, deserialize_with = "optional_text")]
    detail_th: Option<String>,
    #[serde(rename = "detailText", default, deserialize_with = "optional_text")]
    detail_en: Option<String>,

    #[serde(rename = "วันที่เวลาแจ้ง", default, deserialize_with = "optional_text")]
    reported_th: Option<String>,
    #[serde(rename = "reportedAt", default, deserialize_with = "optional_text")]
    reported_en: Option<String>,

    #[serde(rename = "สถานะการซ่อม", default, deserialize_with = "optional_text")]
    status_th: Option<String>,
    #[serde(rename = "status", default, deserialize_with = "optional_text")]
    status_en: Option<String>,

    #[serde(rename = "วันที่เวลาซ่อมเสร็จ", default, deserialize_with = "optional_text")]
    resolved_th: Option<String>,
    #[serde(rename = "resolvedAt", default, deserialize_with = "optional_text")]
    resolved_en: Option<String>,

    #[serde(rename = "หมายเลขครุภัณฑ์", default, deserialize_with = "optional_text")]
    equipment_th: Option<String>,
    #[serde(rename = "equipmentId", default, deserialize_with = "optional_text")]
    equipment_en: Option<String>,

    #[serde(rename = "รายการ", default, deserialize_with = "optional_text")]
    item_th: Option<String>,
    #[serde(rename = "itemDescription", default, deserialize_with = "optional_text")]
    item_en: Option<String>,

    #[serde(rename = "อีเมลผู้รับเรื่อง", default, deserialize_with = "optional_text")]
    receiver_th: Option<String>,
    #[serde(rename = "receiverEmail", default, deserialize_with = "optional_text")]
    receiver_en: Option<String>,
}

impl From<RawRepairRequest> for RepairRequest {
    fn from(raw: RawRepairRequest) -> Self {
        let status_text = raw.status_th.or(raw.status_en);
        Self {
            topic_code: raw.topic_th.or(raw.topic_en),
            room: raw.room_th.or(raw.room_en),
            detail_text: raw.detail_th.or(raw.detail_en),
            reported_at: raw.reported_th.or(raw.reported_en),
            status: status_text.as_deref().map(RepairStatus::parse),
            status_text,
            resolved_at: raw.resolved_th.or(raw.resolved_en),
            equipment_id: raw.equipment_th.or(raw.equipment_en),
            item_description: raw.item_th.or(raw.item_en),
            receiver_email: raw.receiver_th.or(raw.receiver_en),
        }
    }
}
