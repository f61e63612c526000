//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Label substituted for a missing topic, room, receiver or item.
pub const UNSPECIFIED: &str = "unspecified";

// Document store collections
pub const REPAIR_REQUESTS_COLLECTION: &str = "คำขอแจ้งซ่อม";
pub const TOPICS_COLLECTION: &str = "หัวเรื่อง";
pub const USERS_COLLECTION: &str = "ผู้ใช้งาน";

/// Positions whose holders receive repair requests.
pub const DEFAULT_STAFF_POSITIONS: [&str; 3] = [
    "นักวิชาการคอมพิวเตอร์",
    "นักวิชาการโสตทัศนศึกษา",
    "ช่างเทคนิค",
];

// Inventory listing
pub const ITEMS_PER_PAGE: usize = 10;
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

// REST backend
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SNAPSHOT_POLL_MS: u64 = 2_000;
