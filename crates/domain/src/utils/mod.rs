//! Decoding and timestamp helpers shared by the domain types.

pub mod lenient;
pub mod timestamp;

pub use timestamp::{buddhist_year, format_buddhist_date, hours_between, parse_timestamp};
