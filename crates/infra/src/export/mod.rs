//! Spreadsheet export writers

pub mod csv;

pub use self::csv::{write_table, CsvExporter};
