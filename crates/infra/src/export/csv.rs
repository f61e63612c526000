//! CSV writer for export tables
//!
//! Files start with a UTF-8 byte order mark so spreadsheet applications pick
//! the right encoding for Thai text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use assetdesk_core::ExportTable;
use assetdesk_domain::{AssetDeskError, Result};
use tracing::info;

use crate::errors::InfraError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes [`ExportTable`]s as CSV files into one output directory
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `table` to `<output_dir>/<file_name>`, replacing any existing
    /// file, and return the full path.
    pub fn export(&self, table: &ExportTable, file_name: &str) -> Result<PathBuf> {
        if file_name.contains(['/', '\\']) {
            let message = format!("export file name must not contain a path: {file_name}");
            return Err(AssetDeskError::InvalidInput(message));
        }

        std::fs::create_dir_all(&self.output_dir).map_err(into_domain)?;
        let path = self.output_dir.join(file_name);
        let file = File::create(&path).map_err(into_domain)?;
        write_table(BufWriter::new(file), table)?;

        info!(path = %path.display(), rows = table.rows.len(), "exported table");
        Ok(path)
    }
}

/// Serialize `table` as BOM-prefixed CSV into any writer.
pub fn write_table<W: Write>(mut writer: W, table: &ExportTable) -> Result<()> {
    writer.write_all(UTF8_BOM).map_err(into_domain)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(false)
        .from_writer(writer);
    csv_writer.write_record(&table.headers).map_err(into_domain)?;
    for row in &table.rows {
        csv_writer.write_record(row).map_err(into_domain)?;
    }
    csv_writer.flush().map_err(into_domain)?;
    Ok(())
}

fn into_domain<E>(err: E) -> AssetDeskError
where
    InfraError: From<E>,
{
    InfraError::from(err).into()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn table() -> ExportTable {
        ExportTable {
            headers: vec!["No".into(), "Topic".into()],
            rows: vec![
                vec!["1".into(), "ระบบเครือข่าย".into()],
                vec!["2".into(), "Printer, laser".into()],
            ],
        }
    }

    #[test]
    fn writes_bom_header_and_quoted_rows() {
        let mut buffer = Vec::new();
        write_table(&mut buffer, &table()).unwrap();

        assert!(buffer.starts_with(UTF8_BOM));
        let body = buffer[UTF8_BOM.len()..].to_vec();
        let text = String::from_utf8(body).unwrap();
        assert_eq!(text, "No,Topic\n1,ระบบเครือข่าย\n2,\"Printer, laser\"\n");
    }

    #[test]
    fn export_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path().join("exports"));

        let name = "repair_stats_topic_Network.csv";
        let path = exporter.export(&table(), name).unwrap();

        assert_eq!(path, dir.path().join("exports").join(name));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }

    #[test]
    fn header_only_table_is_still_written() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path());
        let empty = ExportTable {
            headers: vec!["#".into()],
            rows: Vec::new(),
        };

        let path = exporter.export(&empty, "equipment.csv").unwrap();

        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[UTF8_BOM.len()..], b"#\n");
    }

    #[test]
    fn rejects_paths_in_file_name() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path());

        let result = exporter.export(&table(), "../escape.csv");
        assert!(matches!(result, Err(AssetDeskError::InvalidInput(_))));
    }
}
