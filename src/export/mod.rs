pub mod to_csv;
pub mod to_json;
pub mod to_xlsx;

use anyhow::Result;

use crate::output::OutputTable;
use crate::plan::ExportFileType;

/// Renders a table to bytes for one export profile. Rendering never touches
/// the filesystem; callers write the buffers once every profile succeeded.
pub fn render(table: &OutputTable, exporter: &ExportFileType) -> Result<Vec<u8>> {
    match exporter {
        ExportFileType::Xlsx => to_xlsx::render(table),
        ExportFileType::Csv => Ok(to_csv::render(table)?.into_bytes()),
        ExportFileType::Json => Ok(to_json::render(table)?.into_bytes()),
    }
}
