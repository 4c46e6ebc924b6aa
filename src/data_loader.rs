use std::path::Path;

use anyhow::Result;
use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

use crate::error::RosterError;

/// A loaded worksheet: one header row plus string-decoded data rows. Every
/// row is padded to the header width so downstream indexing is uniform.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Column names are exact and case-sensitive.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), RosterError> {
        for &name in required {
            if self.column_index(name).is_none() {
                return Err(RosterError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Dispatches on the file extension, as the CLI accepts xlsx alongside
/// delimited text exports.
pub fn load_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");

    let table = match extension {
        "xlsx" => load_xlsx(path),
        "csv" => load_delimited(path, b','),
        "tsv" => load_delimited(path, b'\t'),
        _ => anyhow::bail!("Unsupported input extension: {:?}", extension),
    }?;

    debug!(
        "Loaded table with {} columns and {} rows",
        table.columns.len(),
        table.rows.len()
    );
    Ok(table)
}

/// Reads the first worksheet of an xlsx workbook. Numeric cells are decoded
/// to strings, with integral floats rendered without a fractional part.
pub fn load_xlsx(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| RosterError::InvalidData("workbook has no worksheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    if range.height() == 0 {
        return Err(RosterError::InvalidData("input table has no header row".to_string()).into());
    }

    let width = range.width();
    let decode = |row_idx: usize| -> Vec<String> {
        (0..width)
            .map(|col_idx| match range.get((row_idx, col_idx)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                Some(Data::Bool(b)) => b.to_string(),
                Some(Data::Empty) | None => String::new(),
                _ => String::new(),
            })
            .collect()
    };

    let columns = decode(0);
    let rows = (1..range.height()).map(decode).collect();

    Ok(Table { columns, rows })
}

pub fn load_delimited(path: &Path, separator: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let width = columns.len();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Table { columns, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_csv_with_headers() {
        let file = write_temp_csv("District,Block,School\nD1,B1,S1\nD2,B2,S2\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.columns, vec!["District", "Block", "School"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["D2", "B2", "S2"]);
    }

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let file = write_temp_csv("a,b,c\n1,2\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_table(Path::new("roster.parquet")).is_err());
    }

    #[test]
    fn require_columns_reports_the_missing_name() {
        let table = Table {
            columns: vec!["District".to_string(), "Block".to_string()],
            rows: vec![],
        };
        let err = table.require_columns(&["District", "School"]).unwrap_err();
        assert!(matches!(err, RosterError::MissingColumn(name) if name == "School"));
    }

    #[test]
    fn column_lookup_is_case_sensitive() {
        let table = Table {
            columns: vec!["District".to_string()],
            rows: vec![],
        };
        assert!(table.column_index("district").is_none());
        assert_eq!(table.column_index("District"), Some(0));
    }
}
