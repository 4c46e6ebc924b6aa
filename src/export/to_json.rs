use anyhow::Result;
use serde_json::{json, Map, Value};

use crate::output::{Cell, OutputTable};

/// Pretty-printed array of records, one object per row keyed by column name.
pub fn render(table: &OutputTable) -> Result<String> {
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for (column, cell) in table.columns.iter().zip(row) {
                record.insert(column.clone(), cell_value(cell));
            }
            Value::Object(record)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&json!(records))?)
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Text(s) => json!(s),
        Cell::Number(n) if n.fract() == 0.0 => json!(*n as i64),
        Cell::Number(n) => json!(n),
        Cell::Empty => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_become_records_keyed_by_column() {
        let table = OutputTable {
            name: "t".to_string(),
            columns: vec!["Grade".to_string(), "Custom_ID".to_string()],
            rows: vec![vec![Cell::Number(5.0), Cell::Text("0350007".to_string())]],
        };
        let rendered = render(&table).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["Grade"], json!(5));
        assert_eq!(parsed[0]["Custom_ID"], json!("0350007"));
    }

    #[test]
    fn empty_cells_are_null() {
        let table = OutputTable {
            name: "t".to_string(),
            columns: vec!["Total_Students".to_string()],
            rows: vec![vec![Cell::Empty]],
        };
        let parsed: Value = serde_json::from_str(&render(&table).unwrap()).unwrap();
        assert!(parsed[0]["Total_Students"].is_null());
    }
}
