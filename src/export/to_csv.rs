use anyhow::Result;
use csv::Writer;

use crate::output::OutputTable;

pub fn render(table: &OutputTable) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|cell| cell.render()))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finalizing csv output: {e}"))?;
    let csv_string = String::from_utf8(data)?;

    Ok(csv_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Cell;

    #[test]
    fn renders_header_and_rows() {
        let table = OutputTable {
            name: "Teacher_Codes".to_string(),
            columns: vec!["School Name".to_string(), "Teacher Code".to_string()],
            rows: vec![
                vec![Cell::Text("First School".to_string()), Cell::Text("001".to_string())],
                vec![Cell::Text("Second School".to_string()), Cell::Empty],
            ],
        };
        let rendered = render(&table).unwrap();
        assert_eq!(
            rendered,
            "School Name,Teacher Code\nFirst School,001\nSecond School,\n"
        );
    }
}
