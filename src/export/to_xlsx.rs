use anyhow::Result;
use rust_xlsxwriter::Workbook;

use crate::output::{Cell, OutputTable};

/// Single-sheet workbook named after the table, header row first.
pub fn render(table: &OutputTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.name)?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(row_num, col as u16, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row_num, col as u16, *n)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    #[test]
    fn workbook_round_trips_through_calamine() {
        let table = OutputTable {
            name: "Student_Ids".to_string(),
            columns: vec!["Custom_ID".to_string(), "Grade".to_string()],
            rows: vec![
                vec![Cell::Text("0350007".to_string()), Cell::Number(5.0)],
                vec![Cell::Empty, Cell::Number(5.0)],
            ],
        };

        let bytes = render(&table).unwrap();
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Student_Ids".to_string()]);

        let range = workbook.worksheet_range("Student_Ids").unwrap();
        assert_eq!(
            range.get((0, 0)),
            Some(&Data::String("Custom_ID".to_string()))
        );
        assert_eq!(
            range.get((1, 0)),
            Some(&Data::String("0350007".to_string()))
        );
        assert_eq!(range.get((1, 1)), Some(&Data::Float(5.0)));
    }
}
