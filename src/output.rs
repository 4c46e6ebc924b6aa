use rand::Rng;

use crate::generator::GeneratedRoster;
use crate::roster::FieldValue;

/// A single output cell. Empty cells stay empty in every export format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(value: impl Into<String>) -> Cell {
        Cell::Text(value.into())
    }

    /// Rendering used by the delimited exporters; integral floats drop the
    /// fractional part, matching custom-ID composition.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => FieldValue::Float(*n).render(),
            Cell::Empty => String::new(),
        }
    }
}

/// One derived output table: a sheet name, a header, and data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

pub const GENDERS: [&str; 2] = ["Male", "Female"];

/// The full expanded table: every input column (School_ID replaced by its
/// code) plus all derived and composite columns, ordered by original school
/// order then ascending sequence number.
pub fn expanded_roster(generated: &GeneratedRoster) -> OutputTable {
    let columns = [
        "District",
        "Block",
        "School_ID",
        "School",
        "Total_Students",
        "Partner_ID",
        "Grade",
        "District_ID",
        "Block_ID",
        "Total_Students_With_Buffer",
        "Student_ID",
        "student_no",
        "Custom_ID",
    ];

    let rows = generated
        .students
        .iter()
        .map(|student| {
            let school = &student.school;
            vec![
                Cell::text(&school.district),
                Cell::text(&school.block),
                Cell::text(&school.school_id),
                Cell::text(&school.school),
                school
                    .total_students
                    .map_or(Cell::Empty, Cell::Number),
                Cell::text(&school.partner_id),
                Cell::Number(f64::from(school.grade)),
                Cell::text(&school.district_id),
                Cell::text(&school.block_id),
                school
                    .buffered
                    .map_or(Cell::Empty, |b| Cell::Number(b as f64)),
                Cell::text(&student.student_id),
                Cell::text(&student.student_no),
                Cell::text(&student.custom_id),
            ]
        })
        .collect();

    OutputTable {
        name: "Student_Ids".to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

/// The renamed six-column projection plus a synthetic Gender drawn uniformly
/// per row. The random source is injected so tests can pin a seed; the CLI
/// passes an unseeded thread RNG.
pub fn mapped_roster<R: Rng>(generated: &GeneratedRoster, rng: &mut R) -> OutputTable {
    let columns = [
        "Roll_Number",
        "Grade",
        "School Name",
        "School Code",
        "District Name",
        "Block Name",
        "Gender",
    ];

    let rows = generated
        .students
        .iter()
        .map(|student| {
            let school = &student.school;
            let gender = GENDERS[rng.gen_range(0..GENDERS.len())];
            vec![
                Cell::text(&student.custom_id),
                Cell::Number(f64::from(school.grade)),
                Cell::text(&school.school),
                Cell::text(&school.school_id),
                Cell::text(&school.district),
                Cell::text(&school.block),
                Cell::text(gender),
            ]
        })
        .collect();

    OutputTable {
        name: "Student_Ids_Mapped".to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

/// School name to school code, one row per original pre-expansion school
/// row. Schools that generated no student slots still appear here.
pub fn teacher_codes(generated: &GeneratedRoster) -> OutputTable {
    let rows = generated
        .schools
        .iter()
        .map(|school| {
            vec![
                Cell::text(&school.school),
                Cell::text(&school.school_id),
            ]
        })
        .collect();

    OutputTable {
        name: "Teacher_Codes".to_string(),
        columns: vec!["School Name".to_string(), "Teacher Code".to_string()],
        rows,
    }
}
