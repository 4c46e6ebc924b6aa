use crate::codes::NA;
use crate::data_loader::Table;
use crate::error::RosterError;
use crate::params::field;

/// Required input columns, exact and case-sensitive.
pub mod column {
    pub const DISTRICT: &str = "District";
    pub const BLOCK: &str = "Block";
    pub const SCHOOL: &str = "School";
    pub const SCHOOL_ID: &str = "School_ID";
    pub const TOTAL_STUDENTS: &str = "Total_Students";

    pub const REQUIRED: [&str; 5] = [DISTRICT, BLOCK, SCHOOL, SCHOOL_ID, TOTAL_STUDENTS];
}

/// One input row: a single school as exported by the upstream roster system.
/// Read once from the input table and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolRecord {
    pub district: String,
    pub block: String,
    pub school: String,
    /// Raw value before occurrence-based coding; may be a pre-coded number,
    /// a name, or the NA sentinel.
    pub school_id: String,
    pub total_students: Option<f64>,
}

impl SchoolRecord {
    pub fn from_table(table: &Table) -> Result<Vec<SchoolRecord>, RosterError> {
        table.require_columns(&column::REQUIRED)?;

        let district = table.column_index(column::DISTRICT).unwrap_or_default();
        let block = table.column_index(column::BLOCK).unwrap_or_default();
        let school = table.column_index(column::SCHOOL).unwrap_or_default();
        let school_id = table.column_index(column::SCHOOL_ID).unwrap_or_default();
        let total = table
            .column_index(column::TOTAL_STUDENTS)
            .unwrap_or_default();

        table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                Ok(SchoolRecord {
                    district: row[district].clone(),
                    block: row[block].clone(),
                    school: row[school].clone(),
                    school_id: row[school_id].clone(),
                    total_students: parse_enrollment(&row[total], idx)?,
                })
            })
            .collect()
    }
}

/// Empty cells and the NA sentinel mean the enrollment is unknown; anything
/// else must parse as a non-negative number.
fn parse_enrollment(raw: &str, row_idx: usize) -> Result<Option<f64>, RosterError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == NA {
        return Ok(None);
    }
    let value: f64 = raw.parse().map_err(|_| {
        RosterError::InvalidData(format!(
            "row {}: Total_Students {raw:?} is not a number",
            row_idx + 2
        ))
    })?;
    if value < 0.0 {
        return Err(RosterError::InvalidData(format!(
            "row {}: Total_Students {value} is negative",
            row_idx + 2
        )));
    }
    Ok(Some(value))
}

/// A school row after the identifier-assignment and buffering stages.
#[derive(Debug, Clone, PartialEq)]
pub struct CodedSchool {
    pub district: String,
    pub block: String,
    pub school: String,
    pub district_id: String,
    pub block_id: String,
    /// Occurrence-coded replacement for the raw School_ID column.
    pub school_id: String,
    pub partner_id: String,
    pub grade: u32,
    pub total_students: Option<f64>,
    pub buffered: Option<i64>,
}

impl CodedSchool {
    /// Resolves a composable field by name. Unknown names yield None and are
    /// skipped by the composer rather than treated as errors.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            field::PARTNER_ID => Some(FieldValue::Text(&self.partner_id)),
            field::DISTRICT_ID => Some(FieldValue::Text(&self.district_id)),
            field::BLOCK_ID => Some(FieldValue::Text(&self.block_id)),
            field::SCHOOL_ID => Some(FieldValue::Text(&self.school_id)),
            field::GRADE => Some(FieldValue::Int(i64::from(self.grade))),
            _ => None,
        }
    }
}

/// One generated student slot. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    pub school: CodedSchool,
    pub student_id: String,
    pub student_no: String,
    pub custom_id: String,
}

/// A value participating in custom-ID composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
}

impl FieldValue<'_> {
    /// Decimal rendering; mathematically integral floats lose the fractional
    /// part (5.0 renders as "5", 5.5 stays "5.5").
    pub fn render(&self) -> String {
        match *self {
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) if f.fract() == 0.0 => (f as i64).to_string(),
            FieldValue::Float(f) => f.to_string(),
        }
    }
}
