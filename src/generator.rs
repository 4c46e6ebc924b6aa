use tracing::debug;

use crate::codes::{self, CodeBook};
use crate::params::{field, ParameterSet};
use crate::plan::Settings;
use crate::roster::{CodedSchool, FieldValue, SchoolRecord, StudentRow};

/// Everything one run derives from the input roster: the coded pre-expansion
/// school rows and the per-student expansion. Owned by the caller; no state
/// is carried between runs.
#[derive(Debug, Clone, Default)]
pub struct GeneratedRoster {
    pub schools: Vec<CodedSchool>,
    pub students: Vec<StudentRow>,
}

/// Runs the identifier-assignment, buffering, expansion and composition
/// stages as one batch over the whole table.
pub fn generate(
    records: &[SchoolRecord],
    settings: &Settings,
    params: &ParameterSet,
) -> GeneratedRoster {
    let districts = CodeBook::from_column(records.iter().map(|r| r.district.as_str()));
    let blocks = CodeBook::from_column(records.iter().map(|r| r.block.as_str()));
    let school_ids = CodeBook::from_column(records.iter().map(|r| r.school_id.as_str()));
    debug!(
        "Assigned codes for {} districts, {} blocks, {} schools",
        districts.len(),
        blocks.len(),
        school_ids.len()
    );

    // Partner_ID is padded to its own decimal length, which is a no-op.
    // Upstream behavior, kept as-is.
    let partner_id = settings.partner_id.to_string();

    let schools: Vec<CodedSchool> = records
        .iter()
        .map(|r| CodedSchool {
            district: r.district.clone(),
            block: r.block.clone(),
            school: r.school.clone(),
            district_id: districts.code(&r.district, settings.district_digits),
            block_id: blocks.code(&r.block, settings.block_digits),
            school_id: school_ids.code(&r.school_id, settings.school_digits),
            partner_id: partner_id.clone(),
            grade: settings.grade,
            total_students: r.total_students,
            buffered: r
                .total_students
                .map(|t| buffered_enrollment(t, settings.buffer_percent)),
        })
        .collect();

    let mut students = Vec::new();
    for school in &schools {
        // Schools with a missing or non-positive buffered count contribute
        // no student rows.
        let slots = school.buffered.unwrap_or(0);
        for seq in 1..=slots {
            let student_id = format!(
                "{}{:02}{}",
                school.school_id,
                school.grade,
                codes::pad(seq as usize, settings.student_digits)
            );
            // Re-read from the tail of the composite so the stored value is
            // exactly what the ID carries.
            let student_no = student_id[student_id.len() - settings.student_digits..].to_string();
            let custom_id = compose_custom_id(school, &student_no, params.fields);
            students.push(StudentRow {
                school: school.clone(),
                student_id,
                student_no,
                custom_id,
            });
        }
    }

    GeneratedRoster { schools, students }
}

/// Spare capacity added to the reported enrollment, floored to a whole
/// number of ID slots.
pub fn buffered_enrollment(total_students: f64, buffer_percent: f64) -> i64 {
    (total_students * (1.0 + buffer_percent / 100.0)).floor() as i64
}

/// Concatenates the selected fields in list order with no separator.
/// Missing or unknown fields are skipped entirely.
pub fn compose_custom_id(school: &CodedSchool, student_no: &str, fields: &[&str]) -> String {
    let mut out = String::new();
    for &name in fields {
        let value = if name == field::STUDENT_NO {
            Some(FieldValue::Text(student_no))
        } else {
            school.field(name)
        };
        if let Some(value) = value {
            out.push_str(&value.render());
        }
    }
    out
}
