use crate::error::RosterError;

/// Field names a parameter set may reference when composing a custom ID.
pub mod field {
    pub const PARTNER_ID: &str = "Partner_ID";
    pub const DISTRICT_ID: &str = "District_ID";
    pub const BLOCK_ID: &str = "Block_ID";
    pub const SCHOOL_ID: &str = "School_ID";
    pub const GRADE: &str = "Grade";
    pub const STUDENT_NO: &str = "student_no";
}

/// A named, ordered list of fields that determines which components compose
/// the custom ID. The registry ships with the binary and is not editable at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    pub key: &'static str,
    pub fields: &'static [&'static str],
    pub description: &'static str,
}

use field::*;

pub const PARAMETER_SETS: &[ParameterSet] = &[
    ParameterSet {
        key: "A1",
        fields: &[BLOCK_ID, GRADE, STUDENT_NO],
        description: "Uses Block_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A2",
        fields: &[SCHOOL_ID, GRADE, STUDENT_NO],
        description: "Uses School_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A3",
        fields: &[DISTRICT_ID, SCHOOL_ID, GRADE, STUDENT_NO],
        description: "Uses District_ID, School_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A4",
        fields: &[DISTRICT_ID, GRADE, STUDENT_NO],
        description: "Uses District_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A5",
        fields: &[PARTNER_ID, GRADE, STUDENT_NO],
        description: "Uses Partner_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A6",
        fields: &[DISTRICT_ID, BLOCK_ID, GRADE, STUDENT_NO],
        description: "Uses District_ID, Block_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A7",
        fields: &[BLOCK_ID, SCHOOL_ID, GRADE, STUDENT_NO],
        description: "Uses Block_ID, School_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A8",
        fields: &[PARTNER_ID, BLOCK_ID, GRADE, STUDENT_NO],
        description: "Uses Partner_ID, Block_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A9",
        fields: &[PARTNER_ID, DISTRICT_ID, GRADE, STUDENT_NO],
        description: "Uses Partner_ID, District_ID, Grade, and student_no to generate the ID.",
    },
    ParameterSet {
        key: "A10",
        fields: &[PARTNER_ID, SCHOOL_ID, GRADE, STUDENT_NO],
        description: "Uses Partner_ID, School_ID, Grade, and student_no to generate the ID.",
    },
];

pub fn parameter_set(key: &str) -> Result<&'static ParameterSet, RosterError> {
    PARAMETER_SETS
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| RosterError::UnknownParameterSet(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_ten_sets() {
        assert_eq!(PARAMETER_SETS.len(), 10);
    }

    #[test]
    fn every_set_ends_with_grade_and_student_no() {
        for set in PARAMETER_SETS {
            let n = set.fields.len();
            assert_eq!(set.fields[n - 2], field::GRADE, "set {}", set.key);
            assert_eq!(set.fields[n - 1], field::STUDENT_NO, "set {}", set.key);
        }
    }

    #[test]
    fn lookup_known_key() {
        let set = parameter_set("A3").unwrap();
        assert_eq!(
            set.fields,
            &[
                field::DISTRICT_ID,
                field::SCHOOL_ID,
                field::GRADE,
                field::STUDENT_NO
            ]
        );
    }

    #[test]
    fn lookup_unknown_key_is_a_configuration_error() {
        assert!(matches!(
            parameter_set("B7"),
            Err(crate::error::RosterError::UnknownParameterSet(_))
        ));
    }
}
