use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::params;

/// ## Structure
/// This module contains the data structures for the plan file.
///
/// ```text
/// Plan
///   ├── input: InputConfig
///   │   └── filename: String
///   ├── settings: Settings
///   │   ├── partner_id / buffer_percent / grade
///   │   ├── district_digits / block_digits / school_digits / student_digits
///   │   └── parameter_set: String ("A1".."A10")
///   └── export: ExportProfile
///       └── profiles: Vec<ExportProfileItem>
///           ├── filename: String
///           ├── table: OutputKind
///           │   ├── Expanded
///           │   ├── Mapped
///           │   └── TeacherCodes
///           └── exporter: ExportFileType
///               ├── Xlsx
///               ├── Csv
///               └── Json
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Plan {
    pub input: InputConfig,
    pub settings: Settings,
    pub export: ExportProfile,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct InputConfig {
    pub filename: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            filename: "roster.xlsx".to_string(),
        }
    }
}

/// Run configuration, supplied once per run and immutable during processing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub partner_id: u64,
    pub buffer_percent: f64,
    pub grade: u32,
    pub district_digits: usize,
    pub block_digits: usize,
    pub school_digits: usize,
    pub student_digits: usize,
    pub parameter_set: String,
}

impl Default for Settings {
    // Mirrors the defaults of the upstream operator form.
    fn default() -> Self {
        Settings {
            partner_id: 0,
            buffer_percent: 30.0,
            grade: 1,
            district_digits: 2,
            block_digits: 2,
            school_digits: 3,
            student_digits: 4,
            parameter_set: "A1".to_string(),
        }
    }
}

impl Settings {
    /// Checked when the plan is loaded, so a bad parameter-set key or digit
    /// width fails before any data is read.
    pub fn validate(&self) -> Result<(), RosterError> {
        if !(0.0..=100.0).contains(&self.buffer_percent) {
            return Err(RosterError::InvalidConfiguration(format!(
                "buffer_percent {} is outside 0..=100",
                self.buffer_percent
            )));
        }
        if self.grade == 0 {
            return Err(RosterError::InvalidConfiguration(
                "grade must be at least 1".to_string(),
            ));
        }
        for (name, width) in [
            ("district_digits", self.district_digits),
            ("block_digits", self.block_digits),
            ("school_digits", self.school_digits),
            ("student_digits", self.student_digits),
        ] {
            if width == 0 {
                return Err(RosterError::InvalidConfiguration(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        params::parameter_set(&self.parameter_set)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfile {
    pub profiles: Vec<ExportProfileItem>,
}

impl Default for ExportProfile {
    /// The three canonical outputs, named as the upstream tool names its
    /// downloads.
    fn default() -> Self {
        ExportProfile {
            profiles: vec![
                ExportProfileItem {
                    filename: "Student_Ids.xlsx".to_string(),
                    table: OutputKind::Expanded,
                    exporter: ExportFileType::Xlsx,
                },
                ExportProfileItem {
                    filename: "Student_Ids_Mapped.xlsx".to_string(),
                    table: OutputKind::Mapped,
                    exporter: ExportFileType::Xlsx,
                },
                ExportProfileItem {
                    filename: "Teacher_Codes.xlsx".to_string(),
                    table: OutputKind::TeacherCodes,
                    exporter: ExportFileType::Xlsx,
                },
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportProfileItem {
    pub filename: String,
    pub table: OutputKind,
    pub exporter: ExportFileType,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Expanded,
    Mapped,
    TeacherCodes,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFileType {
    Xlsx,
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let plan = Plan::default();
        let yaml_str = serde_yaml::to_string(&plan).unwrap();
        assert!(yaml_str.contains("profiles"));
        assert!(yaml_str.contains("Student_Ids.xlsx"));
    }

    #[test]
    fn test_planfile_deserialization() {
        let yaml_str = r#"
input:
  filename: roster.csv
settings:
  partner_id: 12
  buffer_percent: 30.0
  grade: 5
  district_digits: 2
  block_digits: 2
  school_digits: 3
  student_digits: 4
  parameter_set: A2
export:
  profiles:
    - filename: Student_Ids.csv
      table: Expanded
      exporter: Csv
    - filename: Student_Ids_Mapped.xlsx
      table: Mapped
      exporter: Xlsx
    - filename: Teacher_Codes.json
      table: TeacherCodes
      exporter: Json
"#;

        let plan: Plan = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(plan.settings.grade, 5);
        assert_eq!(plan.export.profiles.len(), 3);
        assert_eq!(plan.export.profiles[2].table, OutputKind::TeacherCodes);
        plan.settings.validate().unwrap();
    }

    #[test]
    fn default_settings_validate() {
        Settings::default().validate().unwrap();
    }

    #[test]
    fn unknown_parameter_set_fails_validation() {
        let settings = Settings {
            parameter_set: "Z9".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RosterError::UnknownParameterSet(_))
        ));
    }

    #[test]
    fn zero_digit_widths_are_rejected() {
        let settings = Settings {
            student_digits: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn out_of_range_buffer_is_rejected() {
        let settings = Settings {
            buffer_percent: 130.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
