//! User settings for CCRM
//!
//! Holds display preferences, the data file names, and the fixed instructor
//! roster that courses refer to by id.

use serde::{Deserialize, Serialize};

use super::paths::CcrmPaths;
use crate::error::CcrmError;
use crate::models::Instructor;

/// CSV file names inside the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataFiles {
    #[serde(default = "default_students_file")]
    pub students: String,

    #[serde(default = "default_courses_file")]
    pub courses: String,

    #[serde(default = "default_enrollments_file")]
    pub enrollments: String,
}

fn default_students_file() -> String {
    "students.csv".to_string()
}

fn default_courses_file() -> String {
    "courses.csv".to_string()
}

fn default_enrollments_file() -> String {
    "enrollments.csv".to_string()
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            students: default_students_file(),
            courses: default_courses_file(),
            enrollments: default_enrollments_file(),
        }
    }
}

/// User settings for CCRM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Timestamp format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default)]
    pub files: DataFiles,

    /// Instructor roster; read-only for the rest of the system
    #[serde(default)]
    pub instructors: Vec<Instructor>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            files: DataFiles::default(),
            instructors: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CcrmPaths) -> Result<Self, CcrmError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CcrmError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CcrmError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CcrmPaths) -> Result<(), CcrmError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CcrmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CcrmError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format a timestamp with the configured pattern
    pub fn format_timestamp(&self, ts: &chrono::NaiveDateTime) -> String {
        ts.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(settings.files.students, "students.csv");
        assert_eq!(settings.files.courses, "courses.csv");
        assert_eq!(settings.files.enrollments, "enrollments.csv");
        assert!(settings.instructors.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.instructors.push(Instructor::new(
            "I1",
            "Grace Hopper",
            "grace@example.edu",
            "Computer Science",
        ));
        settings.files.students = "people.csv".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.files.students, "people.csv");
        assert_eq!(loaded.instructors.len(), 1);
        assert_eq!(loaded.instructors[0].name(), "Grace Hopper");
        assert_eq!(loaded.instructors[0].department, "Computer Science");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%d/%m/%Y"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%d/%m/%Y");
        assert_eq!(loaded.files, DataFiles::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, CcrmError::Config(_)));
    }

    #[test]
    fn test_format_timestamp() {
        let settings = Settings::default();
        let ts = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(settings.format_timestamp(&ts), "2024-09-01 08:05:00");
    }
}
