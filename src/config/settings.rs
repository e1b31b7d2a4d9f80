//! User settings for the franchise portal
//!
//! Manages the store allow-list used by the static access control, the
//! record source location, and export preferences.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::PortalPaths;
use crate::error::PortalError;

/// Line separator used in exported CSV files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n` (default)
    #[default]
    Lf,
    /// `\r\n`, for spreadsheet tools that insist on it
    Crlf,
}

impl LineEnding {
    /// Setting name, as written in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User settings for the portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Stores this session may see
    #[serde(default = "default_allowed_store_ids")]
    pub allowed_store_ids: Vec<String>,

    /// JSON dataset to read records from (built-in sample data when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Where downloads are written (defaults to `<base>/exports`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// CSV line separator
    #[serde(default)]
    pub line_ending: LineEnding,

    /// strftime format for date-times in exports and terminal views
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Longest date range a returns search accepts, in days
    #[serde(default = "default_max_range_days")]
    pub max_range_days: i64,

    /// Reject `from > to` instead of returning an empty result
    #[serde(default)]
    pub reject_inverted_range: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_allowed_store_ids() -> Vec<String> {
    vec!["S-1001".to_string()]
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_max_range_days() -> i64 {
    90
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            allowed_store_ids: default_allowed_store_ids(),
            data_file: None,
            export_dir: None,
            line_ending: LineEnding::default(),
            timestamp_format: default_timestamp_format(),
            max_range_days: default_max_range_days(),
            reject_inverted_range: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PortalPaths) -> Result<Self, PortalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PortalError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PortalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PortalPaths) -> Result<(), PortalError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PortalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PortalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the rest of the portal can't work with
    pub fn validate(&self) -> Result<(), PortalError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(PortalError::Config(format!(
                "Invalid timestamp_format '{}' in settings file",
                self.timestamp_format
            )));
        }

        if self.max_range_days < 1 {
            return Err(PortalError::Config(format!(
                "max_range_days must be at least 1, got {}",
                self.max_range_days
            )));
        }

        Ok(())
    }

    /// Resolve the download directory
    pub fn resolve_export_dir(&self, paths: &PortalPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.allowed_store_ids, vec!["S-1001".to_string()]);
        assert_eq!(settings.line_ending, LineEnding::Lf);
        assert_eq!(settings.max_range_days, 90);
        assert!(!settings.reject_inverted_range);
        assert!(settings.data_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.allowed_store_ids.push("S-2002".into());
        settings.line_ending = LineEnding::Crlf;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.allowed_store_ids.len(), 2);
        assert_eq!(loaded.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"line_ending": "crlf"}"#).unwrap();
        assert_eq!(loaded.line_ending, LineEnding::Crlf);
        assert_eq!(loaded.allowed_store_ids, vec!["S-1001".to_string()]);
        assert_eq!(loaded.timestamp_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_export_dir_resolution() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.resolve_export_dir(&paths), paths.export_dir());

        settings.export_dir = Some(temp_dir.path().join("downloads"));
        assert_eq!(
            settings.resolve_export_dir(&paths),
            temp_dir.path().join("downloads")
        );
    }

    #[test]
    fn test_invalid_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_unknown_timestamp_specifier_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"timestamp_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_line_ending_display_matches_settings_file() {
        assert_eq!(LineEnding::Lf.to_string(), "lf");
        assert_eq!(LineEnding::Crlf.to_string(), "crlf");

        let json = serde_json::to_string(&LineEnding::Crlf).unwrap();
        assert_eq!(json, format!("\"{}\"", LineEnding::Crlf));
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let settings = Settings {
            timestamp_format: "%d/%m/%Y %H:%M".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        let settings = Settings {
            max_range_days: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
