//! Record sources
//!
//! A [`RecordSource`] hands a session the full collection of records. The
//! portal ships with built-in sample data ([`FixtureSource`]); a JSON dataset
//! file can be configured instead ([`JsonFileSource`]). Store scoping is not
//! the source's job: the reporting engine applies the allow-list.

pub mod file_io;
pub mod fixtures;

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::PortalResult;
use crate::models::Dataset;

/// Something that can provide the portal's records
pub trait RecordSource {
    /// Fetch every record, failing with `DataUnavailable` if the source can't be reached
    fn fetch(&self) -> PortalResult<Dataset>;

    /// Short description for `portal config`
    fn describe(&self) -> String;
}

/// Serves the built-in sample data
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

impl RecordSource for FixtureSource {
    fn fetch(&self) -> PortalResult<Dataset> {
        Ok(fixtures::dataset())
    }

    fn describe(&self) -> String {
        "built-in sample data".to_string()
    }
}

/// Reads a dataset from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self) -> PortalResult<Dataset> {
        let dataset: Dataset = file_io::read_json_required(&self.path)?;
        dataset.validate()?;
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }
}

/// Pick the source the settings ask for
pub fn from_settings(settings: &Settings) -> Box<dyn RecordSource> {
    match &settings.data_file {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(FixtureSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use tempfile::TempDir;

    #[test]
    fn test_fixture_source() {
        let dataset = FixtureSource.fetch().unwrap();
        assert_eq!(dataset.field_visits.len(), 3);
        assert_eq!(dataset.payments.len(), 2);
        assert_eq!(dataset.returns.len(), 2);
    }

    #[test]
    fn test_json_file_source_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        std::fs::write(&path, serde_json::to_string(&fixtures::dataset()).unwrap()).unwrap();

        let dataset = JsonFileSource::new(&path).fetch().unwrap();
        assert_eq!(dataset, fixtures::dataset());
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("missing.json"));

        let err = source.fetch().unwrap_err();
        assert!(matches!(err, PortalError::DataUnavailable(_)));
    }

    #[test]
    fn test_json_file_source_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        let mut dataset = fixtures::dataset();
        dataset.field_visits[0].store_environment.value = 7;
        std::fs::write(&path, serde_json::to_string(&dataset).unwrap()).unwrap();

        let err = JsonFileSource::new(&path).fetch().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(from_settings(&settings).describe(), "built-in sample data");

        settings.data_file = Some(PathBuf::from("/tmp/records.json"));
        assert!(from_settings(&settings).describe().starts_with("JSON file"));
    }
}
