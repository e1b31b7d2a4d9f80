//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave half-written files behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::PortalError;

/// Read JSON from a file, returning an error if the file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, PortalError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(PortalError::DataUnavailable(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path).map_err(|e| {
        PortalError::DataUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        PortalError::DataUnavailable(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), PortalError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PortalError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| PortalError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| PortalError::Io(format!("Failed to write data: {}", e)))?;
    writer
        .flush()
        .map_err(|e| PortalError::Io(format!("Failed to flush data: {}", e)))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PortalError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PortalError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestData {
        name: String,
    }

    #[test]
    fn test_read_missing_is_data_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_json_required::<TestData, _>(temp_dir.path().join("none.json")).unwrap_err();
        assert!(matches!(err, PortalError::DataUnavailable(_)));
    }

    #[test]
    fn test_read_malformed_is_data_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json_required::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, PortalError::DataUnavailable(_)));
    }

    #[test]
    fn test_write_atomic_creates_parents_and_no_temp_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.csv");

        write_atomic(&path, b"a,b\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
        assert!(!temp_dir.path().join("nested").join("out.csv.tmp").exists());
    }
}
