//! Export log writer and reader
//!
//! `audit.log` in the portal's config directory holds one JSON object per
//! line, one line per export or print, oldest first. The file is only ever
//! appended to; `portal audit` reads it back.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{PortalError, PortalResult};

use super::entry::AuditEntry;

/// Records what left the portal, and when
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one export or print; the line is flushed before returning
    pub fn log(&self, entry: &AuditEntry) -> PortalResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| PortalError::Json(format!("Cannot encode audit entry: {}", e)))?;

        let mut file = self.open_for_append()?;
        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| {
                PortalError::Io(format!(
                    "Cannot write to audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })
    }

    /// Every recorded export, oldest first; a missing log means none yet
    pub fn read_all(&self) -> PortalResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| {
            PortalError::Io(format!(
                "Cannot open audit log {}: {}",
                self.log_path.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                PortalError::Io(format!("Cannot read audit log line {}: {}", line_no, e))
            })?;
            if let Some(entry) = parse_line(&line, line_no)? {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// The last `count` exports, oldest first
    pub fn read_recent(&self, count: usize) -> PortalResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn open_for_append(&self) -> PortalResult<File> {
        if let Some(dir) = self.log_path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                PortalError::Io(format!("Cannot create {}: {}", dir.display(), e))
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                PortalError::Io(format!(
                    "Cannot open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })
    }
}

/// Blank lines are skipped; anything else must be a whole entry
fn parse_line(line: &str, line_no: usize) -> PortalResult<Option<AuditEntry>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some).map_err(|e| {
        PortalError::Json(format!("Corrupt audit entry at line {}: {}", line_no, e))
    })
}
