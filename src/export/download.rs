//! Download delivery
//!
//! The portal hands finished exports to a [`Downloader`]; where the bytes end
//! up is the downloader's business. [`FileDownloader`] saves them into a
//! directory, replacing any earlier file of the same name atomically.

use std::path::{Path, PathBuf};

use crate::error::{PortalError, PortalResult};
use crate::source::file_io::write_atomic;

/// Accepts a generated blob under a file name
pub trait Downloader {
    /// Deliver the blob, returning where it went
    fn deliver(&self, filename: &str, blob: &[u8]) -> PortalResult<PathBuf>;
}

/// Saves downloads into a directory
#[derive(Debug, Clone)]
pub struct FileDownloader {
    dir: PathBuf,
}

impl FileDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Downloader for FileDownloader {
    fn deliver(&self, filename: &str, blob: &[u8]) -> PortalResult<PathBuf> {
        let name = Path::new(filename);
        if name.file_name().map(|n| n != name.as_os_str()).unwrap_or(true) {
            return Err(PortalError::Export(format!(
                "Invalid download name: {}",
                filename
            )));
        }

        let path = self.dir.join(name);
        write_atomic(&path, blob)?;
        Ok(path)
    }
}
