//! Export module for the franchise portal
//!
//! Turns the filtered rows of a view into a downloadable file:
//! - CSV: spreadsheet-compatible, every value quoted
//! - JSON: machine-readable records with a metadata envelope
//! - YAML: the same envelope, human-readable
//!
//! Finished files are handed to a [`Downloader`].

pub mod csv;
pub mod download;
pub mod json;
pub mod yaml;

use clap::ValueEnum;

pub use self::csv::{export_csv, to_csv_string, Column};
pub use download::{Downloader, FileDownloader};
pub use json::{export_records_json, RecordExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_records_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    #[default]
    Csv,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl ExportFormat {
    /// File extension for downloads in this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}
