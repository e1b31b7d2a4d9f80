//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod options;
pub mod report;

pub use audit::handle_audit_command;
pub use options::{handle_options_command, OptionsCommands};
pub use report::{
    handle_payments_command, handle_returns_command, handle_visits_command, PaymentsArgs,
    ReturnsArgs, VisitsArgs,
};

use crate::access::StaticAccessControl;
use crate::audit::AuditLogger;
use crate::config::{PortalPaths, Settings};
use crate::export::FileDownloader;
use crate::services::ReportService;
use crate::source::{self, RecordSource};

/// Everything a command needs for one invocation
pub struct Session {
    pub paths: PortalPaths,
    pub settings: Settings,
    source: Box<dyn RecordSource>,
    access: StaticAccessControl,
}

impl Session {
    /// Wire up the record source and allow-list from settings
    pub fn new(paths: PortalPaths, settings: Settings) -> Self {
        let source = source::from_settings(&settings);
        let access = StaticAccessControl::from_settings(&settings);
        Self {
            paths,
            settings,
            source,
            access,
        }
    }

    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(self.source.as_ref(), &self.access, &self.settings)
    }

    pub fn downloader(&self) -> FileDownloader {
        FileDownloader::new(self.settings.resolve_export_dir(&self.paths))
    }

    pub fn audit_logger(&self) -> AuditLogger {
        AuditLogger::new(self.paths.audit_log())
    }
}
