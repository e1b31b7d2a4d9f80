//! Franchise Portal - reports for retail pharmacy franchisees
//!
//! This library provides the reporting core of a franchisee portal: the
//! field visit, payment and return records of the stores a session may see,
//! filtered by date range and category, flagged for non-compliance, and
//! exported as spreadsheet-ready CSV (or JSON / YAML, or a printable page).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Record types (visits, payments, returns) and the `Record` trait
//! - `source`: Where records come from (built-in sample data or a JSON file)
//! - `access`: Store allow-list for the session
//! - `reports`: Scoping, filtering, compliance flag, choice lists, report views
//! - `export`: CSV / JSON / YAML writers and the download collaborator
//! - `services`: Business logic tying source, access and reports together
//! - `audit`: Audit log of exports and prints
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use portal::access::StaticAccessControl;
//! use portal::config::Settings;
//! use portal::reports::ReportFilter;
//! use portal::services::ReportService;
//! use portal::source::FixtureSource;
//!
//! let settings = Settings::default();
//! let access = StaticAccessControl::from_settings(&settings);
//! let service = ReportService::new(&FixtureSource, &access, &settings);
//! let report = service.field_visits(&ReportFilter::new())?;
//! ```

pub mod access;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod source;

pub use error::PortalError;
