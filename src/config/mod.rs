//! Configuration module for the franchise portal
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (allow-list, data source, export options)

pub mod paths;
pub mod settings;

pub use paths::PortalPaths;
pub use settings::{LineEnding, Settings};
