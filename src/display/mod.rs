//! Display formatting for terminal output
//!
//! Provides utilities for formatting report data for terminal display,
//! including dates, amounts, and status indicators.

pub mod report;

pub use report::{
    double_separator, format_date, format_header, format_rupees, format_timestamp, separator,
    status_badge, truncate,
};
