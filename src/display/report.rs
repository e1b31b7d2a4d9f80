//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report views.

use std::fmt::Write;

use crate::models::{parse_timestamp, ApprovalStatus};

/// Format a record timestamp with a strftime pattern
///
/// Falls back to the raw text when the timestamp doesn't parse or the
/// pattern can't be rendered.
pub fn format_timestamp(raw: &str, format: &str) -> String {
    let Ok(ts) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", ts.format(format)) {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}

/// Format a calendar date (YYYY-MM-DD) from a record timestamp
pub fn format_date(raw: &str) -> String {
    format_timestamp(raw, "%Y-%m-%d")
}

/// Format whole rupees with Indian digit grouping (e.g. ₹1,25,000)
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    if amount < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Status badge text for terminal tables
pub fn status_badge(status: ApprovalStatus) -> String {
    match status {
        ApprovalStatus::Approved => format!("\x1b[32m{}\x1b[0m", status),
        ApprovalStatus::Pending => format!("\x1b[33m{}\x1b[0m", status),
        ApprovalStatus::Rejected => format!("\x1b[31m{}\x1b[0m", status),
    }
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-10-05T10:30:00Z", "%Y-%m-%d %H:%M"),
            "2025-10-05 10:30"
        );
        assert_eq!(format_timestamp("not a date", "%Y"), "not a date");
        assert_eq!(
            format_timestamp("2025-10-05T10:30:00Z", "%Q"),
            "2025-10-05T10:30:00Z"
        );
        assert_eq!(format_date("2024-01-16"), "2024-01-16");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(50), "₹50");
        assert_eq!(format_rupees(5000), "₹5,000");
        assert_eq!(format_rupees(30000), "₹30,000");
        assert_eq!(format_rupees(125000), "₹1,25,000");
        assert_eq!(format_rupees(12345678), "₹1,23,45,678");
        assert_eq!(format_rupees(-1500), "-₹1,500");
    }

    #[test]
    fn test_status_badge() {
        assert!(status_badge(ApprovalStatus::Approved).contains("Approved"));
        assert!(status_badge(ApprovalStatus::Rejected).starts_with("\x1b[31m"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Payments", 12), "  Payments");
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(2), "══");
    }
}
