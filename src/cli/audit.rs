//! CLI command for the audit log

use super::Session;
use crate::error::PortalResult;

/// Handle `portal audit`: show the most recent exports and prints
pub fn handle_audit_command(session: &Session, limit: usize) -> PortalResult<()> {
    let logger = session.audit_logger();
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No exports recorded yet.");
        return Ok(());
    }

    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }
    println!(
        "\nShowing {} most recent entries from {}",
        entries.len(),
        logger.path().display()
    );

    Ok(())
}
