//! CLI command for filter choice lists

use clap::Subcommand;

use super::Session;
use crate::error::PortalResult;
use crate::reports::ALL;

/// Which view's choices to list
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum OptionsCommands {
    /// Stores and employees for the field visit filters
    Visits,
    /// Statuses for the payments filter
    Payments,
    /// Statuses for the returns filter
    Returns,
}

/// Handle `portal options`
pub fn handle_options_command(session: &Session, cmd: OptionsCommands) -> PortalResult<()> {
    let service = session.reports();

    match cmd {
        OptionsCommands::Visits => {
            let options = service.visit_options()?;

            println!("Stores:");
            println!("  {}", ALL);
            for (id, name) in &options.stores {
                println!("  {} | {}", id, name);
            }

            println!("\nEmployees:");
            println!("  {}", ALL);
            for name in &options.employees {
                println!("  {}", name);
            }
        }
        OptionsCommands::Payments | OptionsCommands::Returns => {
            println!("Statuses:");
            println!("  {}", ALL);
            for status in service.status_options() {
                println!("  {}", status);
            }
        }
    }

    Ok(())
}
