use anyhow::Result;
use clap::{Parser, Subcommand};

use portal::cli::{
    handle_audit_command, handle_options_command, handle_payments_command,
    handle_returns_command, handle_visits_command, Session,
};
use portal::config::{PortalPaths, Settings};

#[derive(Parser)]
#[command(
    name = "portal",
    version,
    about = "Franchisee portal reports: field visits, payments and returns",
    long_about = "Browse the field visit, payment and return records of the stores \
                  you are allowed to see, filter them by date and category, and \
                  export or print what you see."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Field visit reports
    #[command(alias = "field-visits")]
    Visits(portal::cli::VisitsArgs),

    /// Payments
    Payments(portal::cli::PaymentsArgs),

    /// Product returns
    Returns(portal::cli::ReturnsArgs),

    /// List the choices for a view's filters
    #[command(subcommand)]
    Options(portal::cli::OptionsCommands),

    /// Show recent exports and prints
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write a settings file with the defaults, if none exists yet
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PortalPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let session = Session::new(paths, settings);

    match cli.command {
        Some(Commands::Visits(args)) => handle_visits_command(&session, args)?,
        Some(Commands::Payments(args)) => handle_payments_command(&session, args)?,
        Some(Commands::Returns(args)) => handle_returns_command(&session, args)?,
        Some(Commands::Options(cmd)) => handle_options_command(&session, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&session, limit)?,
        Some(Commands::Init) => {
            let paths = &session.paths;
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                session.settings.save(paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!("Edit allowed_store_ids and data_file there, then run 'portal visits'.");
            }
        }
        Some(Commands::Config) => {
            let paths = &session.paths;
            let settings = &session.settings;

            println!("Franchise Portal Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!(
                "Export directory: {}",
                settings.resolve_export_dir(paths).display()
            );
            println!();
            println!("Settings:");
            println!("  Record source:     {}", session.reports().describe_source());
            println!("  Allowed stores:    {}", settings.allowed_store_ids.join(", "));
            println!("  CSV line ending:   {}", settings.line_ending);
            println!("  Timestamp format:  {}", settings.timestamp_format);
            println!("  Max returns range: {} days", settings.max_range_days);
            println!("  Reject inverted:   {}", settings.reject_inverted_range);
        }
        None => {
            println!("Franchise Portal - field visits, payments and returns");
            println!();
            println!("Run 'portal --help' for usage information.");
        }
    }

    Ok(())
}
