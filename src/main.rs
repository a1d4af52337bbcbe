use anyhow::Result;
use clap::{Parser, Subcommand};

use utsav::cli::{
    handle_budget_command, handle_checklist_command, handle_guest_command,
    handle_logistics_command, handle_plan_command, handle_snapshot_command,
    handle_timeline_command, handle_vendor_command,
};
use utsav::config::{paths::UtsavPaths, settings::Settings};
use utsav::storage::Storage;

#[derive(Parser)]
#[command(
    name = "utsav",
    version,
    about = "Terminal-based event and wedding budget planner",
    long_about = "Utsav plans weddings and events from the terminal. Create a plan \
                  and get a budget generated from your city, guest count, and spend \
                  level, then manage the checklist, timeline, vendors, guests, and \
                  logistics as the day approaches."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan management commands
    #[command(subcommand)]
    Plan(utsav::cli::PlanCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(utsav::cli::BudgetCommands),

    /// Guest and gifting commands
    #[command(subcommand)]
    Guest(utsav::cli::GuestCommands),

    /// Vendor commands
    #[command(subcommand)]
    Vendor(utsav::cli::VendorCommands),

    /// Checklist commands
    #[command(subcommand)]
    Checklist(utsav::cli::ChecklistCommands),

    /// Timeline commands
    #[command(subcommand)]
    Timeline(utsav::cli::TimelineCommands),

    /// Room and transport commands
    #[command(subcommand)]
    Logistics(utsav::cli::LogisticsCommands),

    /// Snapshot commands
    #[command(subcommand, alias = "snap")]
    Snapshot(utsav::cli::SnapshotCommands),

    /// Show recent plan history
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = UtsavPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Plan(cmd)) => {
            handle_plan_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Guest(cmd)) => {
            handle_guest_command(&storage, cmd)?;
        }
        Some(Commands::Vendor(cmd)) => {
            handle_vendor_command(&storage, cmd)?;
        }
        Some(Commands::Checklist(cmd)) => {
            handle_checklist_command(&storage, cmd)?;
        }
        Some(Commands::Timeline(cmd)) => {
            handle_timeline_command(&storage, cmd)?;
        }
        Some(Commands::Logistics(cmd)) => {
            handle_logistics_command(&storage, cmd)?;
        }
        Some(Commands::Snapshot(cmd)) => {
            handle_snapshot_command(&storage, cmd)?;
        }
        Some(Commands::History { limit }) => {
            let entries = storage.audit.recent(limit)?;
            if entries.is_empty() {
                println!("No history yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config) => {
            println!("Utsav Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!(
                "  Default contingency: {}%",
                settings.default_contingency_percent
            );
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            println!("Utsav - event and wedding budget planner");
            println!();
            println!("Run 'utsav --help' for usage information.");
            println!("Run 'utsav plan new' to create your first plan.");
        }
    }

    Ok(())
}
