//! Plan CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::edits::PlanEdit;
use crate::error::UtsavResult;
use crate::generator::NewPlanParams;
use crate::models::{CityTier, EventType, Quality};
use crate::reports::BudgetSummary;
use crate::services::PlanService;
use crate::storage::Storage;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan with an auto-generated budget
    New {
        /// Plan name
        name: String,
        /// Event city (drives the default cost tier)
        #[arg(short, long)]
        city: String,
        /// Event type
        #[arg(short, long, value_enum)]
        event_type: EventType,
        /// Expected guest count
        #[arg(short, long)]
        guests: u32,
        /// Spend level (defaults to standard)
        #[arg(short, long, value_enum)]
        quality: Option<Quality>,
        /// City cost tier (defaults from the city name)
        #[arg(short, long, value_enum)]
        tier: Option<CityTier>,
        /// Contingency percent (defaults from settings)
        #[arg(long)]
        contingency: Option<u8>,
    },

    /// List all plans
    List,

    /// Show a plan's details
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Rename a plan
    Rename {
        /// Plan name or id prefix
        plan: String,
        /// New name
        name: String,
    },

    /// Delete a plan
    Delete {
        /// Plan name or id prefix
        plan: String,
    },
}

/// Handle a plan command
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PlanCommands,
) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        PlanCommands::New {
            name,
            city,
            event_type,
            guests,
            quality,
            tier,
            contingency,
        } => {
            let plan = service.create(NewPlanParams {
                name,
                city,
                event_type,
                tier,
                quality: quality.unwrap_or_default(),
                guest_count: guests,
                contingency_percent: contingency
                    .unwrap_or(settings.default_contingency_percent),
            })?;

            println!("Created plan '{}' ({})", plan.name, plan.id);
            println!();

            let summary = BudgetSummary::generate(&plan);
            print!("{}", display::format_budget(&plan, &summary));
            println!();
            println!("Run 'utsav budget show {}' any time to revisit this.", plan.name);
        }

        PlanCommands::List => {
            let plans = service.list()?;
            print!("{}", display::format_plan_list(&plans));
        }

        PlanCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            print!("{}", display::format_plan_details(&plan));
        }

        PlanCommands::Rename { plan, name } => {
            let renamed = service.edit(&plan, &PlanEdit::Rename { name })?;
            println!("Renamed plan to '{}'", renamed.name);
        }

        PlanCommands::Delete { plan } => {
            let deleted = service.delete(&plan)?;
            println!("Deleted plan '{}'", deleted.name);
        }
    }

    Ok(())
}
