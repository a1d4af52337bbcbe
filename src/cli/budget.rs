//! Budget CLI commands
//!
//! Line items are addressed by (category index, item index) as shown by
//! `budget show`.

use clap::Subcommand;

use crate::display;
use crate::edits::PlanEdit;
use crate::error::{UtsavError, UtsavResult};
use crate::models::{BudgetItem, Side};
use crate::reports::{BudgetSummary, SideSplit};
use crate::services::PlanService;
use crate::storage::Storage;

use super::parse_money;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the budget breakdown
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Add a line item to a category
    AddItem {
        /// Plan name or id prefix
        plan: String,
        /// Category index (see 'budget show')
        category: usize,
        /// Item label
        label: String,
        /// Estimated cost (e.g., "45000" or "45,000")
        cost: String,
        /// Side attribution (weddings)
        #[arg(short, long, value_enum)]
        side: Option<Side>,
    },

    /// Edit a line item
    EditItem {
        /// Plan name or id prefix
        plan: String,
        /// Category index
        category: usize,
        /// Item index within the category
        item: usize,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New cost
        #[arg(short, long)]
        cost: Option<String>,
        /// New side attribution
        #[arg(short, long, value_enum)]
        side: Option<Side>,
    },

    /// Remove a line item
    RemoveItem {
        /// Plan name or id prefix
        plan: String,
        /// Category index
        category: usize,
        /// Item index within the category
        item: usize,
    },

    /// Add an empty category
    AddCategory {
        /// Plan name or id prefix
        plan: String,
        /// Category name
        name: String,
    },

    /// Remove a category and all its items
    RemoveCategory {
        /// Plan name or id prefix
        plan: String,
        /// Category index
        category: usize,
    },

    /// Set the contingency percent
    Contingency {
        /// Plan name or id prefix
        plan: String,
        /// Percent buffer applied to the base total
        percent: u8,
    },

    /// Show the bride/groom split (weddings)
    Split {
        /// Plan name or id prefix
        plan: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        BudgetCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            let summary = BudgetSummary::generate(&plan);
            print!("{}", display::format_budget(&plan, &summary));
        }

        BudgetCommands::AddItem {
            plan,
            category,
            label,
            cost,
            side,
        } => {
            let cost = parse_money(&cost)?;
            let item = match side {
                Some(side) => BudgetItem::with_side(label.clone(), cost, side),
                None => BudgetItem::new(label.clone(), cost),
            };

            let updated = service.edit(
                &plan,
                &PlanEdit::AddItem {
                    category_index: category,
                    item,
                },
            )?;

            println!("Added '{}' at {}", label, cost);
            println!("New total: {}", updated.total_cost());
        }

        BudgetCommands::EditItem {
            plan,
            category,
            item,
            label,
            cost,
            side,
        } => {
            let cost = cost.as_deref().map(parse_money).transpose()?;

            let updated = service.edit(
                &plan,
                &PlanEdit::UpdateItem {
                    category_index: category,
                    item_index: item,
                    label,
                    cost,
                    side,
                },
            )?;

            println!("Updated item [{}.{}]", category, item);
            println!("New total: {}", updated.total_cost());
        }

        BudgetCommands::RemoveItem {
            plan,
            category,
            item,
        } => {
            let updated = service.edit(
                &plan,
                &PlanEdit::RemoveItem {
                    category_index: category,
                    item_index: item,
                },
            )?;

            println!("Removed item [{}.{}]", category, item);
            println!("New total: {}", updated.total_cost());
        }

        BudgetCommands::AddCategory { plan, name } => {
            service.edit(&plan, &PlanEdit::AddCategory { name: name.clone() })?;
            println!("Added category '{}'", name);
        }

        BudgetCommands::RemoveCategory { plan, category } => {
            let updated =
                service.edit(&plan, &PlanEdit::RemoveCategory { category_index: category })?;
            println!("Removed category [{}]", category);
            println!("New total: {}", updated.total_cost());
        }

        BudgetCommands::Contingency { plan, percent } => {
            let updated = service.edit(&plan, &PlanEdit::SetContingency { percent })?;
            println!(
                "Contingency set to {}%; total is now {}",
                percent,
                updated.total_cost()
            );
        }

        BudgetCommands::Split { plan } => {
            let plan = service.resolve(&plan)?;
            let split = SideSplit::of(&plan).ok_or_else(|| {
                UtsavError::Validation(
                    "Side split is only available for weddings with splitting enabled".to_string(),
                )
            })?;
            print!("{}", display::format_side_split(&split));
        }
    }

    Ok(())
}
