//! Checklist CLI commands

use clap::Subcommand;

use crate::display;
use crate::edits::PlanEdit;
use crate::error::{UtsavError, UtsavResult};
use crate::models::{ChecklistItem, TaskId};
use crate::services::PlanService;
use crate::storage::Storage;

/// Checklist subcommands
#[derive(Subcommand)]
pub enum ChecklistCommands {
    /// Show the checklist
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Add a checklist item
    Add {
        /// Plan name or id prefix
        plan: String,
        /// What needs doing
        title: String,
    },

    /// Toggle an item done/undone
    Toggle {
        /// Plan name or id prefix
        plan: String,
        /// Item id prefix (see 'checklist show')
        item: String,
    },

    /// Remove an item
    Remove {
        /// Plan name or id prefix
        plan: String,
        /// Item id prefix
        item: String,
    },
}

/// Resolve a checklist item id within a plan
fn resolve_item(storage: &Storage, plan: &str, reference: &str) -> UtsavResult<TaskId> {
    let plan = PlanService::new(storage).resolve(plan)?;
    plan.checklist
        .iter()
        .find(|i| i.id.matches_prefix(reference))
        .map(|i| i.id)
        .ok_or_else(|| UtsavError::NotFound {
            entity_type: "Checklist item",
            identifier: reference.to_string(),
        })
}

/// Handle a checklist command
pub fn handle_checklist_command(storage: &Storage, cmd: ChecklistCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        ChecklistCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            print!("{}", display::format_checklist(&plan.checklist));
        }

        ChecklistCommands::Add { plan, title } => {
            let item = ChecklistItem::new(title.clone());
            service.edit(&plan, &PlanEdit::AddChecklistItem { item })?;
            println!("Added '{}'", title);
        }

        ChecklistCommands::Toggle { plan, item } => {
            let id = resolve_item(storage, &plan, &item)?;
            let updated = service.edit(&plan, &PlanEdit::ToggleChecklistItem { id })?;

            if let Some(toggled) = updated.checklist.iter().find(|i| i.id == id) {
                println!(
                    "'{}' is now {}",
                    toggled.title,
                    if toggled.done { "done" } else { "open" }
                );
            }
        }

        ChecklistCommands::Remove { plan, item } => {
            let id = resolve_item(storage, &plan, &item)?;
            service.edit(&plan, &PlanEdit::RemoveChecklistItem { id })?;
            println!("Removed item");
        }
    }

    Ok(())
}
