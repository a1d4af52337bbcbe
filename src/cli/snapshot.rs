//! Snapshot CLI commands

use clap::Subcommand;

use crate::display;
use crate::edits::PlanEdit;
use crate::error::{UtsavError, UtsavResult};
use crate::services::PlanService;
use crate::storage::Storage;

/// Snapshot subcommands
#[derive(Subcommand)]
pub enum SnapshotCommands {
    /// Capture a snapshot of the plan's current state
    Take {
        /// Plan name or id prefix
        plan: String,
        /// Snapshot label
        #[arg(default_value = "manual snapshot")]
        label: String,
    },

    /// List snapshots, newest first
    List {
        /// Plan name or id prefix
        plan: String,
    },

    /// Restore the plan to a snapshot's state (history is kept)
    Restore {
        /// Plan name or id prefix
        plan: String,
        /// Snapshot id prefix (see 'snapshot list')
        snapshot: String,
    },
}

/// Handle a snapshot command
pub fn handle_snapshot_command(storage: &Storage, cmd: SnapshotCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        SnapshotCommands::Take { plan, label } => {
            let updated = service.edit(&plan, &PlanEdit::TakeSnapshot { label: label.clone() })?;
            let snapshot = &updated.snapshots[0];
            println!(
                "Captured '{}' ({}) at {}",
                label, snapshot.id, snapshot.total_budget
            );
        }

        SnapshotCommands::List { plan } => {
            let plan = service.resolve(&plan)?;
            print!("{}", display::format_snapshot_list(&plan.snapshots));
        }

        SnapshotCommands::Restore { plan, snapshot } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .snapshots
                .iter()
                .find(|s| s.id.matches_prefix(&snapshot))
                .map(|s| s.id)
                .ok_or_else(|| UtsavError::snapshot_not_found(snapshot.as_str()))?;

            let restored = service.edit(&plan, &PlanEdit::RestoreSnapshot { id })?;
            println!(
                "Restored '{}'; total is now {}",
                restored.name,
                restored.total_cost()
            );
        }
    }

    Ok(())
}
