//! Timeline CLI commands

use clap::Subcommand;

use crate::display;
use crate::edits::{MoveDirection, PlanEdit};
use crate::error::{UtsavError, UtsavResult};
use crate::models::TimelineItem;
use crate::reports::find_conflicts;
use crate::services::PlanService;
use crate::storage::Storage;

use super::parse_time;

/// Timeline subcommands
#[derive(Subcommand)]
pub enum TimelineCommands {
    /// Show the timeline
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Add a timeline slot
    Add {
        /// Plan name or id prefix
        plan: String,
        /// Slot title
        title: String,
        /// Start time (HH:MM)
        #[arg(short, long)]
        time: String,
        /// Event day (1-based)
        #[arg(short, long, default_value = "1")]
        day: u32,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Remove a timeline slot
    Remove {
        /// Plan name or id prefix
        plan: String,
        /// Slot id prefix (see 'timeline show')
        slot: String,
    },

    /// Move a slot one position earlier in the list
    Up {
        /// Plan name or id prefix
        plan: String,
        /// Slot index (see 'timeline show')
        index: usize,
    },

    /// Move a slot one position later in the list
    Down {
        /// Plan name or id prefix
        plan: String,
        /// Slot index
        index: usize,
    },

    /// Detect slots scheduled within 30 minutes of each other
    Conflicts {
        /// Plan name or id prefix
        plan: String,
    },
}

/// Handle a timeline command
pub fn handle_timeline_command(storage: &Storage, cmd: TimelineCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        TimelineCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            print!("{}", display::format_timeline(&plan.timeline));
        }

        TimelineCommands::Add {
            plan,
            title,
            time,
            day,
            note,
        } => {
            let start = parse_time(&time)?;
            let mut item = TimelineItem::new(title.clone(), day, start);
            if let Some(note) = note {
                item.note = note;
            }

            service.edit(&plan, &PlanEdit::AddTimelineItem { item })?;
            println!("Scheduled '{}' on day {} at {}", title, day, start.format("%H:%M"));
        }

        TimelineCommands::Remove { plan, slot } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .timeline
                .iter()
                .find(|i| i.id.matches_prefix(&slot))
                .map(|i| i.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "Timeline slot",
                    identifier: slot.clone(),
                })?;

            service.edit(&plan, &PlanEdit::RemoveTimelineItem { id })?;
            println!("Removed slot");
        }

        TimelineCommands::Up { plan, index } => {
            service.edit(
                &plan,
                &PlanEdit::MoveTimelineItem {
                    index,
                    direction: MoveDirection::Up,
                },
            )?;
            println!("Moved slot [{}] up", index);
        }

        TimelineCommands::Down { plan, index } => {
            service.edit(
                &plan,
                &PlanEdit::MoveTimelineItem {
                    index,
                    direction: MoveDirection::Down,
                },
            )?;
            println!("Moved slot [{}] down", index);
        }

        TimelineCommands::Conflicts { plan } => {
            let plan = service.resolve(&plan)?;
            let conflicts = find_conflicts(&plan.timeline);
            print!("{}", display::format_conflicts(&conflicts));
        }
    }

    Ok(())
}
