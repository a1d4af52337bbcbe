//! Guest CLI commands
//!
//! `guest set` edits one category of the breakdown and re-derives the plan's
//! guest count; `guest count` sets the count directly and leaves the
//! breakdown alone. The two can disagree until the next `guest set` - that
//! asymmetry is deliberate.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display;
use crate::edits::PlanEdit;
use crate::error::{UtsavError, UtsavResult};
use crate::models::{GuestCategory, Rsvp, RsvpStatus};
use crate::reports::GuestReport;
use crate::services::{import_guest_csv, PlanService};
use crate::storage::Storage;

use super::parse_money;

/// Guest subcommands
#[derive(Subcommand)]
pub enum GuestCommands {
    /// Show guest breakdown, gift budget, tables, and RSVPs
    Show {
        /// Plan name or id prefix
        plan: String,
    },

    /// Set one guest category count (re-syncs the total)
    Set {
        /// Plan name or id prefix
        plan: String,
        /// Guest category
        #[arg(value_enum)]
        category: GuestCategory,
        /// New count
        count: u32,
    },

    /// Set the total guest count directly (breakdown untouched)
    Count {
        /// Plan name or id prefix
        plan: String,
        /// New total
        count: u32,
    },

    /// Set the per-gift cost for a category
    GiftCost {
        /// Plan name or id prefix
        plan: String,
        /// Guest category
        #[arg(value_enum)]
        category: GuestCategory,
        /// Cost per gift
        cost: String,
    },

    /// Add a single RSVP
    Rsvp {
        /// Plan name or id prefix
        plan: String,
        /// Guest or household name
        name: String,
        /// People covered by this response
        #[arg(short, long, default_value = "1")]
        party: u32,
        /// Contact phone
        #[arg(long)]
        phone: Option<String>,
    },

    /// Update an RSVP's response
    RsvpStatus {
        /// Plan name or id prefix
        plan: String,
        /// RSVP id prefix
        rsvp: String,
        /// New status
        #[arg(value_enum)]
        status: RsvpStatus,
    },

    /// Remove an RSVP
    RsvpRemove {
        /// Plan name or id prefix
        plan: String,
        /// RSVP id prefix
        rsvp: String,
    },

    /// Import a guest list CSV into RSVPs
    Import {
        /// Plan name or id prefix
        plan: String,
        /// Path to CSV file (columns: name, phone, party_size, status)
        file: PathBuf,
    },
}

/// Handle a guest command
pub fn handle_guest_command(storage: &Storage, cmd: GuestCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        GuestCommands::Show { plan } => {
            let plan = service.resolve(&plan)?;
            let report = GuestReport::generate(&plan);
            print!("{}", display::format_guest_report(&report, &plan.rsvps));
        }

        GuestCommands::Set {
            plan,
            category,
            count,
        } => {
            let updated = service.edit(&plan, &PlanEdit::SetGuestCategory { category, count })?;
            println!(
                "{} guests set to {}; total is now {}",
                category, count, updated.guest_count
            );
        }

        GuestCommands::Count { plan, count } => {
            let updated = service.edit(&plan, &PlanEdit::SetGuestCount { count })?;
            println!("Guest count set to {}", updated.guest_count);
            if updated.guest_stats.total() != updated.guest_count {
                println!(
                    "Note: category breakdown still sums to {}",
                    updated.guest_stats.total()
                );
            }
        }

        GuestCommands::GiftCost {
            plan,
            category,
            cost,
        } => {
            let per_gift = parse_money(&cost)?;
            let updated = service.edit(&plan, &PlanEdit::SetGiftCost { category, per_gift })?;
            println!(
                "{} gift cost set to {}; gift budget is now {}",
                category,
                per_gift,
                updated.gift_config.budget_for(&updated.guest_stats)
            );
        }

        GuestCommands::Rsvp { plan, name, party, phone } => {
            let mut rsvp = Rsvp::new(name.clone(), party);
            if let Some(phone) = phone {
                rsvp.phone = phone;
            }
            service.edit(&plan, &PlanEdit::AddRsvp { rsvp })?;
            println!("Added RSVP for '{}' ({} people)", name, party);
        }

        GuestCommands::RsvpStatus { plan, rsvp, status } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .rsvps
                .iter()
                .find(|r| r.id.matches_prefix(&rsvp))
                .map(|r| r.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "RSVP",
                    identifier: rsvp.clone(),
                })?;

            service.edit(&plan, &PlanEdit::SetRsvpStatus { id, status })?;
            println!("RSVP marked {}", status);
        }

        GuestCommands::RsvpRemove { plan, rsvp } => {
            let resolved = service.resolve(&plan)?;
            let id = resolved
                .rsvps
                .iter()
                .find(|r| r.id.matches_prefix(&rsvp))
                .map(|r| r.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "RSVP",
                    identifier: rsvp.clone(),
                })?;

            service.edit(&plan, &PlanEdit::RemoveRsvp { id })?;
            println!("Removed RSVP");
        }

        GuestCommands::Import { plan, file } => {
            let reader = File::open(&file)
                .map_err(|e| UtsavError::Import(format!("Cannot open {}: {}", file.display(), e)))?;

            let summary = import_guest_csv(storage, &plan, reader)?;

            println!("Imported {} RSVPs", summary.imported);
            for (row, reason) in &summary.skipped {
                println!("  Skipped row {}: {}", row, reason);
            }
        }
    }

    Ok(())
}
