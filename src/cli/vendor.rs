//! Vendor CLI commands

use clap::Subcommand;

use crate::display;
use crate::edits::{PlanEdit, VendorUpdate};
use crate::error::{UtsavError, UtsavResult};
use crate::models::{Plan, Vendor, VendorCategory};
use crate::services::PlanService;
use crate::storage::Storage;

use super::parse_money;

/// Vendor subcommands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// Add a vendor (with its default task checklist)
    Add {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name
        name: String,
        /// Vendor category
        #[arg(short, long, value_enum)]
        category: VendorCategory,
        /// Contact phone/email
        #[arg(long)]
        contact: Option<String>,
        /// Budgeted amount
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// List vendors
    List {
        /// Plan name or id prefix
        plan: String,
    },

    /// Show one vendor and its task checklist
    Show {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name or id prefix
        vendor: String,
    },

    /// Update a vendor's fields
    Update {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name or id prefix
        vendor: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New contact
        #[arg(long)]
        contact: Option<String>,
        /// New category
        #[arg(long, value_enum)]
        category: Option<VendorCategory>,
        /// New budgeted amount
        #[arg(long)]
        budget: Option<String>,
        /// Amount paid so far
        #[arg(long)]
        paid: Option<String>,
        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Toggle a vendor task done/undone
    Check {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name or id prefix
        vendor: String,
        /// Task id prefix (see 'vendor show')
        task: String,
    },

    /// Re-confirm a vendor at the plan's current guest count
    Sync {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name or id prefix
        vendor: String,
    },

    /// Remove a vendor
    Remove {
        /// Plan name or id prefix
        plan: String,
        /// Vendor name or id prefix
        vendor: String,
    },
}

/// Resolve a vendor within a plan by name (case-insensitive) or id prefix
fn resolve_vendor(plan: &Plan, reference: &str) -> UtsavResult<Vendor> {
    plan.vendors
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(reference) || v.id.matches_prefix(reference))
        .cloned()
        .ok_or_else(|| UtsavError::vendor_not_found(reference))
}

/// Handle a vendor command
pub fn handle_vendor_command(storage: &Storage, cmd: VendorCommands) -> UtsavResult<()> {
    let service = PlanService::new(storage);

    match cmd {
        VendorCommands::Add {
            plan,
            name,
            category,
            contact,
            budget,
        } => {
            let resolved = service.resolve(&plan)?;

            let mut vendor = Vendor::new(name.clone(), category, resolved.guest_count);
            if let Some(contact) = contact {
                vendor.contact = contact;
            }
            if let Some(budget) = budget {
                vendor.budgeted = parse_money(&budget)?;
            }
            let vendor_id = vendor.id;

            service.edit(&plan, &PlanEdit::AddVendor { vendor })?;
            println!("Added vendor '{}' ({})", name, vendor_id);
        }

        VendorCommands::List { plan } => {
            let plan = service.resolve(&plan)?;
            print!(
                "{}",
                display::format_vendor_list(&plan.vendors, plan.guest_count)
            );
        }

        VendorCommands::Show { plan, vendor } => {
            let plan = service.resolve(&plan)?;
            let vendor = resolve_vendor(&plan, &vendor)?;
            print!(
                "{}",
                display::format_vendor_details(&vendor, plan.guest_count)
            );
        }

        VendorCommands::Update {
            plan,
            vendor,
            name,
            contact,
            category,
            budget,
            paid,
            notes,
        } => {
            let resolved = service.resolve(&plan)?;
            let id = resolve_vendor(&resolved, &vendor)?.id;

            let update = VendorUpdate {
                name,
                contact,
                category,
                budgeted: budget.as_deref().map(parse_money).transpose()?,
                paid: paid.as_deref().map(parse_money).transpose()?,
                notes,
            };

            let updated = service.edit(&plan, &PlanEdit::UpdateVendor { id, update })?;
            if let Some(vendor) = updated.vendor(id) {
                println!(
                    "Updated '{}': budgeted {}, paid {}, due {}",
                    vendor.name,
                    vendor.budgeted,
                    vendor.paid,
                    vendor.balance_due()
                );
            }
        }

        VendorCommands::Check { plan, vendor, task } => {
            let resolved = service.resolve(&plan)?;
            let vendor_id = resolve_vendor(&resolved, &vendor)?.id;

            let task_id = resolved
                .vendor(vendor_id)
                .and_then(|v| v.tasks.iter().find(|t| t.id.matches_prefix(&task)))
                .map(|t| t.id)
                .ok_or_else(|| UtsavError::NotFound {
                    entity_type: "Vendor task",
                    identifier: task.clone(),
                })?;

            let updated = service.edit(
                &plan,
                &PlanEdit::ToggleVendorTask { vendor_id, task_id },
            )?;
            if let Some(task) = updated
                .vendor(vendor_id)
                .and_then(|v| v.tasks.iter().find(|t| t.id == task_id))
            {
                println!(
                    "'{}' is now {}",
                    task.label,
                    if task.done { "done" } else { "open" }
                );
            }
        }

        VendorCommands::Sync { plan, vendor } => {
            let resolved = service.resolve(&plan)?;
            let id = resolve_vendor(&resolved, &vendor)?.id;

            let updated = service.edit(&plan, &PlanEdit::SyncVendorGuestCount { id })?;
            println!(
                "Re-confirmed at {} guests",
                updated.guest_count
            );
        }

        VendorCommands::Remove { plan, vendor } => {
            let resolved = service.resolve(&plan)?;
            let id = resolve_vendor(&resolved, &vendor)?.id;

            service.edit(&plan, &PlanEdit::RemoveVendor { id })?;
            println!("Removed vendor");
        }
    }

    Ok(())
}
