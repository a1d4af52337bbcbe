//! Vendor display formatting

use crate::models::{Vendor, VendorPhase};

/// Format the vendor list for `utsav vendor list`
pub fn format_vendor_list(vendors: &[Vendor], guest_count: u32) -> String {
    if vendors.is_empty() {
        return "No vendors yet.\n\nRun 'utsav vendor add' to add one.".to_string();
    }

    let name_width = vendors.iter().map(|v| v.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<12}  {:>14}  {:>14}  {:>7}  {}\n",
        "Name",
        "Category",
        "Budgeted",
        "Paid",
        "Tasks",
        "ID",
        width = name_width
    ));

    for vendor in vendors {
        let stale = if vendor.is_stale(guest_count) { " *stale" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:<12}  {:>14}  {:>14}  {:>3}/{:<3}  {}{}\n",
            vendor.name,
            vendor.category.to_string(),
            vendor.budgeted.to_string(),
            vendor.paid.to_string(),
            vendor.tasks_done(),
            vendor.tasks.len(),
            vendor.id,
            stale,
            width = name_width
        ));
    }

    if vendors.iter().any(|v| v.is_stale(guest_count)) {
        output.push_str(
            "\n* guest count changed since confirmation - run 'utsav vendor sync' after re-confirming\n",
        );
    }

    output
}

/// Format one vendor with its task checklist for `utsav vendor show`
pub fn format_vendor_details(vendor: &Vendor, guest_count: u32) -> String {
    let mut output = String::new();

    output.push_str(&format!("Vendor: {}\n", vendor.name));
    output.push_str(&format!("  ID:       {}\n", vendor.id));
    output.push_str(&format!("  Category: {}\n", vendor.category));
    if !vendor.contact.is_empty() {
        output.push_str(&format!("  Contact:  {}\n", vendor.contact));
    }
    output.push_str(&format!("  Budgeted: {}\n", vendor.budgeted));
    output.push_str(&format!("  Paid:     {}\n", vendor.paid));
    output.push_str(&format!("  Due:      {}\n", vendor.balance_due()));
    if !vendor.notes.is_empty() {
        output.push_str(&format!("  Notes:    {}\n", vendor.notes));
    }
    if vendor.is_stale(guest_count) {
        output.push_str(&format!(
            "  Stale:    confirmed at {} guests, plan now has {}\n",
            vendor.guest_count_synced, guest_count
        ));
    }

    for phase in VendorPhase::all() {
        let tasks: Vec<_> = vendor.tasks.iter().filter(|t| t.phase == *phase).collect();
        if tasks.is_empty() {
            continue;
        }
        output.push_str(&format!("\n  {}:\n", phase));
        for task in tasks {
            let mark = if task.done { "x" } else { " " };
            output.push_str(&format!("    [{}] {}  ({})\n", mark, task.label, task.id));
        }
    }

    output
}
