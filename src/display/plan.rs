//! Plan display formatting

use crate::models::{Plan, Snapshot};

/// Format the plan list for `utsav plan list`
pub fn format_plan_list(plans: &[Plan]) -> String {
    if plans.is_empty() {
        return "No plans found.\n\nRun 'utsav plan new' to create one.".to_string();
    }

    let name_width = plans.iter().map(|p| p.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<12}  {:<10}  {:>6}  {:>14}  {}\n",
        "Name",
        "Type",
        "City",
        "Guests",
        "Total",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<12}  {:-<10}  {:->6}  {:->14}  {:-<13}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for plan in plans {
        output.push_str(&format!(
            "{:<width$}  {:<12}  {:<10}  {:>6}  {:>14}  {}\n",
            plan.name,
            plan.event_type().to_string(),
            plan.city,
            plan.guest_count,
            plan.total_cost().to_string(),
            plan.id,
            width = name_width
        ));
    }

    output
}

/// Format full plan details for `utsav plan show`
pub fn format_plan_details(plan: &Plan) -> String {
    let mut output = String::new();

    output.push_str(&format!("Plan: {}\n", plan.name));
    output.push_str(&format!("  ID:          {}\n", plan.id));
    output.push_str(&format!("  Type:        {}\n", plan.event_type()));
    output.push_str(&format!("  City:        {} ({})\n", plan.city, plan.tier));
    output.push_str(&format!("  Quality:     {}\n", plan.quality));
    output.push_str(&format!("  Guests:      {}\n", plan.guest_count));
    output.push_str(&format!("  Contingency: {}%\n", plan.contingency_percent));

    match &plan.kind {
        crate::models::PlanKind::Wedding {
            days,
            functions,
            catering_per_plate,
            split_sides,
        } => {
            output.push_str(&format!("  Days:        {}\n", days));
            output.push_str(&format!("  Functions:   {}\n", functions.join(", ")));
            output.push_str(&format!("  Per plate:   {}\n", catering_per_plate));
            output.push_str(&format!(
                "  Side split:  {}\n",
                if *split_sides { "enabled" } else { "disabled" }
            ));
        }
        crate::models::PlanKind::General {
            duration_hours,
            outdoor,
            ..
        } => {
            output.push_str(&format!("  Duration:    {} hours\n", duration_hours));
            output.push_str(&format!(
                "  Venue:       {}\n",
                if *outdoor { "outdoor" } else { "indoor" }
            ));
        }
    }

    output.push('\n');
    output.push_str(&format!("  Base cost:   {}\n", plan.base_cost()));
    output.push_str(&format!("  Total:       {}\n", plan.total_cost()));
    output.push_str(&format!(
        "  Checklist:   {}/{} done\n",
        plan.checklist.iter().filter(|i| i.done).count(),
        plan.checklist.len()
    ));
    output.push_str(&format!("  Vendors:     {}\n", plan.vendors.len()));
    output.push_str(&format!("  Snapshots:   {}\n", plan.snapshots.len()));
    output.push_str(&format!(
        "\n  Created: {}\n",
        plan.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format the snapshot history for `utsav snapshot list`
pub fn format_snapshot_list(snapshots: &[Snapshot]) -> String {
    if snapshots.is_empty() {
        return "No snapshots yet.\n\nRun 'utsav snapshot take' to capture one.".to_string();
    }

    let mut output = String::new();
    output.push_str("Snapshots (newest first):\n");

    for snapshot in snapshots {
        output.push_str(&format!(
            "  {}  {}  {:>14}  {}\n",
            snapshot.id,
            snapshot.created_at.format("%Y-%m-%d %H:%M"),
            snapshot.total_budget.to_string(),
            snapshot.label
        ));
    }

    output
}
