//! Budget display formatting
//!
//! Items are shown with their (category, item) indices because the edit
//! commands address line items positionally.

use crate::models::Plan;
use crate::reports::{BudgetSummary, SideSplit};

/// Format the full budget view for `utsav budget show`
pub fn format_budget(plan: &Plan, summary: &BudgetSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", plan.name));
    output.push_str(&"=".repeat(72));
    output.push('\n');

    for (ci, category) in plan.categories.iter().enumerate() {
        let share = &summary.categories[ci];
        output.push_str(&format!(
            "\n[{}] {} ({:.1}%)\n",
            ci, category.name, share.percent
        ));

        if category.items.is_empty() {
            output.push_str("      (no items)\n");
        }

        for (ii, item) in category.items.iter().enumerate() {
            let side = if plan.split_enabled() {
                format!("  [{}]", item.side)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  [{}.{}] {:<38} {:>14}{}\n",
                ci,
                ii,
                item.label,
                item.cost.to_string(),
                side
            ));
        }

        output.push_str(&format!(
            "        {:<38} {:>14}\n",
            "Subtotal:",
            share.subtotal.to_string()
        ));
    }

    output.push('\n');
    output.push_str(&"=".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:<46} {:>14}\n",
        "Base:",
        summary.base.to_string()
    ));
    output.push_str(&format!(
        "{:<46} {:>14}\n",
        format!("Total (+{}% contingency):", summary.contingency_percent),
        summary.total.to_string()
    ));

    if summary.per_guest.is_finite() {
        output.push_str(&format!(
            "{:<46} {:>14}\n",
            "Per guest:",
            crate::models::Money::new(summary.per_guest).to_string()
        ));
    } else {
        output.push_str(&format!("{:<46} {:>14}\n", "Per guest:", "-"));
    }

    output
}

/// Format the bride/groom split for `utsav budget split`
pub fn format_side_split(split: &SideSplit) -> String {
    let mut output = String::new();

    output.push_str("Bride/Groom Split\n");
    output.push_str(&"-".repeat(44));
    output.push('\n');
    output.push_str(&format!(
        "{:<28} {:>14}\n",
        "Bride-specific items:",
        split.bride_specific.to_string()
    ));
    output.push_str(&format!(
        "{:<28} {:>14}\n",
        "Groom-specific items:",
        split.groom_specific.to_string()
    ));
    output.push_str(&format!(
        "{:<28} {:>14}\n",
        "Shared items:",
        split.shared_total.to_string()
    ));
    output.push_str(&"-".repeat(44));
    output.push('\n');
    output.push_str(&format!(
        "{:<28} {:>14}\n",
        "Bride share:",
        split.bride_share.to_string()
    ));
    output.push_str(&format!(
        "{:<28} {:>14}\n",
        "Groom share:",
        split.groom_share.to_string()
    ));

    output
}
