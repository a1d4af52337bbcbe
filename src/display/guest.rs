//! Guest and gifting display formatting

use crate::models::Rsvp;
use crate::reports::GuestReport;

/// Format the guest view for `utsav guest show`
pub fn format_guest_report(report: &GuestReport, rsvps: &[Rsvp]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Guests: {}\n", report.guest_count));
    if report.counts_diverged() {
        output.push_str(&format!(
            "  Note: category breakdown sums to {} - update a category to re-sync\n",
            report.stats_total
        ));
    }
    output.push_str(&format!(
        "Tables needed (8 seats): {}\n",
        report.tables_needed
    ));

    output.push_str("\nGift budget:\n");
    output.push_str(&format!(
        "  {:<10} {:>8} {:>12} {:>14}\n",
        "Category", "Guests", "Per gift", "Subtotal"
    ));
    for line in &report.lines {
        output.push_str(&format!(
            "  {:<10} {:>8} {:>12} {:>14}\n",
            line.category.to_string(),
            line.count,
            line.per_gift.to_string(),
            line.subtotal.to_string()
        ));
    }
    output.push_str(&format!(
        "  {:<10} {:>8} {:>12} {:>14}\n",
        "Total", "", "", report.gift_budget.to_string()
    ));

    if !rsvps.is_empty() {
        output.push_str(&format!(
            "\nRSVPs: {} attending, {} declined, {} pending (heads)\n",
            report.attending, report.declined, report.pending
        ));
        for rsvp in rsvps {
            output.push_str(&format!(
                "  {}  {:<24} x{:<3} {:<10} {}\n",
                rsvp.id,
                rsvp.guest_name,
                rsvp.party_size,
                rsvp.status.to_string(),
                rsvp.phone
            ));
        }
    }

    output
}
