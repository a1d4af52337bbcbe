//! Guest and gifting report
//!
//! Derives the guest-driven metrics: per-category gift spending, the total
//! gifting budget, the round-table estimate, and RSVP response tallies.

use crate::models::{tables_needed, GuestCategory, Money, Plan, RsvpStatus};

/// Gift spending for one guest category
#[derive(Debug, Clone)]
pub struct GiftLine {
    pub category: GuestCategory,
    pub count: u32,
    pub per_gift: Money,
    pub subtotal: Money,
}

/// The guest screen's derived view
#[derive(Debug, Clone)]
pub struct GuestReport {
    /// The plan's headline guest count
    pub guest_count: u32,
    /// Sum of the per-category breakdown (may differ from `guest_count`
    /// until the next breakdown edit)
    pub stats_total: u32,
    /// Per-category gift spending
    pub lines: Vec<GiftLine>,
    /// Total gifting budget
    pub gift_budget: Money,
    /// 8-seat round tables needed for the headline count
    pub tables_needed: u32,
    /// RSVP heads confirmed attending (party sizes summed)
    pub attending: u32,
    /// RSVP heads declined
    pub declined: u32,
    /// RSVP heads still pending
    pub pending: u32,
}

impl GuestReport {
    /// Generate the report for a plan
    pub fn generate(plan: &Plan) -> Self {
        let lines: Vec<GiftLine> = GuestCategory::all()
            .iter()
            .map(|&category| {
                let count = plan.guest_stats.get(category);
                let per_gift = plan.gift_config.per_gift(category);
                GiftLine {
                    category,
                    count,
                    per_gift,
                    subtotal: per_gift * f64::from(count),
                }
            })
            .collect();

        let mut attending = 0;
        let mut declined = 0;
        let mut pending = 0;
        for rsvp in &plan.rsvps {
            match rsvp.status {
                RsvpStatus::Attending => attending += rsvp.party_size,
                RsvpStatus::Declined => declined += rsvp.party_size,
                RsvpStatus::Pending => pending += rsvp.party_size,
            }
        }

        Self {
            guest_count: plan.guest_count,
            stats_total: plan.guest_stats.total(),
            lines,
            gift_budget: plan.gift_config.budget_for(&plan.guest_stats),
            tables_needed: tables_needed(plan.guest_count),
            attending,
            declined,
            pending,
        }
    }

    /// Whether the breakdown and the headline count currently disagree
    pub fn counts_diverged(&self) -> bool {
        self.guest_count != self.stats_total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::{apply, PlanEdit};
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{EventType, GuestStats, Quality, Rsvp, RsvpStatus};

    fn test_plan() -> Plan {
        create_plan(NewPlanParams {
            name: "Test Wedding".to_string(),
            city: "Jaipur".to_string(),
            event_type: EventType::Wedding,
            tier: None,
            quality: Quality::Standard,
            guest_count: 100,
            contingency_percent: 10,
        })
    }

    #[test]
    fn test_worked_example() {
        // GuestStats{50,30,15,5} x GiftConfig{500,300,250,1500} => 45250, 13 tables
        let mut plan = test_plan();
        plan.guest_stats = GuestStats {
            family: 50,
            friends: 30,
            office: 15,
            vip: 5,
        };

        let report = GuestReport::generate(&plan);
        assert_eq!(report.gift_budget.rupees(), 45_250.0);
        assert_eq!(report.tables_needed, 13);
        assert_eq!(report.lines.len(), 4);
        assert_eq!(report.lines[0].subtotal.rupees(), 25_000.0); // family
        assert_eq!(report.lines[3].subtotal.rupees(), 7_500.0); // vip
    }

    #[test]
    fn test_divergence_flag() {
        let plan = test_plan();
        let report = GuestReport::generate(&plan);
        assert!(!report.counts_diverged());

        // Slider edit changes the count without touching the breakdown
        let plan = apply(&plan, &PlanEdit::SetGuestCount { count: 140 });
        let report = GuestReport::generate(&plan);
        assert!(report.counts_diverged());
        assert_eq!(report.guest_count, 140);
        assert_eq!(report.stats_total, 100);
    }

    #[test]
    fn test_rsvp_tallies_sum_party_sizes() {
        let mut plan = test_plan();

        let mut attending = Rsvp::new("Mehta Family", 4);
        attending.status = RsvpStatus::Attending;
        let mut declined = Rsvp::new("Rao Family", 2);
        declined.status = RsvpStatus::Declined;
        let pending = Rsvp::new("Iyer Family", 3);

        plan.rsvps = vec![attending, declined, pending];

        let report = GuestReport::generate(&plan);
        assert_eq!(report.attending, 4);
        assert_eq!(report.declined, 2);
        assert_eq!(report.pending, 3);
    }

    #[test]
    fn test_zero_guests() {
        let mut plan = test_plan();
        plan.guest_count = 0;
        plan.guest_stats = GuestStats::default();

        let report = GuestReport::generate(&plan);
        assert!(report.gift_budget.is_zero());
        assert_eq!(report.tables_needed, 0);
    }
}
