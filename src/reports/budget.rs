//! Budget summary report
//!
//! Folds a plan's categories into the financial view the budget screen
//! shows: base and contingency-adjusted totals, per-guest cost, per-category
//! shares, and (for weddings with side splitting) the bride/groom partition.

use crate::models::{Money, Plan, Side};

/// One category's contribution to the budget
#[derive(Debug, Clone)]
pub struct CategoryShare {
    /// Category name
    pub name: String,
    /// Number of line items
    pub item_count: usize,
    /// Sum of item costs (before contingency)
    pub subtotal: Money,
    /// Share of the base cost, 0-100
    pub percent: f64,
}

/// Bride/groom partition of a wedding budget
///
/// Shared costs are halved exactly and the contingency factor is applied to
/// both shares, so the shares always sum to the contingency-adjusted total
/// (up to float rounding).
#[derive(Debug, Clone)]
pub struct SideSplit {
    /// Items attributed to the bride side, before contingency
    pub bride_specific: Money,
    /// Items attributed to the groom side, before contingency
    pub groom_specific: Money,
    /// Shared items, before contingency
    pub shared_total: Money,
    /// Final bride share, contingency included
    pub bride_share: Money,
    /// Final groom share, contingency included
    pub groom_share: Money,
}

impl SideSplit {
    /// Compute the partition for a wedding plan
    ///
    /// Returns `None` for general events and weddings with splitting
    /// disabled.
    pub fn of(plan: &Plan) -> Option<Self> {
        if !plan.split_enabled() {
            return None;
        }

        let mut bride_specific = Money::zero();
        let mut groom_specific = Money::zero();
        let mut shared_total = Money::zero();

        for item in plan.categories.iter().flat_map(|c| &c.items) {
            match item.side {
                Side::Bride => bride_specific += item.cost,
                Side::Groom => groom_specific += item.cost,
                Side::Shared => shared_total += item.cost,
            }
        }

        let factor = plan.contingency_factor();
        let half_shared = shared_total.scaled(0.5);

        Some(Self {
            bride_specific,
            groom_specific,
            shared_total,
            bride_share: (bride_specific + half_shared).scaled(factor),
            groom_share: (groom_specific + half_shared).scaled(factor),
        })
    }
}

/// The complete budget view for one plan
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    /// Sum of all line items
    pub base: Money,
    /// Base with the contingency buffer applied
    pub total: Money,
    /// Contingency percent used
    pub contingency_percent: u8,
    /// Contingency-adjusted cost per guest; non-finite at zero guests
    pub per_guest: f64,
    /// Per-category breakdown, in display order
    pub categories: Vec<CategoryShare>,
    /// Bride/groom partition, when enabled
    pub side_split: Option<SideSplit>,
}

impl BudgetSummary {
    /// Generate the summary for a plan
    pub fn generate(plan: &Plan) -> Self {
        let base = plan.base_cost();
        let base_rupees = base.rupees();

        let categories = plan
            .categories
            .iter()
            .map(|category| {
                let subtotal = category.subtotal();
                let percent = if base_rupees == 0.0 {
                    0.0
                } else {
                    subtotal.rupees() / base_rupees * 100.0
                };
                CategoryShare {
                    name: category.name.clone(),
                    item_count: category.items.len(),
                    subtotal,
                    percent,
                }
            })
            .collect();

        Self {
            base,
            total: plan.total_cost(),
            contingency_percent: plan.contingency_percent,
            per_guest: plan.per_guest_cost(),
            categories,
            side_split: SideSplit::of(plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{BudgetCategory, BudgetItem, CityTier, EventType, PlanKind, Quality};

    fn wedding_plan(guest_count: u32, contingency: u8) -> Plan {
        create_plan(NewPlanParams {
            name: "Test Wedding".to_string(),
            city: "Mumbai".to_string(),
            event_type: EventType::Wedding,
            tier: Some(CityTier::Metro),
            quality: Quality::Standard,
            guest_count,
            contingency_percent: contingency,
        })
    }

    #[test]
    fn test_total_matches_base_times_factor() {
        let plan = wedding_plan(100, 10);
        let summary = BudgetSummary::generate(&plan);

        assert_eq!(
            summary.total.rupees(),
            summary.base.rupees() * 1.1,
            "contingency applied once to the full base"
        );
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let plan = wedding_plan(150, 10);
        let summary = BudgetSummary::generate(&plan);

        assert_eq!(summary.categories.len(), 5);
        let percent_sum: f64 = summary.categories.iter().map(|c| c.percent).sum();
        assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_budget_has_zero_shares() {
        let mut plan = wedding_plan(100, 10);
        plan.categories = vec![BudgetCategory::new("Empty")];

        let summary = BudgetSummary::generate(&plan);
        assert!(summary.base.is_zero());
        assert_eq!(summary.categories[0].percent, 0.0);
    }

    #[test]
    fn test_per_guest_non_finite_at_zero_guests() {
        let plan = wedding_plan(0, 10);
        let summary = BudgetSummary::generate(&plan);
        assert!(!summary.per_guest.is_finite());
    }

    #[test]
    fn test_side_split_shares_sum_to_total() {
        let plan = wedding_plan(120, 12);
        let summary = BudgetSummary::generate(&plan);

        let split = summary.side_split.expect("wedding has a split");
        let share_sum = split.bride_share + split.groom_share;
        assert!(
            share_sum.approx_eq(summary.total, 1e-6),
            "bride {} + groom {} != total {}",
            split.bride_share,
            split.groom_share,
            summary.total
        );
    }

    #[test]
    fn test_side_split_arbitrary_distribution() {
        // The invariant holds for any side distribution, not just the catalog's
        let mut plan = wedding_plan(80, 7);
        let mut extra = BudgetCategory::new("Extras");
        extra.items.push(BudgetItem::with_side(
            "Bride entry float",
            Money::new(13_337.0),
            crate::models::Side::Bride,
        ));
        extra.items.push(BudgetItem::with_side(
            "Groom entry horse",
            Money::new(9_999.5),
            crate::models::Side::Groom,
        ));
        extra
            .items
            .push(BudgetItem::new("Cold fireworks", Money::new(21_000.25)));
        plan.categories.push(extra);

        let split = SideSplit::of(&plan).unwrap();
        assert!((split.bride_share + split.groom_share).approx_eq(plan.total_cost(), 1e-6));
    }

    #[test]
    fn test_no_split_for_general_events() {
        let plan = create_plan(NewPlanParams {
            name: "Office Party".to_string(),
            city: "Pune".to_string(),
            event_type: EventType::Corporate,
            tier: None,
            quality: Quality::Standard,
            guest_count: 60,
            contingency_percent: 5,
        });

        assert!(SideSplit::of(&plan).is_none());
    }

    #[test]
    fn test_no_split_when_disabled() {
        let mut plan = wedding_plan(100, 10);
        if let PlanKind::Wedding { split_sides, .. } = &mut plan.kind {
            *split_sides = false;
        }
        assert!(SideSplit::of(&plan).is_none());
    }
}
