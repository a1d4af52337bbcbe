//! Plan generator
//!
//! Materializes a new plan's starting budget, checklist, and guest breakdown
//! from the static catalogs below. Each catalog item has a fixed base cost
//! plus flags for how it scales:
//!
//! ```text
//! cost = base * quality_multiplier
//!             * (tier_multiplier if tier_scaled)
//!             * (guest_count     if per_guest)
//! ```
//!
//! Venue-bound items scale with the city tier; per-head items (catering,
//! favors) scale with the guest count but cost the same per plate in any
//! city. Generation is deterministic apart from freshly minted item ids and
//! has no side effects.

use crate::models::{
    BudgetCategory, BudgetItem, ChecklistItem, CityTier, EventType, GuestStats, Money, Plan,
    PlanKind, Quality, Side,
};

/// One line-item template in a catalog
struct ItemTemplate {
    label: &'static str,
    base: f64,
    tier_scaled: bool,
    per_guest: bool,
    side: Option<Side>,
}

impl ItemTemplate {
    const fn venue(label: &'static str, base: f64) -> Self {
        Self {
            label,
            base,
            tier_scaled: true,
            per_guest: false,
            side: None,
        }
    }

    const fn per_head(label: &'static str, base: f64) -> Self {
        Self {
            label,
            base,
            tier_scaled: false,
            per_guest: true,
            side: None,
        }
    }

    const fn flat(label: &'static str, base: f64) -> Self {
        Self {
            label,
            base,
            tier_scaled: false,
            per_guest: false,
            side: None,
        }
    }

    const fn flat_side(label: &'static str, base: f64, side: Side) -> Self {
        Self {
            label,
            base,
            tier_scaled: false,
            per_guest: false,
            side: Some(side),
        }
    }
}

/// One category template in a catalog
struct CategoryTemplate {
    name: &'static str,
    items: &'static [ItemTemplate],
}

/// The five wedding budget categories
const WEDDING_CATALOG: &[CategoryTemplate] = &[
    CategoryTemplate {
        name: "Venue & Infrastructure",
        items: &[
            ItemTemplate::venue("Venue Rental", 100_000.0),
            ItemTemplate::venue("Tent & Lighting", 45_000.0),
            ItemTemplate::venue("Mandap & Stage Decor", 35_000.0),
            ItemTemplate::venue("Power Backup", 12_000.0),
        ],
    },
    CategoryTemplate {
        name: "Food & Catering",
        items: &[
            ItemTemplate::per_head("Main Catering", 1200.0),
            ItemTemplate::per_head("Welcome Drinks & Chaat Counter", 250.0),
            ItemTemplate::per_head("Dessert & Paan Counter", 150.0),
        ],
    },
    CategoryTemplate {
        name: "Photography & Makeup",
        items: &[
            ItemTemplate::flat("Photography & Videography", 75_000.0),
            ItemTemplate::flat_side("Bridal Makeup & Mehendi", 25_000.0, Side::Bride),
            ItemTemplate::flat_side("Groom Styling", 8_000.0, Side::Groom),
        ],
    },
    CategoryTemplate {
        name: "Clothing & Jewelry",
        items: &[
            ItemTemplate::flat_side("Bridal Lehenga", 60_000.0, Side::Bride),
            ItemTemplate::flat_side("Groom Sherwani", 25_000.0, Side::Groom),
            ItemTemplate::flat_side("Jewelry & Accessories", 80_000.0, Side::Bride),
            ItemTemplate::flat("Family Outfits", 40_000.0),
        ],
    },
    CategoryTemplate {
        name: "Entertainment",
        items: &[
            ItemTemplate::flat("DJ & Sound", 30_000.0),
            ItemTemplate::flat("Sangeet Choreographer", 20_000.0),
            ItemTemplate::flat("Dhol Players & Baraat Band", 15_000.0),
        ],
    },
];

/// The two general-event budget categories
const EVENT_CATALOG: &[CategoryTemplate] = &[
    CategoryTemplate {
        name: "Essentials",
        items: &[
            ItemTemplate::venue("Venue Booking", 30_000.0),
            ItemTemplate::per_head("Catering & Beverages", 600.0),
            ItemTemplate::venue("Decoration & Theming", 15_000.0),
            ItemTemplate::flat("Invitations", 2_000.0),
        ],
    },
    CategoryTemplate {
        name: "Entertainment & Staff",
        items: &[
            ItemTemplate::flat("Sound & AV Setup", 10_000.0),
            ItemTemplate::flat("Anchor & Entertainment", 8_000.0),
            ItemTemplate::flat("Photographer", 12_000.0),
            ItemTemplate::flat("Event Staff & Security", 5_000.0),
        ],
    },
];

const WEDDING_CHECKLIST: &[&str] = &[
    "Finalize guest list",
    "Book venue",
    "Shortlist caterers and taste menus",
    "Book photographer",
    "Order invitations",
    "Plan sangeet performances",
    "Arrange guest accommodation",
    "Confirm final headcount with caterer",
];

const EVENT_CHECKLIST: &[&str] = &[
    "Finalize guest list",
    "Book venue",
    "Confirm catering menu",
    "Send invitations",
    "Arrange sound and AV",
];

/// Parameters for creating a new plan
#[derive(Debug, Clone)]
pub struct NewPlanParams {
    pub name: String,
    pub city: String,
    pub event_type: EventType,
    /// City tier; defaults from the city name when absent
    pub tier: Option<CityTier>,
    pub quality: Quality,
    pub guest_count: u32,
    pub contingency_percent: u8,
}

/// Generate the initial budget categories for a plan
///
/// A zero guest count yields zero-cost per-head items; quality and tier are
/// constrained by their enum types rather than validated here.
pub fn generate_categories(
    event_type: EventType,
    quality: Quality,
    tier: CityTier,
    guest_count: u32,
) -> Vec<BudgetCategory> {
    let catalog = match event_type {
        EventType::Wedding => WEDDING_CATALOG,
        _ => EVENT_CATALOG,
    };

    let qm = quality.multiplier();
    let tm = tier.multiplier();

    catalog
        .iter()
        .map(|template| BudgetCategory {
            name: template.name.to_string(),
            items: template
                .items
                .iter()
                .map(|item| {
                    let mut cost = item.base * qm;
                    if item.tier_scaled {
                        cost *= tm;
                    }
                    if item.per_guest {
                        cost *= f64::from(guest_count);
                    }
                    match item.side {
                        Some(side) => BudgetItem::with_side(item.label, Money::new(cost), side),
                        None => BudgetItem::new(item.label, Money::new(cost)),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Generate the default checklist for an event type
pub fn default_checklist(event_type: EventType) -> Vec<ChecklistItem> {
    let titles = match event_type {
        EventType::Wedding => WEDDING_CHECKLIST,
        _ => EVENT_CHECKLIST,
    };
    titles.iter().map(|title| ChecklistItem::new(*title)).collect()
}

/// Create a complete new plan from wizard parameters
pub fn create_plan(params: NewPlanParams) -> Plan {
    let tier = params
        .tier
        .unwrap_or_else(|| CityTier::for_city(&params.city));

    let kind = match params.event_type {
        EventType::Wedding => PlanKind::Wedding {
            days: 3,
            functions: vec![
                "Mehendi".to_string(),
                "Sangeet".to_string(),
                "Wedding".to_string(),
                "Reception".to_string(),
            ],
            catering_per_plate: Money::new(1200.0 * params.quality.multiplier()),
            split_sides: true,
        },
        event_type => PlanKind::General {
            event_type,
            duration_hours: 6,
            outdoor: false,
        },
    };

    let mut plan = Plan::new(
        params.name,
        params.city,
        tier,
        params.quality,
        params.guest_count,
        params.contingency_percent,
        kind,
    );

    plan.categories =
        generate_categories(params.event_type, params.quality, tier, params.guest_count);
    plan.checklist = default_checklist(params.event_type);
    plan.guest_stats = GuestStats::distribute(params.guest_count);

    plan
}
