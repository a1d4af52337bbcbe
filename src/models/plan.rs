//! The Plan root aggregate
//!
//! A plan owns every collection the planner edits: budget categories,
//! checklist, timeline, vendors, guest breakdown, gifting config, RSVPs,
//! logistics, and snapshot history. It is created once by the generator and
//! mutated in place (through `edits::apply`) until deleted; no child entity
//! has an independent lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;
use super::checklist::ChecklistItem;
use super::guest::{GiftConfig, GuestStats};
use super::ids::{PlanId, VendorId};
use super::logistics::{Room, Rsvp, Transport};
use super::money::Money;
use super::rates::{CityTier, EventType, Quality};
use super::snapshot::Snapshot;
use super::timeline::TimelineItem;
use super::vendor::Vendor;

/// Wedding-specific or general-event-specific plan details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanKind {
    /// A multi-day wedding with named functions and a two-party cost split
    Wedding {
        /// Number of event days
        days: u32,
        /// Named functions (Mehendi, Sangeet, ...)
        functions: Vec<String>,
        /// Quoted catering cost per plate
        catering_per_plate: Money,
        /// Whether bride/groom cost attribution is in use
        split_sides: bool,
    },
    /// A single-occasion event
    General {
        /// Which occasion (birthday, corporate, ...)
        event_type: EventType,
        /// Planned duration in hours
        duration_hours: u32,
        /// Whether the venue is outdoors
        outdoor: bool,
    },
}

/// The root aggregate for one planned event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier
    pub id: PlanId,

    /// Display name (e.g., "Sharma-Kapoor Wedding")
    pub name: String,

    /// Event city (free text; drives the default tier)
    pub city: String,

    /// City cost bracket
    pub tier: CityTier,

    /// Spend level
    pub quality: Quality,

    /// Expected guest headcount
    pub guest_count: u32,

    /// Flat percentage buffer applied once to the budget base
    pub contingency_percent: u8,

    /// When the plan was created
    pub created_at: DateTime<Utc>,

    /// Wedding or general-event details
    pub kind: PlanKind,

    /// Budget categories, in display order
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,

    /// Master checklist
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    /// Event-day timeline
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,

    /// Vendors
    #[serde(default)]
    pub vendors: Vec<Vendor>,

    /// Guest headcount breakdown
    #[serde(default)]
    pub guest_stats: GuestStats,

    /// Per-category gift costs
    #[serde(default)]
    pub gift_config: GiftConfig,

    /// Guest RSVPs
    #[serde(default)]
    pub rsvps: Vec<Rsvp>,

    /// Hotel room assignments
    #[serde(default)]
    pub rooms: Vec<Room>,

    /// Vehicle legs
    #[serde(default)]
    pub transports: Vec<Transport>,

    /// Snapshot history, newest first
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

impl Plan {
    /// Create an empty plan shell
    ///
    /// The generator fills in categories, checklist, and the guest
    /// breakdown; this constructor only wires the scalar fields.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        tier: CityTier,
        quality: Quality,
        guest_count: u32,
        contingency_percent: u8,
        kind: PlanKind,
    ) -> Self {
        Self {
            id: PlanId::new(),
            name: name.into(),
            city: city.into(),
            tier,
            quality,
            guest_count,
            contingency_percent,
            created_at: Utc::now(),
            kind,
            categories: Vec::new(),
            checklist: Vec::new(),
            timeline: Vec::new(),
            vendors: Vec::new(),
            guest_stats: GuestStats::default(),
            gift_config: GiftConfig::default(),
            rsvps: Vec::new(),
            rooms: Vec::new(),
            transports: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// The five-value event type, derived from the kind union
    pub fn event_type(&self) -> EventType {
        match &self.kind {
            PlanKind::Wedding { .. } => EventType::Wedding,
            PlanKind::General { event_type, .. } => *event_type,
        }
    }

    /// Whether this is a wedding plan
    pub fn is_wedding(&self) -> bool {
        matches!(self.kind, PlanKind::Wedding { .. })
    }

    /// Whether bride/groom cost splitting is enabled
    pub fn split_enabled(&self) -> bool {
        matches!(
            self.kind,
            PlanKind::Wedding {
                split_sides: true,
                ..
            }
        )
    }

    /// Multiplicative contingency factor (1 + percent/100)
    pub fn contingency_factor(&self) -> f64 {
        1.0 + f64::from(self.contingency_percent) / 100.0
    }

    /// Sum of every line item cost across all categories, before contingency
    pub fn base_cost(&self) -> Money {
        self.categories.iter().map(|c| c.subtotal()).sum()
    }

    /// Base cost with the contingency buffer applied once, globally
    pub fn total_cost(&self) -> Money {
        self.base_cost().scaled(self.contingency_factor())
    }

    /// Contingency-adjusted cost per guest
    ///
    /// Non-finite when the guest count is zero; callers guard before
    /// formatting.
    pub fn per_guest_cost(&self) -> f64 {
        self.total_cost().rupees() / f64::from(self.guest_count)
    }

    /// Look up a vendor by id
    pub fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Look up a vendor by id, mutably
    pub fn vendor_mut(&mut self, id: VendorId) -> Option<&mut Vendor> {
        self.vendors.iter_mut().find(|v| v.id == id)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.event_type(), self.city)
    }
}
