//! Vendors and their phase-tagged task checklists
//!
//! Each vendor carries a guest-count watermark recorded when its details
//! were last confirmed against the plan; a differing live guest count marks
//! the vendor stale (headcount-dependent quotes need re-confirmation).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TaskId, VendorId};
use super::money::Money;

/// Fixed set of vendor categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VendorCategory {
    Venue,
    Catering,
    Photography,
    Decor,
    Music,
    Makeup,
    Transport,
    Invitations,
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorCategory::Venue => write!(f, "Venue"),
            VendorCategory::Catering => write!(f, "Catering"),
            VendorCategory::Photography => write!(f, "Photography"),
            VendorCategory::Decor => write!(f, "Decor"),
            VendorCategory::Music => write!(f, "Music"),
            VendorCategory::Makeup => write!(f, "Makeup"),
            VendorCategory::Transport => write!(f, "Transport"),
            VendorCategory::Invitations => write!(f, "Invitations"),
        }
    }
}

/// Planning phase a vendor task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum VendorPhase {
    Planning,
    Confirmation,
    Finalization,
    EventDay,
}

impl VendorPhase {
    /// All phases in chronological order
    pub fn all() -> &'static [Self] {
        &[
            Self::Planning,
            Self::Confirmation,
            Self::Finalization,
            Self::EventDay,
        ]
    }
}

impl fmt::Display for VendorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorPhase::Planning => write!(f, "Planning"),
            VendorPhase::Confirmation => write!(f, "Confirmation"),
            VendorPhase::Finalization => write!(f, "Finalization"),
            VendorPhase::EventDay => write!(f, "Event Day"),
        }
    }
}

/// A single item on a vendor's checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorTask {
    /// Unique identifier
    pub id: TaskId,

    /// Task label
    pub label: String,

    /// Which phase the task belongs to
    pub phase: VendorPhase,

    /// Whether it's done
    #[serde(default)]
    pub done: bool,
}

impl VendorTask {
    /// Create a new open task
    pub fn new(label: impl Into<String>, phase: VendorPhase) -> Self {
        Self {
            id: TaskId::new(),
            label: label.into(),
            phase,
            done: false,
        }
    }
}

/// A booked or shortlisted vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    /// Unique identifier
    pub id: VendorId,

    /// Vendor category
    pub category: VendorCategory,

    /// Business name
    pub name: String,

    /// Phone/email contact
    #[serde(default)]
    pub contact: String,

    /// Amount budgeted for this vendor
    #[serde(default)]
    pub budgeted: Money,

    /// Amount actually paid so far
    #[serde(default)]
    pub paid: Money,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Phase-tagged task checklist
    #[serde(default)]
    pub tasks: Vec<VendorTask>,

    /// Plan guest count when this vendor was last confirmed
    pub guest_count_synced: u32,
}

impl Vendor {
    /// Create a new vendor with the default task list for its category
    pub fn new(name: impl Into<String>, category: VendorCategory, guest_count: u32) -> Self {
        Self {
            id: VendorId::new(),
            category,
            name: name.into(),
            contact: String::new(),
            budgeted: Money::zero(),
            paid: Money::zero(),
            notes: String::new(),
            tasks: default_tasks(category),
            guest_count_synced: guest_count,
        }
    }

    /// Outstanding balance (budgeted minus paid)
    pub fn balance_due(&self) -> Money {
        self.budgeted - self.paid
    }

    /// Whether the plan's guest count changed since this vendor was confirmed
    pub fn is_stale(&self, current_guest_count: u32) -> bool {
        self.guest_count_synced != current_guest_count
    }

    /// Count of completed tasks
    pub fn tasks_done(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// Default checklist for a newly added vendor
fn default_tasks(category: VendorCategory) -> Vec<VendorTask> {
    let finalization = match category {
        VendorCategory::Catering => "Finalize menu and plate count",
        VendorCategory::Venue => "Confirm layout and final headcount",
        VendorCategory::Transport => "Confirm routes and passenger counts",
        _ => "Confirm final requirements",
    };

    vec![
        VendorTask::new("Shortlist and compare quotes", VendorPhase::Planning),
        VendorTask::new("Sign contract and pay advance", VendorPhase::Confirmation),
        VendorTask::new(finalization, VendorPhase::Finalization),
        VendorTask::new("Coordinate on-site", VendorPhase::EventDay),
    ]
}
