//! Core data models for Utsav
//!
//! This module contains all the data structures that represent the planning
//! domain: plans, budget categories, guests, vendors, timelines, snapshots.

pub mod category;
pub mod checklist;
pub mod guest;
pub mod ids;
pub mod logistics;
pub mod money;
pub mod plan;
pub mod rates;
pub mod snapshot;
pub mod timeline;
pub mod vendor;

pub use category::{BudgetCategory, BudgetItem};
pub use checklist::ChecklistItem;
pub use guest::{tables_needed, GiftConfig, GuestCategory, GuestStats, SEATS_PER_TABLE};
pub use ids::{
    ItemId, PlanId, RoomId, RsvpId, SnapshotId, TaskId, TimelineId, TransportId, VendorId,
};
pub use logistics::{Room, Rsvp, RsvpStatus, Transport};
pub use money::Money;
pub use plan::{Plan, PlanKind};
pub use rates::{CityTier, EventType, Quality, Side};
pub use snapshot::{Snapshot, MAX_SNAPSHOTS};
pub use timeline::TimelineItem;
pub use vendor::{Vendor, VendorCategory, VendorPhase, VendorTask};
