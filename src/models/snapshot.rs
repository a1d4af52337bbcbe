//! Point-in-time plan snapshots
//!
//! A snapshot is a manually captured deep copy of a plan kept for later
//! comparison or restoration. Each plan retains at most the 10 most recent
//! snapshots, newest first; capturing an eleventh silently evicts the oldest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::SnapshotId;
use super::money::Money;
use super::plan::Plan;

/// Maximum snapshots retained per plan
pub const MAX_SNAPSHOTS: usize = 10;

/// An immutable point-in-time copy of a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique identifier
    pub id: SnapshotId,

    /// User-supplied label (e.g., "before venue change")
    pub label: String,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// Contingency-adjusted budget total at capture time
    pub total_budget: Money,

    /// The captured plan data
    ///
    /// The copy's own snapshot list is cleared at capture time: restore
    /// always keeps the live plan's list, so storing nested history would
    /// only grow the archive.
    pub data: Box<Plan>,
}

impl Snapshot {
    /// Capture a snapshot of a plan
    pub fn capture(plan: &Plan, label: impl Into<String>) -> Self {
        let mut data = plan.clone();
        data.snapshots.clear();

        Self {
            id: SnapshotId::new(),
            label: label.into(),
            created_at: Utc::now(),
            total_budget: plan.total_cost(),
            data: Box::new(data),
        }
    }
}
