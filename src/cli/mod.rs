//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod budget;
pub mod checklist;
pub mod guest;
pub mod logistics;
pub mod plan;
pub mod snapshot;
pub mod timeline;
pub mod vendor;

pub use budget::{handle_budget_command, BudgetCommands};
pub use checklist::{handle_checklist_command, ChecklistCommands};
pub use guest::{handle_guest_command, GuestCommands};
pub use logistics::{handle_logistics_command, LogisticsCommands};
pub use plan::{handle_plan_command, PlanCommands};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};
pub use timeline::{handle_timeline_command, TimelineCommands};
pub use vendor::{handle_vendor_command, VendorCommands};

use chrono::NaiveTime;

use crate::error::{UtsavError, UtsavResult};
use crate::models::Money;

/// Parse a clock time from "HH:MM" or "HH:MM:SS"
pub(crate) fn parse_time(s: &str) -> UtsavResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| UtsavError::Validation(format!("Invalid time '{}', expected HH:MM", s)))
}

/// Parse a rupee amount from a CLI argument
pub(crate) fn parse_money(s: &str) -> UtsavResult<Money> {
    Money::parse(s).map_err(|e| UtsavError::Validation(format!("Invalid amount: {}", e)))
}
