//! Terminal output formatting
//!
//! Formats models and reports for terminal display. All functions build
//! plain strings; printing is left to the CLI handlers.

pub mod budget;
pub mod guest;
pub mod plan;
pub mod schedule;
pub mod vendor;

pub use budget::{format_budget, format_side_split};
pub use guest::format_guest_report;
pub use plan::{format_plan_details, format_plan_list, format_snapshot_list};
pub use schedule::{format_checklist, format_conflicts, format_logistics, format_timeline};
pub use vendor::{format_vendor_details, format_vendor_list};
