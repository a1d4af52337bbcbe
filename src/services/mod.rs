//! Service layer for Utsav
//!
//! The service layer orchestrates the pure core against storage: it loads a
//! plan, applies a pure edit, persists the result, and appends to the audit
//! log. Nothing below this layer performs I/O.

pub mod import;
pub mod plan;

pub use import::{import_guest_csv, ImportSummary};
pub use plan::PlanService;
