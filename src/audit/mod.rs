//! Audit logging for Utsav
//!
//! Every plan operation is recorded to an append-only JSONL log together
//! with the budget total before and after, giving a running history of how
//! the budget moved over the planning period.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
