//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, Plan};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Plan was created
    Create,
    /// Plan was edited
    Update,
    /// Plan was deleted
    Delete,
    /// A snapshot was taken
    Snapshot,
    /// A snapshot was restored
    Restore,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Snapshot => write!(f, "SNAPSHOT"),
            Operation::Restore => write!(f, "RESTORE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on a plan with the budget total before and after,
/// so the log doubles as a budget movement history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Short id of the affected plan
    pub plan_id: String,

    /// Plan display name at the time of the operation
    pub plan_name: String,

    /// Human-readable description of what changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Contingency-adjusted total before the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_before: Option<Money>,

    /// Contingency-adjusted total after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_after: Option<Money>,
}

impl AuditEntry {
    /// Record a plan creation
    pub fn create(plan: &Plan) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            plan_id: plan.id.to_string(),
            plan_name: plan.name.clone(),
            detail: Some(format!(
                "{} in {} for {} guests",
                plan.event_type(),
                plan.city,
                plan.guest_count
            )),
            total_before: None,
            total_after: Some(plan.total_cost()),
        }
    }

    /// Record an edit, with the plan state before and after
    pub fn edit(operation: Operation, before: &Plan, after: &Plan, detail: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            plan_id: after.id.to_string(),
            plan_name: after.name.clone(),
            detail: Some(detail),
            total_before: Some(before.total_cost()),
            total_after: Some(after.total_cost()),
        }
    }

    /// Record a plan deletion
    pub fn delete(plan: &Plan) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            plan_id: plan.id.to_string(),
            plan_name: plan.name.clone(),
            detail: None,
            total_before: Some(plan.total_cost()),
            total_after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.plan_name,
            self.plan_id
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" - {}", detail));
        }

        if let (Some(before), Some(after)) = (self.total_before, self.total_after) {
            if before != after {
                output.push_str(&format!("\n  Total: {} -> {}", before, after));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{EventType, Quality};

    fn test_plan() -> Plan {
        create_plan(NewPlanParams {
            name: "Sharma Wedding".to_string(),
            city: "Mumbai".to_string(),
            event_type: EventType::Wedding,
            tier: None,
            quality: Quality::Standard,
            guest_count: 100,
            contingency_percent: 10,
        })
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Snapshot.to_string(), "SNAPSHOT");
        assert_eq!(Operation::Restore.to_string(), "RESTORE");
    }

    #[test]
    fn test_create_entry() {
        let plan = test_plan();
        let entry = AuditEntry::create(&plan);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.plan_name, "Sharma Wedding");
        assert!(entry.total_before.is_none());
        assert_eq!(entry.total_after, Some(plan.total_cost()));
    }

    #[test]
    fn test_edit_entry_records_totals() {
        let before = test_plan();
        let mut after = before.clone();
        after.categories[0].items[0].cost = Money::new(250_000.0);

        let entry = AuditEntry::edit(
            Operation::Update,
            &before,
            &after,
            "updated budget item".to_string(),
        );

        assert_eq!(entry.total_before, Some(before.total_cost()));
        assert_eq!(entry.total_after, Some(after.total_cost()));
        assert_ne!(entry.total_before, entry.total_after);
    }

    #[test]
    fn test_human_readable_format() {
        let plan = test_plan();
        let entry = AuditEntry::create(&plan);

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Sharma Wedding"));
        assert!(formatted.contains("Wedding in Mumbai"));
    }

    #[test]
    fn test_serialization() {
        let plan = test_plan();
        let entry = AuditEntry::create(&plan);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.plan_name, entry.plan_name);
    }
}
