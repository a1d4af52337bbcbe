//! Plan service
//!
//! Provides the create/list/edit/delete operations the CLI drives. Edits go
//! through `edits::apply`: the service resolves the plan, applies the pure
//! mutation, persists the new value, and appends an audit entry. The core
//! never retries persistence; a failed save surfaces as an error and the
//! in-memory state remains authoritative for the session.

use crate::audit::AuditEntry;
use crate::edits::{self, PlanEdit};
use crate::error::{UtsavError, UtsavResult};
use crate::generator::{self, NewPlanParams};
use crate::models::Plan;
use crate::storage::Storage;

/// Service for plan management
pub struct PlanService<'a> {
    storage: &'a Storage,
}

impl<'a> PlanService<'a> {
    /// Create a new plan service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new plan from wizard parameters
    pub fn create(&self, params: NewPlanParams) -> UtsavResult<Plan> {
        if self.storage.plans.find(&params.name)?.is_some() {
            return Err(UtsavError::Duplicate {
                entity_type: "Plan",
                identifier: params.name,
            });
        }

        let plan = generator::create_plan(params);

        self.storage.plans.upsert(plan.clone())?;
        self.storage.plans.save()?;
        self.storage.log(&AuditEntry::create(&plan))?;

        Ok(plan)
    }

    /// List all plans, oldest first
    pub fn list(&self) -> UtsavResult<Vec<Plan>> {
        self.storage.plans.list()
    }

    /// Resolve a plan by name or id prefix
    pub fn resolve(&self, reference: &str) -> UtsavResult<Plan> {
        self.storage
            .plans
            .find(reference)?
            .ok_or_else(|| UtsavError::plan_not_found(reference))
    }

    /// Apply a pure edit to a plan and persist the result
    pub fn edit(&self, reference: &str, edit: &PlanEdit) -> UtsavResult<Plan> {
        let before = self.resolve(reference)?;
        let after = edits::apply(&before, edit);

        self.storage.plans.upsert(after.clone())?;
        self.storage.plans.save()?;
        self.storage.log(&AuditEntry::edit(
            edit.operation(),
            &before,
            &after,
            edit.describe(),
        ))?;

        Ok(after)
    }

    /// Delete a plan
    pub fn delete(&self, reference: &str) -> UtsavResult<Plan> {
        let plan = self.resolve(reference)?;

        self.storage.plans.delete(plan.id)?;
        self.storage.plans.save()?;
        self.storage.log(&AuditEntry::delete(&plan))?;

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::UtsavPaths;
    use crate::models::{EventType, Money, Quality, MAX_SNAPSHOTS};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = UtsavPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn params(name: &str) -> NewPlanParams {
        NewPlanParams {
            name: name.to_string(),
            city: "Mumbai".to_string(),
            event_type: EventType::Wedding,
            tier: None,
            quality: Quality::Standard,
            guest_count: 100,
            contingency_percent: 10,
        }
    }

    #[test]
    fn test_create_and_resolve() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);

        let plan = service.create(params("Sharma Wedding")).unwrap();
        assert_eq!(plan.categories.len(), 5);

        let resolved = service.resolve("sharma wedding").unwrap();
        assert_eq!(resolved.id, plan.id);

        // Creation was audited
        let entries = storage.audit.entries().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);

        service.create(params("Sharma Wedding")).unwrap();
        let result = service.create(params("Sharma Wedding"));

        assert!(matches!(result, Err(UtsavError::Duplicate { .. })));
    }

    #[test]
    fn test_resolve_missing_plan() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);

        let result = service.resolve("nope");
        assert!(matches!(result, Err(UtsavError::NotFound { .. })));
    }

    #[test]
    fn test_edit_persists_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);
        service.create(params("Sharma Wedding")).unwrap();

        let after = service
            .edit("Sharma Wedding", &PlanEdit::SetContingency { percent: 20 })
            .unwrap();
        assert_eq!(after.contingency_percent, 20);

        // The stored copy changed too
        let resolved = service.resolve("Sharma Wedding").unwrap();
        assert_eq!(resolved.contingency_percent, 20);

        let entries = storage.audit.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].detail.as_deref().unwrap().contains("20%"));
    }

    #[test]
    fn test_snapshot_roundtrip_through_service() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);
        service.create(params("Sharma Wedding")).unwrap();

        let plan = service
            .edit(
                "Sharma Wedding",
                &PlanEdit::TakeSnapshot {
                    label: "baseline".to_string(),
                },
            )
            .unwrap();
        let snapshot_id = plan.snapshots[0].id;
        let original_total = plan.total_cost();

        // Blow the budget, then restore
        service
            .edit(
                "Sharma Wedding",
                &PlanEdit::UpdateItem {
                    category_index: 0,
                    item_index: 0,
                    label: None,
                    cost: Some(Money::new(999_999.0)),
                    side: None,
                },
            )
            .unwrap();

        let restored = service
            .edit(
                "Sharma Wedding",
                &PlanEdit::RestoreSnapshot { id: snapshot_id },
            )
            .unwrap();

        assert!(restored.total_cost().approx_eq(original_total, 1e-6));
        assert_eq!(restored.snapshots.len(), 1);
    }

    #[test]
    fn test_snapshot_cap_through_service() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);
        service.create(params("Sharma Wedding")).unwrap();

        for i in 0..15 {
            service
                .edit(
                    "Sharma Wedding",
                    &PlanEdit::TakeSnapshot {
                        label: format!("v{}", i),
                    },
                )
                .unwrap();
        }

        let plan = service.resolve("Sharma Wedding").unwrap();
        assert_eq!(plan.snapshots.len(), MAX_SNAPSHOTS);
        assert_eq!(plan.snapshots[0].label, "v14");
    }

    #[test]
    fn test_delete() {
        let (_temp, storage) = create_test_storage();
        let service = PlanService::new(&storage);
        service.create(params("Sharma Wedding")).unwrap();

        service.delete("Sharma Wedding").unwrap();
        assert!(service.resolve("Sharma Wedding").is_err());
        assert_eq!(storage.plans.count().unwrap(), 0);
    }
}
