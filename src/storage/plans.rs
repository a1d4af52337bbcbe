//! Plan repository for JSON storage
//!
//! Holds every plan in memory behind an RwLock and persists the full set to
//! plans.json. The in-memory state is authoritative for the session; saves
//! are atomic but best-effort from the core's point of view.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::UtsavError;
use crate::models::{Plan, PlanId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable plans file format
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct PlanData {
    #[serde(default)]
    plans: Vec<Plan>,
}

/// Repository for plan persistence
pub struct PlanRepository {
    path: PathBuf,
    plans: RwLock<HashMap<PlanId, Plan>>,
}

impl PlanRepository {
    /// Create a new plan repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Load plans from disk
    pub fn load(&self) -> Result<(), UtsavError> {
        let file_data: PlanData = read_json(&self.path)?;

        let mut plans = self
            .plans
            .write()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        plans.clear();
        for plan in file_data.plans {
            plans.insert(plan.id, plan);
        }

        Ok(())
    }

    /// Save plans to disk
    pub fn save(&self) -> Result<(), UtsavError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut plan_list: Vec<_> = plans.values().cloned().collect();
        plan_list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = PlanData { plans: plan_list };

        write_json_atomic(&self.path, &file_data)
    }

    /// List all plans, oldest first
    pub fn list(&self) -> Result<Vec<Plan>, UtsavError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut plan_list: Vec<_> = plans.values().cloned().collect();
        plan_list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(plan_list)
    }

    /// Get a plan by id
    pub fn get(&self, id: PlanId) -> Result<Option<Plan>, UtsavError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(plans.get(&id).cloned())
    }

    /// Find a plan by display name (case-insensitive) or id prefix
    pub fn find(&self, reference: &str) -> Result<Option<Plan>, UtsavError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let by_name = plans
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(reference));
        if let Some(plan) = by_name {
            return Ok(Some(plan.clone()));
        }

        Ok(plans
            .values()
            .find(|p| p.id.matches_prefix(reference))
            .cloned())
    }

    /// Insert or replace a plan
    pub fn upsert(&self, plan: Plan) -> Result<(), UtsavError> {
        let mut plans = self
            .plans
            .write()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        plans.insert(plan.id, plan);
        Ok(())
    }

    /// Delete a plan by id, returning whether it existed
    pub fn delete(&self, id: PlanId) -> Result<bool, UtsavError> {
        let mut plans = self
            .plans
            .write()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(plans.remove(&id).is_some())
    }

    /// Number of stored plans
    pub fn count(&self) -> Result<usize, UtsavError> {
        let plans = self
            .plans
            .read()
            .map_err(|e| UtsavError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(plans.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{EventType, Quality};
    use tempfile::TempDir;

    fn test_plan(name: &str) -> Plan {
        create_plan(NewPlanParams {
            name: name.to_string(),
            city: "Mumbai".to_string(),
            event_type: EventType::Wedding,
            tier: None,
            quality: Quality::Standard,
            guest_count: 100,
            contingency_percent: 10,
        })
    }

    fn create_test_repo() -> (TempDir, PlanRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = PlanRepository::new(temp_dir.path().join("plans.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp, repo) = create_test_repo();
        let plan = test_plan("Sharma Wedding");
        let id = plan.id;

        repo.upsert(plan).unwrap();

        let loaded = repo.get(id).unwrap().unwrap();
        assert_eq!(loaded.name, "Sharma Wedding");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plans.json");

        let plan = test_plan("Sharma Wedding");
        let id = plan.id;

        let repo = PlanRepository::new(path.clone());
        repo.upsert(plan).unwrap();
        repo.save().unwrap();

        // Fresh repository pointed at the same file
        let repo2 = PlanRepository::new(path);
        repo2.load().unwrap();

        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.name, "Sharma Wedding");
        assert_eq!(loaded.categories.len(), 5);
    }

    #[test]
    fn test_find_by_name_and_prefix() {
        let (_temp, repo) = create_test_repo();
        let plan = test_plan("Sharma Wedding");
        let id = plan.id;
        repo.upsert(plan).unwrap();

        assert!(repo.find("sharma wedding").unwrap().is_some());
        assert!(repo.find("SHARMA WEDDING").unwrap().is_some());
        assert!(repo.find("no such plan").unwrap().is_none());

        let short = format!("{}", id);
        assert_eq!(repo.find(&short).unwrap().unwrap().id, id);
    }

    #[test]
    fn test_delete() {
        let (_temp, repo) = create_test_repo();
        let plan = test_plan("Sharma Wedding");
        let id = plan.id;
        repo.upsert(plan).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_by_creation() {
        let (_temp, repo) = create_test_repo();
        repo.upsert(test_plan("First")).unwrap();
        repo.upsert(test_plan("Second")).unwrap();

        let plans = repo.list().unwrap();
        assert_eq!(plans.len(), 2);
        assert!(plans[0].created_at <= plans[1].created_at);
    }
}
