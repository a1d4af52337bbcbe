//! Storage layer for Utsav
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the append-only audit log.

pub mod file_io;
pub mod plans;

pub use file_io::{read_json, write_json_atomic};
pub use plans::PlanRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::UtsavPaths;
use crate::error::UtsavError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: UtsavPaths,
    pub plans: PlanRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: UtsavPaths) -> Result<Self, UtsavError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            plans: PlanRepository::new(paths.plans_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &UtsavPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), UtsavError> {
        self.plans.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), UtsavError> {
        self.plans.save()?;
        Ok(())
    }

    /// Append an entry to the audit log
    pub fn log(&self, entry: &AuditEntry) -> Result<(), UtsavError> {
        self.audit.append(entry)
    }
}
