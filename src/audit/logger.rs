//! Append-only JSONL audit logger
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{UtsavError, UtsavResult};

use super::entry::AuditEntry;

/// Writes audit entries to the log file, one JSON object per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn append(&self, entry: &AuditEntry) -> UtsavResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| UtsavError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| UtsavError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| UtsavError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| UtsavError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all entries in chronological order (oldest first)
    ///
    /// Unparseable lines are skipped rather than failing the whole read; a
    /// partially written final line must not make history unreadable.
    pub fn entries(&self) -> UtsavResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| UtsavError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line.map_err(|e| UtsavError::Io(format!("Failed to read audit log: {}", e)))?;

            if line.trim().is_empty() {
                continue;
            }

            if let Ok(entry) = serde_json::from_str::<AuditEntry>(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Read the most recent N entries, oldest of those first
    pub fn recent(&self, count: usize) -> UtsavResult<Vec<AuditEntry>> {
        let all_entries = self.entries()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{EventType, Plan, Quality};
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

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_append_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(&test_plan("Sharma Wedding"));

        logger.append(&entry).unwrap();

        let entries = logger.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].plan_name, "Sharma Wedding");
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let (logger, _temp) = create_test_logger();

        for i in 0..5 {
            let entry = AuditEntry::create(&test_plan(&format!("Plan {}", i)));
            logger.append(&entry).unwrap();
        }

        let entries = logger.entries().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].plan_name, "Plan 0");
        assert_eq!(entries[4].plan_name, "Plan 4");
    }

    #[test]
    fn test_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(&test_plan(&format!("Plan {}", i)));
            logger.append(&entry).unwrap();
        }

        let recent = logger.recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].plan_name, "Plan 7");
        assert_eq!(recent[2].plan_name, "Plan 9");
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.entries().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_is_skipped() {
        let (logger, temp) = create_test_logger();

        let entry = AuditEntry::create(&test_plan("Valid"));
        logger.append(&entry).unwrap();

        // Simulate a partially written line
        use std::io::Write as _;
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "{{\"truncated").unwrap();

        let entries = logger.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].plan_name, "Valid");
    }

    #[test]
    fn test_survives_reopen() {
        let (logger, temp) = create_test_logger();

        logger.append(&AuditEntry::create(&test_plan("Persisted"))).unwrap();

        let logger2 = AuditLogger::new(temp.path().join("audit.log"));
        let entries = logger2.entries().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
