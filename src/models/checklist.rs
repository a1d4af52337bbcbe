//! Plan-level checklist items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// A single to-do item on the plan's master checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier
    pub id: TaskId,

    /// What needs doing
    pub title: String,

    /// Whether it's done
    #[serde(default)]
    pub done: bool,

    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl ChecklistItem {
    /// Create a new open checklist item
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            done: false,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{}] {}", mark, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_open() {
        let item = ChecklistItem::new("Book venue");
        assert!(!item.done);
        assert_eq!(item.title, "Book venue");
    }

    #[test]
    fn test_display() {
        let mut item = ChecklistItem::new("Send invitations");
        assert_eq!(item.to_string(), "[ ] Send invitations");

        item.done = true;
        assert_eq!(item.to_string(), "[x] Send invitations");
    }
}
