//! Event-day timeline entries

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TimelineId;

/// A scheduled slot on the event timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Unique identifier
    pub id: TimelineId,

    /// What happens in this slot (e.g., "Baraat arrival")
    pub title: String,

    /// Which event day the slot belongs to (1-based)
    #[serde(default = "default_day")]
    pub day: u32,

    /// Start time of the slot
    pub start: NaiveTime,

    /// Free-form note
    #[serde(default)]
    pub note: String,
}

fn default_day() -> u32 {
    1
}

impl TimelineItem {
    /// Create a new timeline slot
    pub fn new(title: impl Into<String>, day: u32, start: NaiveTime) -> Self {
        Self {
            id: TimelineId::new(),
            title: title.into(),
            day,
            start,
            note: String::new(),
        }
    }
}

impl fmt::Display for TimelineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} {} {}", self.day, self.start.format("%H:%M"), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot() {
        let slot = TimelineItem::new(
            "Baraat arrival",
            1,
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        );
        assert_eq!(slot.day, 1);
        assert_eq!(slot.to_string(), "Day 1 18:30 Baraat arrival");
    }

    #[test]
    fn test_missing_day_deserializes_as_one() {
        let json = format!(
            r#"{{"id":"{}","title":"Cake cutting","start":"20:00:00"}}"#,
            uuid::Uuid::new_v4()
        );
        let slot: TimelineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(slot.day, 1);
        assert!(slot.note.is_empty());
    }
}
