//! Timeline conflict detection
//!
//! Flags schedule slots packed too tightly: two slots on the same day whose
//! start times are less than 30 minutes apart. Sort by (day, start), then a
//! single pass over adjacent pairs.

use crate::models::TimelineItem;

/// Minimum gap between consecutive slots on the same day, in minutes
pub const CONFLICT_WINDOW_MIN: i64 = 30;

/// Two slots scheduled within the conflict window of each other
#[derive(Debug, Clone)]
pub struct TimelineConflict {
    pub day: u32,
    pub first: TimelineItem,
    pub second: TimelineItem,
    /// Minutes between the two start times
    pub gap_minutes: i64,
}

/// Find all conflicting slot pairs in a timeline
pub fn find_conflicts(items: &[TimelineItem]) -> Vec<TimelineConflict> {
    let mut sorted: Vec<&TimelineItem> = items.iter().collect();
    sorted.sort_by(|a, b| (a.day, a.start).cmp(&(b.day, b.start)));

    sorted
        .windows(2)
        .filter_map(|pair| {
            let (first, second) = (pair[0], pair[1]);
            if first.day != second.day {
                return None;
            }
            let gap_minutes = (second.start - first.start).num_minutes();
            if gap_minutes < CONFLICT_WINDOW_MIN {
                Some(TimelineConflict {
                    day: first.day,
                    first: first.clone(),
                    second: second.clone(),
                    gap_minutes,
                })
            } else {
                None
            }
        })
        .collect()
}
