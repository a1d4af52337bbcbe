//! Checklist, timeline, and logistics display formatting

use crate::models::{ChecklistItem, Room, TimelineItem, Transport};
use crate::reports::TimelineConflict;

/// Format the master checklist for `utsav checklist show`
pub fn format_checklist(items: &[ChecklistItem]) -> String {
    if items.is_empty() {
        return "Checklist is empty.".to_string();
    }

    let done = items.iter().filter(|i| i.done).count();
    let mut output = format!("Checklist ({}/{} done):\n", done, items.len());

    for item in items {
        let mark = if item.done { "x" } else { " " };
        output.push_str(&format!("  [{}] {}  ({})\n", mark, item.title, item.id));
    }

    output
}

/// Format the timeline for `utsav timeline show`
///
/// Slots are shown with their list index because reordering is positional.
pub fn format_timeline(items: &[TimelineItem]) -> String {
    if items.is_empty() {
        return "Timeline is empty.\n\nRun 'utsav timeline add' to schedule a slot.".to_string();
    }

    let mut output = String::from("Timeline:\n");
    let mut current_day = 0;

    for (index, item) in items.iter().enumerate() {
        if item.day != current_day {
            current_day = item.day;
            output.push_str(&format!("\n  Day {}:\n", current_day));
        }
        output.push_str(&format!(
            "    [{}] {}  {:<30} {}\n",
            index,
            item.start.format("%H:%M"),
            item.title,
            item.id
        ));
        if !item.note.is_empty() {
            output.push_str(&format!("          {}\n", item.note));
        }
    }

    output
}

/// Format detected conflicts for `utsav timeline conflicts`
pub fn format_conflicts(conflicts: &[TimelineConflict]) -> String {
    if conflicts.is_empty() {
        return "No conflicts - every slot has at least 30 minutes of breathing room.".to_string();
    }

    let mut output = format!("{} conflict(s) found:\n", conflicts.len());

    for conflict in conflicts {
        output.push_str(&format!(
            "  Day {}: '{}' at {} and '{}' at {} are only {} minutes apart\n",
            conflict.day,
            conflict.first.title,
            conflict.first.start.format("%H:%M"),
            conflict.second.title,
            conflict.second.start.format("%H:%M"),
            conflict.gap_minutes
        ));
    }

    output
}

/// Format rooms and transports for `utsav logistics show`
pub fn format_logistics(rooms: &[Room], transports: &[Transport]) -> String {
    let mut output = String::new();

    output.push_str("Rooms:\n");
    if rooms.is_empty() {
        output.push_str("  (none)\n");
    }
    for room in rooms {
        let occupants = if room.occupants.is_empty() {
            "unassigned".to_string()
        } else {
            room.occupants.join(", ")
        };
        output.push_str(&format!(
            "  {}  {} {}  - {}\n",
            room.id, room.hotel, room.room_number, occupants
        ));
    }

    output.push_str("\nTransport:\n");
    if transports.is_empty() {
        output.push_str("  (none)\n");
    }
    for leg in transports {
        output.push_str(&format!(
            "  {}  {} ({} seats)  {}  pickup {}\n",
            leg.id,
            leg.vehicle,
            leg.capacity,
            leg.route,
            leg.pickup.format("%H:%M")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_checklist_counts() {
        let mut items = vec![
            ChecklistItem::new("Book venue"),
            ChecklistItem::new("Send invitations"),
        ];
        items[0].done = true;

        let output = format_checklist(&items);
        assert!(output.contains("(1/2 done)"));
        assert!(output.contains("[x] Book venue"));
        assert!(output.contains("[ ] Send invitations"));
    }

    #[test]
    fn test_timeline_grouped_by_day() {
        let items = vec![
            TimelineItem::new("Mehendi", 1, NaiveTime::from_hms_opt(16, 0, 0).unwrap()),
            TimelineItem::new("Baraat", 2, NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
        ];

        let output = format_timeline(&items);
        assert!(output.contains("Day 1:"));
        assert!(output.contains("Day 2:"));
        assert!(output.contains("[0] 16:00"));
        assert!(output.contains("[1] 17:00"));
    }

    #[test]
    fn test_no_conflicts_message() {
        let output = format_conflicts(&[]);
        assert!(output.contains("No conflicts"));
    }

    #[test]
    fn test_logistics_empty() {
        let output = format_logistics(&[], &[]);
        assert!(output.contains("Rooms:"));
        assert!(output.contains("(none)"));
    }
}
