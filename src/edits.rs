//! Pure plan mutations
//!
//! Every user edit is described by a `PlanEdit` value and applied with
//! `apply`, a total pure function from (old plan, edit) to new plan. The
//! input is never mutated and no I/O happens here; the service layer owns
//! persistence and audit logging. Out-of-range indices and unknown ids
//! return the plan unchanged rather than erroring - input validation is the
//! caller's concern.

use crate::audit::Operation;
use crate::models::{
    BudgetCategory, BudgetItem, ChecklistItem, GuestCategory, Money, Plan, Room, RoomId, Rsvp,
    RsvpId, RsvpStatus, Side, Snapshot, SnapshotId, TaskId, TimelineId, TimelineItem, Transport,
    TransportId, Vendor, VendorCategory, VendorId, MAX_SNAPSHOTS,
};

/// Direction for reordering a timeline slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Partial update of a vendor's fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub category: Option<VendorCategory>,
    pub budgeted: Option<Money>,
    pub paid: Option<Money>,
    pub notes: Option<String>,
}

/// A described edit to a plan
#[derive(Debug, Clone)]
pub enum PlanEdit {
    // Scalars
    Rename { name: String },
    /// Slider semantics: sets the headcount without redistributing the
    /// per-category breakdown, so the two may disagree until the next
    /// `SetGuestCategory`.
    SetGuestCount { count: u32 },
    SetContingency { percent: u8 },

    // Guests & gifts
    /// Sets one breakdown counter and derives the plan guest count from the
    /// new breakdown total.
    SetGuestCategory { category: GuestCategory, count: u32 },
    SetGiftCost { category: GuestCategory, per_gift: Money },
    AddRsvp { rsvp: Rsvp },
    SetRsvpStatus { id: RsvpId, status: RsvpStatus },
    RemoveRsvp { id: RsvpId },

    // Budget
    AddItem { category_index: usize, item: BudgetItem },
    UpdateItem {
        category_index: usize,
        item_index: usize,
        label: Option<String>,
        cost: Option<Money>,
        side: Option<Side>,
    },
    RemoveItem { category_index: usize, item_index: usize },
    AddCategory { name: String },
    RemoveCategory { category_index: usize },

    // Checklist
    AddChecklistItem { item: ChecklistItem },
    ToggleChecklistItem { id: TaskId },
    RemoveChecklistItem { id: TaskId },

    // Timeline
    AddTimelineItem { item: TimelineItem },
    RemoveTimelineItem { id: TimelineId },
    MoveTimelineItem { index: usize, direction: MoveDirection },

    // Vendors
    AddVendor { vendor: Vendor },
    UpdateVendor { id: VendorId, update: VendorUpdate },
    RemoveVendor { id: VendorId },
    ToggleVendorTask { vendor_id: VendorId, task_id: TaskId },
    SyncVendorGuestCount { id: VendorId },

    // Logistics
    AddRoom { room: Room },
    RemoveRoom { id: RoomId },
    AddTransport { transport: Transport },
    RemoveTransport { id: TransportId },

    // Snapshots
    TakeSnapshot { label: String },
    RestoreSnapshot { id: SnapshotId },
}

impl PlanEdit {
    /// Audit operation this edit corresponds to
    pub fn operation(&self) -> Operation {
        match self {
            PlanEdit::TakeSnapshot { .. } => Operation::Snapshot,
            PlanEdit::RestoreSnapshot { .. } => Operation::Restore,
            _ => Operation::Update,
        }
    }

    /// One-line human-readable description for the audit log
    pub fn describe(&self) -> String {
        match self {
            PlanEdit::Rename { name } => format!("renamed plan to '{}'", name),
            PlanEdit::SetGuestCount { count } => format!("set guest count to {}", count),
            PlanEdit::SetContingency { percent } => {
                format!("set contingency to {}%", percent)
            }
            PlanEdit::SetGuestCategory { category, count } => {
                format!("set {} guests to {}", category, count)
            }
            PlanEdit::SetGiftCost { category, per_gift } => {
                format!("set {} gift cost to {}", category, per_gift)
            }
            PlanEdit::AddRsvp { rsvp } => format!("added RSVP for '{}'", rsvp.guest_name),
            PlanEdit::SetRsvpStatus { status, .. } => format!("marked RSVP {}", status),
            PlanEdit::RemoveRsvp { .. } => "removed RSVP".to_string(),
            PlanEdit::AddItem { item, .. } => {
                format!("added budget item '{}' at {}", item.label, item.cost)
            }
            PlanEdit::UpdateItem { .. } => "updated budget item".to_string(),
            PlanEdit::RemoveItem { .. } => "removed budget item".to_string(),
            PlanEdit::AddCategory { name } => format!("added category '{}'", name),
            PlanEdit::RemoveCategory { .. } => "removed category".to_string(),
            PlanEdit::AddChecklistItem { item } => {
                format!("added checklist item '{}'", item.title)
            }
            PlanEdit::ToggleChecklistItem { .. } => "toggled checklist item".to_string(),
            PlanEdit::RemoveChecklistItem { .. } => "removed checklist item".to_string(),
            PlanEdit::AddTimelineItem { item } => {
                format!("added timeline slot '{}'", item.title)
            }
            PlanEdit::RemoveTimelineItem { .. } => "removed timeline slot".to_string(),
            PlanEdit::MoveTimelineItem { .. } => "reordered timeline".to_string(),
            PlanEdit::AddVendor { vendor } => format!("added vendor '{}'", vendor.name),
            PlanEdit::UpdateVendor { .. } => "updated vendor".to_string(),
            PlanEdit::RemoveVendor { .. } => "removed vendor".to_string(),
            PlanEdit::ToggleVendorTask { .. } => "toggled vendor task".to_string(),
            PlanEdit::SyncVendorGuestCount { .. } => {
                "re-confirmed vendor at current guest count".to_string()
            }
            PlanEdit::AddRoom { room } => format!("added room {} at {}", room.room_number, room.hotel),
            PlanEdit::RemoveRoom { .. } => "removed room".to_string(),
            PlanEdit::AddTransport { transport } => {
                format!("added transport '{}'", transport.vehicle)
            }
            PlanEdit::RemoveTransport { .. } => "removed transport".to_string(),
            PlanEdit::TakeSnapshot { label } => format!("took snapshot '{}'", label),
            PlanEdit::RestoreSnapshot { .. } => "restored snapshot".to_string(),
        }
    }
}

/// Apply an edit to a plan, returning the new plan value
pub fn apply(plan: &Plan, edit: &PlanEdit) -> Plan {
    let mut next = plan.clone();

    match edit {
        PlanEdit::Rename { name } => {
            next.name = name.clone();
        }

        PlanEdit::SetGuestCount { count } => {
            next.guest_count = *count;
        }

        PlanEdit::SetContingency { percent } => {
            next.contingency_percent = *percent;
        }

        PlanEdit::SetGuestCategory { category, count } => {
            // Headcount is derived from the breakdown in this direction only
            next.guest_count = next.guest_stats.set(*category, *count);
        }

        PlanEdit::SetGiftCost { category, per_gift } => {
            next.gift_config.set_per_gift(*category, *per_gift);
        }

        PlanEdit::AddRsvp { rsvp } => {
            next.rsvps.push(rsvp.clone());
        }

        PlanEdit::SetRsvpStatus { id, status } => {
            if let Some(rsvp) = next.rsvps.iter_mut().find(|r| r.id == *id) {
                rsvp.status = *status;
            }
        }

        PlanEdit::RemoveRsvp { id } => {
            next.rsvps.retain(|r| r.id != *id);
        }

        PlanEdit::AddItem {
            category_index,
            item,
        } => {
            if let Some(category) = next.categories.get_mut(*category_index) {
                category.items.push(item.clone());
            }
        }

        PlanEdit::UpdateItem {
            category_index,
            item_index,
            label,
            cost,
            side,
        } => {
            if let Some(item) = next
                .categories
                .get_mut(*category_index)
                .and_then(|c| c.items.get_mut(*item_index))
            {
                if let Some(label) = label {
                    item.label = label.clone();
                }
                if let Some(cost) = cost {
                    item.cost = *cost;
                }
                if let Some(side) = side {
                    item.side = *side;
                }
            }
        }

        PlanEdit::RemoveItem {
            category_index,
            item_index,
        } => {
            if let Some(category) = next.categories.get_mut(*category_index) {
                if *item_index < category.items.len() {
                    category.items.remove(*item_index);
                }
            }
        }

        PlanEdit::AddCategory { name } => {
            next.categories.push(BudgetCategory::new(name.clone()));
        }

        PlanEdit::RemoveCategory { category_index } => {
            if *category_index < next.categories.len() {
                next.categories.remove(*category_index);
            }
        }

        PlanEdit::AddChecklistItem { item } => {
            next.checklist.push(item.clone());
        }

        PlanEdit::ToggleChecklistItem { id } => {
            if let Some(item) = next.checklist.iter_mut().find(|i| i.id == *id) {
                item.done = !item.done;
            }
        }

        PlanEdit::RemoveChecklistItem { id } => {
            next.checklist.retain(|i| i.id != *id);
        }

        PlanEdit::AddTimelineItem { item } => {
            next.timeline.push(item.clone());
        }

        PlanEdit::RemoveTimelineItem { id } => {
            next.timeline.retain(|i| i.id != *id);
        }

        PlanEdit::MoveTimelineItem { index, direction } => {
            // Swap with the adjacent slot; no-op at either array bound
            let len = next.timeline.len();
            match direction {
                MoveDirection::Up if *index > 0 && *index < len => {
                    next.timeline.swap(*index, *index - 1);
                }
                MoveDirection::Down if *index + 1 < len => {
                    next.timeline.swap(*index, *index + 1);
                }
                _ => {}
            }
        }

        PlanEdit::AddVendor { vendor } => {
            next.vendors.push(vendor.clone());
        }

        PlanEdit::UpdateVendor { id, update } => {
            if let Some(vendor) = next.vendor_mut(*id) {
                if let Some(name) = &update.name {
                    vendor.name = name.clone();
                }
                if let Some(contact) = &update.contact {
                    vendor.contact = contact.clone();
                }
                if let Some(category) = update.category {
                    vendor.category = category;
                }
                if let Some(budgeted) = update.budgeted {
                    vendor.budgeted = budgeted;
                }
                if let Some(paid) = update.paid {
                    vendor.paid = paid;
                }
                if let Some(notes) = &update.notes {
                    vendor.notes = notes.clone();
                }
            }
        }

        PlanEdit::RemoveVendor { id } => {
            next.vendors.retain(|v| v.id != *id);
        }

        PlanEdit::ToggleVendorTask { vendor_id, task_id } => {
            if let Some(vendor) = next.vendor_mut(*vendor_id) {
                if let Some(task) = vendor.tasks.iter_mut().find(|t| t.id == *task_id) {
                    task.done = !task.done;
                }
            }
        }

        PlanEdit::SyncVendorGuestCount { id } => {
            let guest_count = next.guest_count;
            if let Some(vendor) = next.vendor_mut(*id) {
                vendor.guest_count_synced = guest_count;
            }
        }

        PlanEdit::AddRoom { room } => {
            next.rooms.push(room.clone());
        }

        PlanEdit::RemoveRoom { id } => {
            next.rooms.retain(|r| r.id != *id);
        }

        PlanEdit::AddTransport { transport } => {
            next.transports.push(transport.clone());
        }

        PlanEdit::RemoveTransport { id } => {
            next.transports.retain(|t| t.id != *id);
        }

        PlanEdit::TakeSnapshot { label } => {
            let snapshot = Snapshot::capture(plan, label.clone());
            next.snapshots.insert(0, snapshot);
            next.snapshots.truncate(MAX_SNAPSHOTS);
        }

        PlanEdit::RestoreSnapshot { id } => {
            if let Some(snapshot) = plan.snapshots.iter().find(|s| s.id == *id) {
                let mut restored = (*snapshot.data).clone();
                // The live history survives a restore; the archived copy's
                // own (empty) list is never used
                restored.snapshots = plan.snapshots.clone();
                next = restored;
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{create_plan, NewPlanParams};
    use crate::models::{EventType, Quality};
    use chrono::NaiveTime;

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
    fn test_apply_does_not_mutate_input() {
        let plan = test_plan();
        let before = serde_json::to_string(&plan).unwrap();

        let _ = apply(
            &plan,
            &PlanEdit::AddCategory {
                name: "Fireworks".to_string(),
            },
        );

        assert_eq!(serde_json::to_string(&plan).unwrap(), before);
    }

    #[test]
    fn test_rename() {
        let plan = test_plan();
        let next = apply(
            &plan,
            &PlanEdit::Rename {
                name: "Sharma-Kapoor Wedding".to_string(),
            },
        );
        assert_eq!(next.name, "Sharma-Kapoor Wedding");
        assert_eq!(next.id, plan.id);
    }

    #[test]
    fn test_guest_count_slider_does_not_redistribute() {
        let plan = test_plan();
        let next = apply(&plan, &PlanEdit::SetGuestCount { count: 250 });

        assert_eq!(next.guest_count, 250);
        // Breakdown untouched: the two now disagree, by design
        assert_eq!(next.guest_stats, plan.guest_stats);
        assert_ne!(next.guest_stats.total(), next.guest_count);
    }

    #[test]
    fn test_guest_category_syncs_count() {
        let plan = test_plan();
        let next = apply(
            &plan,
            &PlanEdit::SetGuestCategory {
                category: GuestCategory::Friends,
                count: 60,
            },
        );

        assert_eq!(next.guest_stats.friends, 60);
        assert_eq!(next.guest_count, next.guest_stats.total());
    }

    #[test]
    fn test_add_and_remove_item() {
        let plan = test_plan();
        let item = BudgetItem::new("Fireworks", Money::new(20_000.0));

        let next = apply(
            &plan,
            &PlanEdit::AddItem {
                category_index: 4,
                item: item.clone(),
            },
        );
        assert_eq!(
            next.categories[4].items.len(),
            plan.categories[4].items.len() + 1
        );

        let last = next.categories[4].items.len() - 1;
        let removed = apply(
            &next,
            &PlanEdit::RemoveItem {
                category_index: 4,
                item_index: last,
            },
        );
        assert_eq!(
            removed.categories[4].items.len(),
            plan.categories[4].items.len()
        );
    }

    #[test]
    fn test_update_item_partial() {
        let plan = test_plan();
        let next = apply(
            &plan,
            &PlanEdit::UpdateItem {
                category_index: 0,
                item_index: 0,
                label: None,
                cost: Some(Money::new(200_000.0)),
                side: None,
            },
        );

        assert_eq!(next.categories[0].items[0].cost.rupees(), 200_000.0);
        assert_eq!(next.categories[0].items[0].label, plan.categories[0].items[0].label);
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        let plan = test_plan();

        let next = apply(
            &plan,
            &PlanEdit::AddItem {
                category_index: 99,
                item: BudgetItem::new("Nothing", Money::zero()),
            },
        );
        assert_eq!(next.base_cost(), plan.base_cost());

        let next = apply(
            &plan,
            &PlanEdit::RemoveItem {
                category_index: 0,
                item_index: 99,
            },
        );
        assert_eq!(next.categories[0].items.len(), plan.categories[0].items.len());

        let next = apply(&plan, &PlanEdit::RemoveCategory { category_index: 99 });
        assert_eq!(next.categories.len(), plan.categories.len());
    }

    #[test]
    fn test_checklist_toggle() {
        let plan = test_plan();
        let id = plan.checklist[0].id;

        let next = apply(&plan, &PlanEdit::ToggleChecklistItem { id });
        assert!(next.checklist[0].done);

        let again = apply(&next, &PlanEdit::ToggleChecklistItem { id });
        assert!(!again.checklist[0].done);
    }

    #[test]
    fn test_timeline_reorder_noop_at_bounds() {
        let mut plan = test_plan();
        for (i, title) in ["Baraat", "Varmala", "Pheras"].iter().enumerate() {
            plan.timeline.push(TimelineItem::new(
                *title,
                1,
                NaiveTime::from_hms_opt(17 + i as u32, 0, 0).unwrap(),
            ));
        }

        // Up at index 0 is a no-op
        let next = apply(
            &plan,
            &PlanEdit::MoveTimelineItem {
                index: 0,
                direction: MoveDirection::Up,
            },
        );
        assert_eq!(next.timeline[0].title, "Baraat");

        // Down at the last index is a no-op
        let next = apply(
            &plan,
            &PlanEdit::MoveTimelineItem {
                index: 2,
                direction: MoveDirection::Down,
            },
        );
        assert_eq!(next.timeline[2].title, "Pheras");

        // A legal swap
        let next = apply(
            &plan,
            &PlanEdit::MoveTimelineItem {
                index: 1,
                direction: MoveDirection::Up,
            },
        );
        assert_eq!(next.timeline[0].title, "Varmala");
        assert_eq!(next.timeline[1].title, "Baraat");
    }

    #[test]
    fn test_vendor_update_and_task_toggle() {
        let plan = test_plan();
        let vendor = Vendor::new("Raj Caterers", VendorCategory::Catering, plan.guest_count);
        let vendor_id = vendor.id;
        let task_id = vendor.tasks[0].id;

        let plan = apply(&plan, &PlanEdit::AddVendor { vendor });

        let plan = apply(
            &plan,
            &PlanEdit::UpdateVendor {
                id: vendor_id,
                update: VendorUpdate {
                    budgeted: Some(Money::new(120_000.0)),
                    contact: Some("98200 12345".to_string()),
                    ..Default::default()
                },
            },
        );
        let vendor = plan.vendor(vendor_id).unwrap();
        assert_eq!(vendor.budgeted.rupees(), 120_000.0);
        assert_eq!(vendor.contact, "98200 12345");
        assert_eq!(vendor.name, "Raj Caterers");

        let plan = apply(
            &plan,
            &PlanEdit::ToggleVendorTask {
                vendor_id,
                task_id,
            },
        );
        assert!(plan.vendor(vendor_id).unwrap().tasks[0].done);
    }

    #[test]
    fn test_vendor_sync_clears_staleness() {
        let plan = test_plan();
        let vendor = Vendor::new("Grand Palace", VendorCategory::Venue, plan.guest_count);
        let vendor_id = vendor.id;
        let plan = apply(&plan, &PlanEdit::AddVendor { vendor });

        let plan = apply(&plan, &PlanEdit::SetGuestCount { count: 180 });
        assert!(plan.vendor(vendor_id).unwrap().is_stale(plan.guest_count));

        let plan = apply(&plan, &PlanEdit::SyncVendorGuestCount { id: vendor_id });
        assert!(!plan.vendor(vendor_id).unwrap().is_stale(plan.guest_count));
    }

    #[test]
    fn test_snapshot_cap_evicts_oldest() {
        let mut plan = test_plan();
        for i in 0..12 {
            plan = apply(
                &plan,
                &PlanEdit::TakeSnapshot {
                    label: format!("snap {}", i),
                },
            );
        }

        assert_eq!(plan.snapshots.len(), MAX_SNAPSHOTS);
        // Newest first; the two oldest (0 and 1) were evicted
        assert_eq!(plan.snapshots[0].label, "snap 11");
        assert_eq!(plan.snapshots[9].label, "snap 2");
    }

    #[test]
    fn test_restore_preserves_live_snapshot_list() {
        let plan = test_plan();
        let plan = apply(
            &plan,
            &PlanEdit::TakeSnapshot {
                label: "before changes".to_string(),
            },
        );
        let snapshot_id = plan.snapshots[0].id;
        let original_base = plan.base_cost();

        // Mutate the budget, then take another snapshot
        let plan = apply(&plan, &PlanEdit::RemoveCategory { category_index: 0 });
        let plan = apply(
            &plan,
            &PlanEdit::TakeSnapshot {
                label: "after removal".to_string(),
            },
        );
        assert_eq!(plan.snapshots.len(), 2);
        assert_ne!(plan.base_cost(), original_base);

        // Restore the first snapshot: data comes back, history stays
        let restored = apply(&plan, &PlanEdit::RestoreSnapshot { id: snapshot_id });
        assert_eq!(restored.base_cost(), original_base);
        assert_eq!(restored.categories.len(), 5);
        assert_eq!(restored.snapshots.len(), 2);
        assert_eq!(restored.snapshots[0].label, "after removal");
        assert_eq!(restored.id, plan.id);
    }

    #[test]
    fn test_restore_unknown_snapshot_is_noop() {
        let plan = test_plan();
        let next = apply(
            &plan,
            &PlanEdit::RestoreSnapshot {
                id: SnapshotId::new(),
            },
        );
        assert_eq!(next.categories.len(), plan.categories.len());
    }

    #[test]
    fn test_rsvp_lifecycle() {
        let plan = test_plan();
        let rsvp = Rsvp::new("Mehta Family", 4);
        let rsvp_id = rsvp.id;

        let plan = apply(&plan, &PlanEdit::AddRsvp { rsvp });
        assert_eq!(plan.rsvps.len(), 1);

        let plan = apply(
            &plan,
            &PlanEdit::SetRsvpStatus {
                id: rsvp_id,
                status: RsvpStatus::Attending,
            },
        );
        assert_eq!(plan.rsvps[0].status, RsvpStatus::Attending);

        let plan = apply(&plan, &PlanEdit::RemoveRsvp { id: rsvp_id });
        assert!(plan.rsvps.is_empty());
    }

    #[test]
    fn test_describe_and_operation() {
        let edit = PlanEdit::TakeSnapshot {
            label: "v1".to_string(),
        };
        assert_eq!(edit.operation(), Operation::Snapshot);
        assert!(edit.describe().contains("v1"));

        let edit = PlanEdit::SetContingency { percent: 15 };
        assert_eq!(edit.operation(), Operation::Update);
        assert!(edit.describe().contains("15%"));
    }
}
