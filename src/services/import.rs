//! Guest-list CSV import
//!
//! Imports a guest list into a plan's RSVPs. Expected columns (header row
//! required, case-insensitive): `name`, optional `phone`, optional
//! `party_size`, optional `status`. Bad rows are skipped and reported, not
//! fatal; the import applies whatever parsed cleanly.

use std::io::Read;

use csv::ReaderBuilder;

use crate::audit::AuditEntry;
use crate::edits::{self, PlanEdit};
use crate::error::{UtsavError, UtsavResult};
use crate::models::{Rsvp, RsvpStatus};
use crate::services::PlanService;
use crate::storage::Storage;

/// Outcome of a guest-list import
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// RSVPs added to the plan
    pub imported: usize,
    /// Skipped rows as (1-based data row number, reason)
    pub skipped: Vec<(usize, String)>,
}

/// Import a guest-list CSV into a plan's RSVPs
pub fn import_guest_csv<R: Read>(
    storage: &Storage,
    plan_reference: &str,
    reader: R,
) -> UtsavResult<ImportSummary> {
    let service = PlanService::new(storage);
    let before = service.resolve(plan_reference)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| UtsavError::Import(format!("Failed to read CSV header: {}", e)))?
        .clone();

    let column = |name: &str| -> Option<usize> {
        headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    };

    let name_col =
        column("name").ok_or_else(|| UtsavError::Import("Missing 'name' column".to_string()))?;
    let phone_col = column("phone");
    let party_col = column("party_size");
    let status_col = column("status");

    let mut plan = before.clone();
    let mut imported = 0;
    let mut skipped = Vec::new();

    for (row_number, record) in csv_reader.records().enumerate() {
        let row_number = row_number + 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                skipped.push((row_number, format!("unreadable row: {}", e)));
                continue;
            }
        };

        let name = match record.get(name_col) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                skipped.push((row_number, "empty guest name".to_string()));
                continue;
            }
        };

        let party_size = match party_col.and_then(|c| record.get(c)).filter(|v| !v.is_empty()) {
            Some(value) => match value.parse::<u32>() {
                Ok(size) => size,
                Err(_) => {
                    skipped.push((row_number, format!("bad party_size '{}'", value)));
                    continue;
                }
            },
            None => 1,
        };

        let status = match status_col.and_then(|c| record.get(c)).filter(|v| !v.is_empty()) {
            Some(value) => match parse_status(value) {
                Some(status) => status,
                None => {
                    skipped.push((row_number, format!("bad status '{}'", value)));
                    continue;
                }
            },
            None => RsvpStatus::Pending,
        };

        let mut rsvp = Rsvp::new(name, party_size);
        rsvp.status = status;
        if let Some(phone) = phone_col.and_then(|c| record.get(c)) {
            rsvp.phone = phone.to_string();
        }

        plan = edits::apply(&plan, &PlanEdit::AddRsvp { rsvp });
        imported += 1;
    }

    if imported > 0 {
        storage.plans.upsert(plan.clone())?;
        storage.plans.save()?;
        storage.log(&AuditEntry::edit(
            crate::audit::Operation::Update,
            &before,
            &plan,
            format!("imported {} RSVPs from CSV", imported),
        ))?;
    }

    Ok(ImportSummary { imported, skipped })
}

fn parse_status(value: &str) -> Option<RsvpStatus> {
    match value.to_lowercase().as_str() {
        "attending" | "yes" | "confirmed" => Some(RsvpStatus::Attending),
        "declined" | "no" => Some(RsvpStatus::Declined),
        "pending" | "invited" => Some(RsvpStatus::Pending),
        _ => None,
    }
}
