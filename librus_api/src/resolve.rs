//! Joins raw homework records against the lookup maps.

use crate::lookup::Lookups;
use crate::types::{HomeworkEntry, LibrusID, RawHomework, Reference};

/// Resolves one raw record into a display-ready entry.
///
/// Returns `None` only for records without an `Id` or `Date`; every
/// unresolvable reference becomes `"Unknown"` instead.
pub fn resolve_homework_entry(hw: &RawHomework, lookups: &Lookups) -> Option<HomeworkEntry> {
    let (Some(id), Some(date)) = (hw.id, hw.date.as_ref()) else {
        tracing::debug!("Skipping homework without id or date: {:?}", hw.id);
        return None;
    };

    Some(HomeworkEntry {
        id,
        date: date.clone(),
        subject: lookups.subjects.resolve(ref_id(hw.subject.as_ref())).to_string(),
        creator: lookups.users.resolve(ref_id(hw.created_by.as_ref())).to_string(),
        category: lookups.categories.resolve(ref_id(hw.category.as_ref())).to_string(),
        lesson_no: hw.lesson_no.as_ref().map(|n| n.to_string()),
        time_from: hw.time_from.clone(),
        time_to: hw.time_to.clone(),
        content: hw.content.clone(),
        add_date: hw.add_date.clone(),
    })
}

/// Resolves every record, preserving order.
pub fn resolve_homework_entries(homeworks: &[RawHomework], lookups: &Lookups) -> Vec<HomeworkEntry> {
    homeworks
        .iter()
        .filter_map(|hw| resolve_homework_entry(hw, lookups))
        .collect()
}

fn ref_id(reference: Option<&Reference>) -> Option<LibrusID> {
    reference.and_then(|r| r.id)
}
