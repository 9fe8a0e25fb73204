//! Deduplicator for double-appended rows.
//!
//! A retried append can land the same logical entry twice, with a fresh id
//! on the second copy. The fingerprint therefore covers only the
//! append-time fields `(timestamp, session_id, day_key, exercise_key,
//! weight, reps)` and deliberately excludes `id`, `notes` and `unit`: two
//! rows differing only by an edited note or a regenerated id are still the
//! same logical entry. First occurrence wins and input order is preserved.
//!
//! Only the whole-store reconstruction path runs through here; the
//! per-exercise history path shows raw duplicates on purpose.

use crate::models::SetLogRow;
use std::collections::HashSet;

type Fingerprint = (String, String, String, String, u64, u64);

fn fingerprint(row: &SetLogRow) -> Fingerprint {
    (
        row.timestamp.clone(),
        row.session_id.clone(),
        row.day_key.clone(),
        row.exercise_key.clone(),
        // bit patterns so the float fields can live in a hash key
        row.weight.to_bits(),
        row.reps.to_bits(),
    )
}

pub fn dedupe(rows: Vec<SetLogRow>) -> Vec<SetLogRow> {
    let mut seen: HashSet<Fingerprint> = HashSet::with_capacity(rows.len());
    rows.into_iter()
        .filter(|row| seen.insert(fingerprint(row)))
        .collect()
}
