//! Session reconstructor: flat rows → nested session view models.
//!
//! The source rows arrive in arbitrary order, so every level defines its
//! own sort: sets ascending by timestamp, exercises ascending by their
//! first set's timestamp, sessions descending by `started_at`. RFC3339 UTC
//! timestamps order lexicographically, so plain string comparison is the
//! sort key throughout.

use crate::models::{Catalog, SessionExercise, SessionSet, SessionSummary, SetLogRow};
use std::collections::HashMap;

/// Group rows into session summaries.
///
/// A row with an empty `session_id` falls back to a group keyed by its own
/// timestamp, so every row lands in exactly one group even with missing
/// session data. `started_at` and the day fields come from the first row
/// encountered for the session in input order; when the input is unsorted
/// that value may differ from the session's true earliest timestamp
/// (long-standing behavior, kept as is).
pub fn reconstruct(rows: &[SetLogRow], catalog: &Catalog) -> Vec<SessionSummary> {
    // group by session id, preserving first-encounter order
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&SetLogRow>)> = Vec::new();

    for row in rows {
        let key: &str = if row.session_id.is_empty() {
            &row.timestamp
        } else {
            &row.session_id
        };
        match group_index.get(key) {
            Some(&i) => groups[i].1.push(row),
            None => {
                group_index.insert(key, groups.len());
                groups.push((key.to_string(), vec![row]));
            }
        }
    }

    let mut sessions: Vec<SessionSummary> = groups
        .into_iter()
        .map(|(session_id, members)| build_session(session_id, &members, catalog))
        .collect();

    sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    sessions
}

fn build_session(
    session_id: String,
    members: &[&SetLogRow],
    catalog: &Catalog,
) -> SessionSummary {
    let first = members[0]; // a session cannot exist without rows

    // sub-group by exercise key
    let mut exercise_index: HashMap<&str, usize> = HashMap::new();
    let mut exercises: Vec<SessionExercise> = Vec::new();

    for row in members {
        let set = SessionSet {
            id: row.id.clone(),
            weight: row.weight,
            reps: row.reps,
            notes: row.notes.clone(),
            unit: row.unit.clone(),
            timestamp: row.timestamp.clone(),
            updated_at: row.updated_at.clone(),
        };
        match exercise_index.get(row.exercise_key.as_str()) {
            Some(&i) => exercises[i].sets.push(set),
            None => {
                exercise_index.insert(row.exercise_key.as_str(), exercises.len());
                exercises.push(SessionExercise {
                    exercise_key: row.exercise_key.clone(),
                    exercise_name: catalog.exercise_name(&row.exercise_key),
                    sets: vec![set],
                });
            }
        }
    }

    // chronological order of performance within each exercise
    for ex in &mut exercises {
        ex.sets.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    }
    // exercises in the order they were first touched during the session
    exercises.sort_by(|a, b| a.sets[0].timestamp.cmp(&b.sets[0].timestamp));

    SessionSummary {
        session_id,
        started_at: first.timestamp.clone(),
        day_key: first.day_key.clone(),
        day_name: catalog.day_name(&first.day_key),
        exercises,
    }
}
