//! Session view models.
//!
//! These are pure projections recomputed from the full row set on every
//! read; they carry no identity of their own. Only `SetLogRow.id` is a
//! durable key.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSet {
    pub id: String,
    pub weight: f64,
    pub reps: f64,
    pub notes: String,
    pub unit: String,
    pub timestamp: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionExercise {
    pub exercise_key: String,
    pub exercise_name: String,
    /// Sets in chronological order of performance.
    pub sets: Vec<SessionSet>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    /// Timestamp of the first row encountered for this session in input
    /// order. Can differ from the true minimum when rows arrive unsorted.
    pub started_at: String,
    pub day_key: String,
    pub day_name: String,
    /// Exercises in the order they were first touched during the session.
    pub exercises: Vec<SessionExercise>,
}
