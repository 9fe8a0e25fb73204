use serde::Serialize;

/// One physical row in the set_log sheet.
///
/// `id` and `timestamp` are written once at append time and never rewritten;
/// an edit may only touch `weight`, `reps`, `notes` and `updated_at`.
#[derive(Debug, Clone, Serialize)]
pub struct SetLogRow {
    pub id: String,              // ⇔ col A, generated at append time
    pub timestamp: String,       // ⇔ col B, ISO-8601 instant, set once
    pub session_id: String,      // ⇔ col C, groups one workout occasion
    pub day_key: String,         // ⇔ col D, workout-day template key
    pub exercise_key: String,    // ⇔ col E, catalog exercise key
    pub unit: String,            // ⇔ col F, weight unit ("lb" when absent)
    pub weight: f64,             // ⇔ col G, stored as sheet number
    pub reps: f64,               // ⇔ col H, stored as sheet number
    pub notes: String,           // ⇔ col I, free text, may be empty
    pub updated_at: Option<String>, // ⇔ col J, empty until first edit
}

/// One set of a log request, before it becomes a row.
#[derive(Debug, Clone)]
pub struct SetEntry {
    pub exercise_key: String,
    pub weight: f64,
    pub reps: f64,
    pub notes: Option<String>,
}

/// A full log request: one or more sets logged together against a
/// workout-day template. All rows produced from one payload share the
/// same append timestamp.
#[derive(Debug, Clone)]
pub struct LogSetsPayload {
    pub session_id: String,
    pub day_key: String,
    pub unit: String,
    pub sets: Vec<SetEntry>,
}
