//! Row codec: raw sheet cells ⇄ typed `SetLogRow`.
//!
//! The sheet schema has drifted over time (no header at first, then a
//! header, then `id` and `updated_at` columns), so decoding is tolerant:
//! columns are resolved by header name when a header exists and by the
//! legacy fixed order otherwise, and columns an old sheet never had simply
//! decode to empty values. Rows whose weight or reps do not parse as
//! finite numbers are dropped silently; partially corrupt history must not
//! take down every read path.

use crate::models::SetLogRow;
use crate::utils::id;

/// Canonical column order written by every encode.
pub const CANONICAL_COLUMNS: [&str; 10] = [
    "id",
    "timestamp",
    "session_id",
    "day_key",
    "exercise_key",
    "unit",
    "weight",
    "reps",
    "notes",
    "updated_at",
];

/// Column order of sheets created before headers existed.
const LEGACY_COLUMNS: [&str; 8] = [
    "timestamp",
    "session_id",
    "day_key",
    "exercise_key",
    "unit",
    "weight",
    "reps",
    "notes",
];

pub const DEFAULT_UNIT: &str = "lb";

/// Resolved column indices for one sheet, plus whether row 0 is a header.
pub struct ColumnMap {
    pub has_header: bool,
    id: Option<usize>,
    timestamp: Option<usize>,
    session_id: Option<usize>,
    day_key: Option<usize>,
    exercise_key: Option<usize>,
    unit: Option<usize>,
    weight: Option<usize>,
    reps: Option<usize>,
    notes: Option<usize>,
    updated_at: Option<usize>,
}

fn normalize(cell: &str) -> String {
    cell.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

impl ColumnMap {
    /// Detect the schema from the first raw row. The row counts as a
    /// header only when it names at least `timestamp` and `exercise_key`.
    pub fn detect(matrix: &[Vec<String>]) -> Self {
        let names: Vec<String> = match matrix.first() {
            Some(first) => {
                let normalized: Vec<String> = first.iter().map(|c| normalize(c)).collect();
                if normalized.iter().any(|n| n == "timestamp")
                    && normalized.iter().any(|n| n == "exercise_key")
                {
                    return Self::from_names(&normalized, true);
                }
                LEGACY_COLUMNS.iter().map(|s| s.to_string()).collect()
            }
            None => LEGACY_COLUMNS.iter().map(|s| s.to_string()).collect(),
        };
        Self::from_names(&names, false)
    }

    fn from_names(names: &[String], has_header: bool) -> Self {
        let idx = |name: &str| names.iter().position(|n| n == name);
        Self {
            has_header,
            id: idx("id"),
            timestamp: idx("timestamp"),
            session_id: idx("session_id"),
            day_key: idx("day_key"),
            exercise_key: idx("exercise_key"),
            unit: idx("unit"),
            weight: idx("weight"),
            reps: idx("reps"),
            notes: idx("notes"),
            updated_at: idx("updated_at"),
        }
    }

    /// Without these four columns no row can be decoded at all.
    pub fn is_usable(&self) -> bool {
        self.timestamp.is_some()
            && self.exercise_key.is_some()
            && self.weight.is_some()
            && self.reps.is_some()
    }

    pub fn id_index(&self) -> Option<usize> {
        self.id
    }

    /// Matrix index of the first data row.
    pub fn data_start(&self) -> usize {
        if self.has_header { 1 } else { 0 }
    }

    fn cell<'a>(&self, raw: &'a [String], idx: Option<usize>) -> &'a str {
        idx.and_then(|i| raw.get(i)).map(|s| s.as_str()).unwrap_or("")
    }

    /// Decode a single raw row. `None` when weight or reps is not a
    /// finite number (the row is treated as corrupt, not fatal).
    pub fn decode(&self, raw: &[String], default_unit: &str) -> Option<SetLogRow> {
        let weight: f64 = self.cell(raw, self.weight).trim().parse().ok()?;
        let reps: f64 = self.cell(raw, self.reps).trim().parse().ok()?;
        if !weight.is_finite() || !reps.is_finite() {
            return None;
        }

        let unit = self.cell(raw, self.unit);
        let updated_at = self.cell(raw, self.updated_at);

        Some(SetLogRow {
            id: self.cell(raw, self.id).to_string(),
            timestamp: self.cell(raw, self.timestamp).to_string(),
            session_id: self.cell(raw, self.session_id).to_string(),
            day_key: self.cell(raw, self.day_key).to_string(),
            exercise_key: self.cell(raw, self.exercise_key).to_string(),
            unit: if unit.is_empty() {
                default_unit.to_string()
            } else {
                unit.to_string()
            },
            weight,
            reps,
            notes: self.cell(raw, self.notes).to_string(),
            updated_at: if updated_at.is_empty() {
                None
            } else {
                Some(updated_at.to_string())
            },
        })
    }
}

/// Decode a full raw matrix (header included when present) into typed rows.
/// Unusable schemas and corrupt rows yield fewer rows, never an error.
pub fn decode_rows(matrix: &[Vec<String>], default_unit: &str) -> Vec<SetLogRow> {
    let map = ColumnMap::detect(matrix);
    if !map.is_usable() {
        return Vec::new();
    }
    matrix[map.data_start()..]
        .iter()
        .filter_map(|raw| map.decode(raw, default_unit))
        .collect()
}

/// Encode one row in the canonical 10-column order. A missing id gets a
/// fresh one; `updated_at` encodes to the empty string until the first
/// edit writes it.
pub fn encode_row(row: &SetLogRow) -> Vec<String> {
    let row_id = if row.id.is_empty() {
        id::new_id()
    } else {
        row.id.clone()
    };
    vec![
        row_id,
        row.timestamp.clone(),
        row.session_id.clone(),
        row.day_key.clone(),
        row.exercise_key.clone(),
        row.unit.clone(),
        row.weight.to_string(),
        row.reps.to_string(),
        row.notes.clone(),
        row.updated_at.clone().unwrap_or_default(),
    ]
}
