//! Point mutations against the sheet: update and delete by row id.
//!
//! Both operations are locate-then-act with no lock over the store. A
//! concurrent delete landing between another caller's locate and its write
//! invalidates the located position; that race is surfaced as an ordinary
//! operation failure, never detected or retried (matching the sheet API's
//! own guarantees).

use crate::core::codec::{self, ColumnMap};
use crate::core::locate;
use crate::errors::{AppError, AppResult};
use crate::store::SheetStore;
use crate::utils::time::now_iso;

/// Partial update payload for one logged set. Only `weight`, `reps` and
/// `notes` are editable; `id` and `timestamp` are immutable for the life
/// of the row.
#[derive(Debug, Clone, Default)]
pub struct SetPatch {
    pub weight: Option<f64>,
    pub reps: Option<f64>,
    pub notes: Option<String>,
}

impl SetPatch {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.reps.is_none() && self.notes.is_none()
    }
}

fn validate_number(field: &str, value: Option<f64>) -> AppResult<()> {
    if let Some(v) = value
        && (!v.is_finite() || v < 0.0)
    {
        return Err(AppError::InvalidArgument(format!(
            "{field} must be a finite non-negative number, got {v}"
        )));
    }
    Ok(())
}

/// Merge `patch` into the row carrying `id` and rewrite it in place.
///
/// Stamps `updated_at` with the current instant on every successful update,
/// whichever fields changed. Fields outside the patch, `unit` included, are
/// written back exactly as stored. Read-merge-write with no optimistic lock.
pub fn update_set(store: &mut dyn SheetStore, id: &str, patch: &SetPatch) -> AppResult<()> {
    if patch.is_empty() {
        return Err(AppError::InvalidArgument(
            "nothing to update: pass at least one of weight, reps, notes".into(),
        ));
    }
    validate_number("weight", patch.weight)?;
    validate_number("reps", patch.reps)?;

    let matrix = store.read_all()?;
    let pos = locate::locate_in(&matrix, id)
        .ok_or_else(|| AppError::NotFound(format!("set '{id}'")))?;

    let map = ColumnMap::detect(&matrix);
    // a row whose numbers no longer parse is invisible to every read
    // path, so treat it as absent here too
    //
    // decode with an empty default unit: the stored cell is rewritten
    // verbatim, an unset unit stays unset
    let mut row = map
        .decode(&matrix[pos], "")
        .ok_or_else(|| AppError::NotFound(format!("set '{id}'")))?;

    if let Some(w) = patch.weight {
        row.weight = w;
    }
    if let Some(r) = patch.reps {
        row.reps = r;
    }
    if let Some(ref n) = patch.notes {
        row.notes = n.clone();
    }
    row.updated_at = Some(now_iso());

    store.write_row(pos, &codec::encode_row(&row))
}

/// Remove the row carrying `id`; all later rows shift up by one position.
pub fn delete_set(store: &mut dyn SheetStore, id: &str) -> AppResult<()> {
    let pos = locate::locate(store, id)?;
    store.delete_row(pos)
}
