//! Append path: validate a log payload and append its rows to the sheet.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::{Catalog, LogSetsPayload, SetLogRow};
use crate::store::SheetStore;
use crate::utils::{id, time};

/// High-level business logic for the `log` command.
pub struct LogLogic;

impl LogLogic {
    /// Validate the payload, stamp one shared append timestamp, and append
    /// one row per set in a single call. Append never reads the store
    /// first, so concurrent logging from several sessions cannot conflict.
    /// Returns the appended rows (with their generated ids).
    pub fn apply(
        store: &mut dyn SheetStore,
        catalog: &Catalog,
        payload: &LogSetsPayload,
    ) -> AppResult<Vec<SetLogRow>> {
        if payload.session_id.is_empty() {
            return Err(AppError::InvalidArgument("missing session id".into()));
        }
        if !catalog.is_valid_day(&payload.day_key) {
            return Err(AppError::InvalidDayKey(payload.day_key.clone()));
        }
        if payload.sets.is_empty() {
            return Err(AppError::InvalidArgument("no sets to log".into()));
        }
        for set in &payload.sets {
            if set.exercise_key.is_empty() {
                return Err(AppError::InvalidArgument("missing exercise key".into()));
            }
            if !set.weight.is_finite() || set.weight < 0.0 {
                return Err(AppError::InvalidArgument(format!(
                    "weight must be a finite non-negative number, got {}",
                    set.weight
                )));
            }
            if !set.reps.is_finite() || set.reps < 0.0 {
                return Err(AppError::InvalidArgument(format!(
                    "reps must be a finite non-negative number, got {}",
                    set.reps
                )));
            }
        }

        // one clock reading for the whole payload; this is the row's
        // timestamp for life, edits only ever touch updated_at
        let timestamp = time::now_iso();

        let rows: Vec<SetLogRow> = payload
            .sets
            .iter()
            .map(|set| SetLogRow {
                id: id::new_id(),
                timestamp: timestamp.clone(),
                session_id: payload.session_id.clone(),
                day_key: payload.day_key.clone(),
                exercise_key: set.exercise_key.clone(),
                unit: payload.unit.clone(),
                weight: set.weight,
                reps: set.reps,
                notes: set.notes.clone().unwrap_or_default(),
                updated_at: None,
            })
            .collect();

        let raw: Vec<Vec<String>> = rows.iter().map(codec::encode_row).collect();
        store.append(&raw)?;
        Ok(rows)
    }
}
