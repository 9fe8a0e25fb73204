use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::models::{Catalog, LogSetsPayload, SetEntry};
use crate::store::CsvSheet;
use crate::ui::messages::{info, success};
use crate::utils::id;

/// Log one set. A fresh session id is generated when the caller did not
/// pass one, and printed so follow-up sets can join the same session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        day,
        exercise,
        weight,
        reps,
        notes,
        unit,
        session,
    } = cmd
    {
        let generated = session.is_none();
        let session_id = session.clone().unwrap_or_else(id::new_id);

        let payload = LogSetsPayload {
            session_id: session_id.clone(),
            day_key: day.clone(),
            unit: unit.clone().unwrap_or_else(|| cfg.default_unit.clone()),
            sets: vec![SetEntry {
                exercise_key: exercise.clone(),
                weight: *weight,
                reps: *reps,
                notes: notes.clone(),
            }],
        };

        let catalog = Catalog::builtin();
        let mut sheet = CsvSheet::open(&cfg.sheet)?;
        let rows = LogLogic::apply(&mut sheet, &catalog, &payload)?;

        let row = &rows[0];
        success(format!(
            "Logged {} {} × {} for {} (id: {})",
            row.weight,
            row.unit,
            row.reps,
            catalog.exercise_name(&row.exercise_key),
            row.id
        ));
        if generated {
            info(format!(
                "New session started: {} (pass --session {} for the next sets)",
                session_id, session_id
            ));
        }
    }
    Ok(())
}
