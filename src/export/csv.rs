use crate::errors::AppResult;
use crate::models::SessionSummary;
use csv::Writer;

/// Write sessions as a flat CSV, one record per set.
pub fn write_csv(path: &str, sessions: &[SessionSummary]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "session_id",
        "started_at",
        "day_key",
        "day_name",
        "exercise_key",
        "exercise_name",
        "set_id",
        "timestamp",
        "weight",
        "reps",
        "unit",
        "notes",
        "updated_at",
    ])?;

    for session in sessions {
        for ex in &session.exercises {
            for set in &ex.sets {
                wtr.write_record(&[
                    session.session_id.clone(),
                    session.started_at.clone(),
                    session.day_key.clone(),
                    session.day_name.clone(),
                    ex.exercise_key.clone(),
                    ex.exercise_name.clone(),
                    set.id.clone(),
                    set.timestamp.clone(),
                    set.weight.to_string(),
                    set.reps.to_string(),
                    set.unit.clone(),
                    set.notes.clone(),
                    set.updated_at.clone().unwrap_or_default(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
