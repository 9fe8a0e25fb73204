use crate::errors::{AppError, AppResult};
use crate::models::SessionSummary;

/// Write sessions as nested, pretty-printed JSON.
pub fn write_json(path: &str, sessions: &[SessionSummary]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
