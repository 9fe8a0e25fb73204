use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate::{self, SetPatch};
use crate::errors::AppResult;
use crate::store::CsvSheet;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        weight,
        reps,
        notes,
    } = cmd
    {
        let patch = SetPatch {
            weight: *weight,
            reps: *reps,
            notes: notes.clone(),
        };
        let mut sheet = CsvSheet::open(&cfg.sheet)?;
        mutate::update_set(&mut sheet, id, &patch)?;
        success(format!("Set {} updated.", id));
    }
    Ok(())
}
