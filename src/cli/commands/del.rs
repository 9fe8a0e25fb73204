use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate;
use crate::errors::AppResult;
use crate::store::CsvSheet;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut sheet = CsvSheet::open(&cfg.sheet)?;
        mutate::delete_set(&mut sheet, id)?;
        info(format!("Deleted set {}.", id));
    }
    Ok(())
}
