use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::CsvSheet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let sheet = CsvSheet::open(&cfg.sheet)?;
        ExportLogic::export(&sheet, cfg, format, file, *force)?;
    }
    Ok(())
}
