use crate::config::Config;
use crate::core::history;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::Catalog;
use crate::store::SheetStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Reconstruct sessions and write them in the requested format.
    pub fn export(
        store: &dyn SheetStore,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let dest = Path::new(file);
        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "file '{}' already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        let catalog = Catalog::builtin();
        let sessions = history::get_sessions(store, &catalog, &cfg.default_unit)?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, &sessions)?,
            ExportFormat::Json => json::write_json(file, &sessions)?,
        }

        notify_export_success(format.as_str(), dest);
        Ok(())
    }
}
