use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history;
use crate::errors::AppResult;
use crate::models::Catalog;
use crate::store::CsvSheet;
use crate::utils::table::{Column, Table};
use crate::utils::time::display_ts;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { exercise_key } = cmd {
        let sheet = CsvSheet::open(&cfg.sheet)?;
        let rows = history::get_history(&sheet, exercise_key, &cfg.default_unit)?;

        let catalog = Catalog::builtin();
        println!(
            "{} — last {} sets\n",
            catalog.exercise_name(exercise_key),
            rows.len()
        );

        if rows.is_empty() {
            println!("No sets logged for '{}' yet.", exercise_key);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("DATE", 16),
            Column::new("WEIGHT", 8),
            Column::new("REPS", 5),
            Column::new("UNIT", 4),
            Column::new("NOTES", 24),
            Column::new("ID", 32),
        ]);
        for r in &rows {
            table.add_row(vec![
                display_ts(&r.timestamp),
                r.weight.to_string(),
                r.reps.to_string(),
                r.unit.clone(),
                r.notes.clone(),
                r.id.clone(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
