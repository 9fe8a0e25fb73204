use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::Catalog;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Days { day_key } = cmd {
        let catalog = Catalog::builtin();
        match day_key {
            Some(key) => {
                let tpl = catalog
                    .template(key)
                    .ok_or_else(|| AppError::InvalidDayKey(key.clone()))?;
                println!("{} ({})", tpl.day_name, tpl.day_key);
                for ex in tpl.exercises {
                    println!("  {:<32} {}", ex.exercise_key, ex.exercise_name);
                }
            }
            None => {
                for tpl in catalog.days() {
                    println!(
                        "{:<10} {} ({} exercises)",
                        tpl.day_key,
                        tpl.day_name,
                        tpl.exercises.len()
                    );
                }
            }
        }
    }
    Ok(())
}
