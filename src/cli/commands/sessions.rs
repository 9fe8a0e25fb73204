use crate::config::Config;
use crate::core::history;
use crate::errors::AppResult;
use crate::models::{Catalog, SessionSummary};
use crate::store::CsvSheet;
use crate::utils::time::display_ts;
use ansi_term::Colour;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let sheet = CsvSheet::open(&cfg.sheet)?;
    let catalog = Catalog::builtin();
    let sessions = history::get_sessions(&sheet, &catalog, &cfg.default_unit)?;

    if sessions.is_empty() {
        println!("No sessions yet. Log some sets to see them here.");
        return Ok(());
    }

    for session in &sessions {
        print_session(session, &cfg.separator_char);
    }
    Ok(())
}

fn print_session(session: &SessionSummary, separator: &str) {
    println!(
        "{} {}  {}",
        Colour::Cyan.bold().paint(display_ts(&session.started_at)),
        Colour::White.dimmed().paint(&session.day_name),
        Colour::White.dimmed().paint(format!("[{}]", session.session_id)),
    );
    for ex in &session.exercises {
        let sets: Vec<String> = ex
            .sets
            .iter()
            .map(|s| {
                let mut cell = format!("{} {} × {}", s.weight, s.unit, s.reps);
                if !s.notes.is_empty() {
                    cell.push_str(&format!(" ({})", s.notes));
                }
                cell
            })
            .collect();
        println!("  {:<40} {}", ex.exercise_name, sets.join(" | "));
    }
    println!("{}", separator.repeat(60));
}
