use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSetlogger
/// CLI application to log weightlifting sets against a CSV sheet
#[derive(Parser)]
#[command(
    name = "rsetlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple set logging CLI: log weightlifting sets against workout-day templates and review session history",
    long_about = None
)]
pub struct Cli {
    /// Override sheet file path (useful for tests or a custom sheet)
    #[arg(global = true, long = "sheet")]
    pub sheet: Option<String>,

    /// Run in test mode (no config file update, no interactive prompts)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the sheet and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// List workout-day templates, or the exercises of one day
    Days {
        /// Day key (e.g. upper_a); omit to list all days
        day_key: Option<String>,
    },

    /// Log one set against a workout day
    Log {
        /// Workout-day template key (upper_a, lower_a, upper_b, lower_b)
        #[arg(long = "day")]
        day: String,

        /// Exercise key within the day template
        #[arg(long = "exercise")]
        exercise: String,

        /// Weight lifted
        #[arg(long = "weight")]
        weight: f64,

        /// Repetitions performed
        #[arg(long = "reps")]
        reps: f64,

        /// Free-text notes for this set
        #[arg(long = "notes")]
        notes: Option<String>,

        /// Weight unit (defaults to the configured unit)
        #[arg(long = "unit")]
        unit: Option<String>,

        /// Session id to join; a new one is generated (and printed) when omitted
        #[arg(long = "session")]
        session: Option<String>,
    },

    /// Show the most recent sets for one exercise
    History {
        /// Exercise key (e.g. barbell_bench)
        exercise_key: String,
    },

    /// Show reconstructed workout sessions, most recent first
    Sessions,

    /// Edit a logged set by id
    Edit {
        /// Row id of the set to edit
        id: String,

        #[arg(long = "weight", help = "New weight")]
        weight: Option<f64>,

        #[arg(long = "reps", help = "New rep count")]
        reps: Option<f64>,

        #[arg(long = "notes", help = "New notes")]
        notes: Option<String>,
    },

    /// Delete a logged set by id
    Del {
        /// Row id of the set to delete
        id: String,
    },

    /// Export reconstructed sessions
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the sheet
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
