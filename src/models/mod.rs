pub mod session;
pub mod set_log_row;
pub mod templates;

pub use session::{SessionExercise, SessionSet, SessionSummary};
pub use set_log_row::{LogSetsPayload, SetEntry, SetLogRow};
pub use templates::Catalog;
