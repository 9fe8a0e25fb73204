pub mod csv_sheet;
pub mod sheet;

pub use csv_sheet::CsvSheet;
pub use sheet::{MemSheet, SheetStore};
