//! Tabular store primitives.
//!
//! The durable store is one sheet: a header row followed by data rows.
//! These four primitives are all the core is allowed to assume; there is
//! no indexed lookup and no transaction spanning two calls. Data rows are
//! addressed 1-based with the header occupying physical row 1, so data
//! row `n` sits at matrix index `n`.

use crate::errors::{AppError, AppResult};

pub trait SheetStore {
    /// Full cell matrix, header row included.
    fn read_all(&self) -> AppResult<Vec<Vec<String>>>;

    /// Append rows after the last data row. Safe under concurrency, unlike
    /// the read-modify-write paths.
    fn append(&mut self, rows: &[Vec<String>]) -> AppResult<()>;

    /// Overwrite the data row at 1-based position `pos`.
    fn write_row(&mut self, pos: usize, row: &[String]) -> AppResult<()>;

    /// Remove the data row at 1-based position `pos`; later rows shift up.
    /// Any position located before this call is invalid after it.
    fn delete_row(&mut self, pos: usize) -> AppResult<()>;
}

pub(crate) fn validate_data_pos(pos: usize, matrix_len: usize) -> AppResult<()> {
    // pos 0 would address the header row
    if pos == 0 || pos >= matrix_len {
        return Err(AppError::NotFound(format!("row position {pos}")));
    }
    Ok(())
}

/// In-memory sheet used by unit tests and property checks.
#[derive(Debug, Clone, Default)]
pub struct MemSheet {
    pub rows: Vec<Vec<String>>,
}

impl MemSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn with_header(header: &[&str]) -> Self {
        Self {
            rows: vec![header.iter().map(|s| s.to_string()).collect()],
        }
    }
}

impl SheetStore for MemSheet {
    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn append(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        self.rows.extend(rows.iter().cloned());
        Ok(())
    }

    fn write_row(&mut self, pos: usize, row: &[String]) -> AppResult<()> {
        validate_data_pos(pos, self.rows.len())?;
        self.rows[pos] = row.to_vec();
        Ok(())
    }

    fn delete_row(&mut self, pos: usize) -> AppResult<()> {
        validate_data_pos(pos, self.rows.len())?;
        self.rows.remove(pos);
        Ok(())
    }
}

