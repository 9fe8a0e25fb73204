//! CSV-file-backed sheet store.
//!
//! One CSV file is the whole store. Point writes and deletes are a full
//! read-modify-write of the file, mirroring the range-rewrite semantics of
//! a remote sheet API: there is no locking, and two concurrent mutations
//! against the same file race.

use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::store::sheet::{SheetStore, validate_data_pos};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    /// Open an existing sheet file. Fails when the file is missing so a
    /// forgotten `init` surfaces as a clear store error instead of an
    /// empty-history lie.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            return Err(AppError::StoreUnavailable(format!(
                "sheet file not found: {} (run `rsetlogger init` first)",
                p.display()
            )));
        }
        Ok(Self { path: p.to_path_buf() })
    }

    /// Create a new sheet file with the canonical header row. Leaves an
    /// existing file untouched.
    pub fn create(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.exists() {
            if let Some(parent) = p.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let mut wtr = csv::Writer::from_path(p)?;
            wtr.write_record(codec::CANONICAL_COLUMNS)?;
            wtr.flush()?;
        }
        Ok(Self { path: p.to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AppResult<Vec<Vec<String>>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;

        let mut out = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            out.push(rec.iter().map(|c| c.to_string()).collect());
        }
        Ok(out)
    }

    fn save(&self, matrix: &[Vec<String>]) -> AppResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        for row in matrix {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl SheetStore for CsvSheet {
    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        self.load()
    }

    fn append(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(file);
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_row(&mut self, pos: usize, row: &[String]) -> AppResult<()> {
        let mut matrix = self.load()?;
        validate_data_pos(pos, matrix.len())?;
        matrix[pos] = row.to_vec();
        self.save(&matrix)
    }

    fn delete_row(&mut self, pos: usize) -> AppResult<()> {
        let mut matrix = self.load()?;
        validate_data_pos(pos, matrix.len())?;
        matrix.remove(pos);
        self.save(&matrix)
    }
}
