//! Row locator: id → physical data-row position.
//!
//! The sheet has no primary-key index, so locating a row is a full scan of
//! the id column: O(n) in the size of the store, every time. Positions are
//! 1-based data rows (header excluded) and are only valid until the next
//! delete, which shifts every later row up by one.

use crate::core::codec::ColumnMap;
use crate::errors::{AppError, AppResult};
use crate::store::SheetStore;

/// Scan an already-read matrix for the row carrying `id`.
/// Legacy sheets without an id column can never match.
pub fn locate_in(matrix: &[Vec<String>], id: &str) -> Option<usize> {
    if id.is_empty() {
        return None;
    }
    let map = ColumnMap::detect(matrix);
    let id_idx = map.id_index()?;
    let start = map.data_start();
    for (offset, raw) in matrix[start..].iter().enumerate() {
        if raw.get(id_idx).is_some_and(|cell| cell == id) {
            // start is 1 exactly when a header row exists, so the
            // 1-based data position equals the matrix index
            let pos = start + offset;
            debug_assert!(pos >= 1, "locate must never address the header row");
            return Some(pos.max(1));
        }
    }
    None
}

/// Read the store and resolve `id` to its physical position.
pub fn locate(store: &dyn SheetStore, id: &str) -> AppResult<usize> {
    let matrix = store.read_all()?;
    locate_in(&matrix, id).ok_or_else(|| AppError::NotFound(format!("set '{id}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::CANONICAL_COLUMNS;
    use crate::store::MemSheet;

    fn sheet_with_ids(ids: &[&str]) -> MemSheet {
        let mut sheet = MemSheet::with_header(&CANONICAL_COLUMNS);
        for (i, id) in ids.iter().enumerate() {
            sheet.rows.push(vec![
                id.to_string(),
                format!("2024-01-01T10:0{i}:00Z"),
                "s1".into(),
                "upper_a".into(),
                "barbell_bench".into(),
                "lb".into(),
                "100".into(),
                "5".into(),
                String::new(),
                String::new(),
            ]);
        }
        sheet
    }

    #[test]
    fn finds_one_based_position_excluding_header() {
        let sheet = sheet_with_ids(&["a", "b", "c"]);
        assert_eq!(locate(&sheet, "a").unwrap(), 1);
        assert_eq!(locate(&sheet, "c").unwrap(), 3);
    }

    #[test]
    fn missing_id_is_not_found() {
        let sheet = sheet_with_ids(&["a"]);
        assert!(matches!(
            locate(&sheet, "zzz"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn empty_id_never_matches_blank_cells() {
        let mut sheet = sheet_with_ids(&["a"]);
        sheet.rows[1][0] = String::new();
        assert!(locate(&sheet, "").is_err());
    }

    #[test]
    fn legacy_sheet_without_id_column_is_not_found() {
        let sheet = MemSheet::new(vec![vec![
            "2024-01-01T10:00:00Z".into(),
            "s1".into(),
            "upper_a".into(),
            "barbell_bench".into(),
            "lb".into(),
            "100".into(),
            "5".into(),
            String::new(),
        ]]);
        assert!(locate(&sheet, "a").is_err());
    }
}
