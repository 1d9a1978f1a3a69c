//! Table state: rows of typed cells with a per-row checked flag.
//!
//! Column 0 of every table is reserved for the checked flag; the remaining
//! columns hold data cells. The equal-width invariant is enforced by
//! construction: rows enter a `TableGrid` only through the seeded
//! constructor, the validated `from_rows`, or `add_row`, all of which
//! produce exactly `column_count - 1` data cells.

use crate::model::cell::Cell;
use anyhow::{bail, Result};
use chrono::{Days, NaiveDate};

/// Row selection within a table.
///
/// An explicit sum type rather than a sentinel index, so "nothing selected"
/// is distinct from row 0 and handling it is a visible branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Row(usize),
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Row(index) => Some(index),
        }
    }

    pub fn is_none(self) -> bool {
        self == Selection::None
    }
}

/// One table row: a checked flag plus the data cells of columns 1..
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub checked: bool,
    pub cells: Vec<Cell>,
}

/// Ordered rows with a fixed total column count.
#[derive(Debug, Clone)]
pub struct TableGrid {
    column_count: usize,
    rows: Vec<Row>,
}

impl TableGrid {
    /// Build a table from existing rows, rejecting any row whose width does
    /// not match `column_count` (the checked flag counts as column 0).
    pub fn from_rows(column_count: usize, rows: Vec<Row>) -> Result<Self> {
        let data_columns = column_count.saturating_sub(1);
        for (index, row) in rows.iter().enumerate() {
            if row.cells.len() != data_columns {
                bail!(
                    "row {} has {} data cells, expected {}",
                    index,
                    row.cells.len(),
                    data_columns
                );
            }
        }
        Ok(Self { column_count, rows })
    }

    /// Build a table with deterministic seed content: every row unchecked,
    /// the trailing data columns carrying int, float, and date values so
    /// each cell kind is represented, the rest text placeholders.
    pub fn seeded(row_count: usize, column_count: usize) -> Self {
        let rows = (1..=row_count)
            .map(|position| Row {
                checked: false,
                cells: (1..column_count)
                    .map(|col| seed_cell(position, col, column_count))
                    .collect(),
            })
            .collect();
        Self { column_count, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Append a row with default content: unchecked, every data cell a text
    /// placeholder derived from the new row's 1-based position and the
    /// 1-based column index. Always succeeds.
    pub fn add_row(&mut self) {
        let position = self.rows.len() + 1;
        self.rows.push(Row {
            checked: false,
            cells: (1..self.column_count)
                .map(|col| Cell::Text(format!("Item {}-{}", position, col + 1)))
                .collect(),
        });
    }

    /// Remove and return the row at `index`, or `None` (changing nothing)
    /// when the index is out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Flip the checked flag of the row at `index`. Returns whether a flag
    /// changed; out-of-range indices change nothing.
    pub fn toggle_checked(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.checked = !row.checked;
                true
            }
            None => false,
        }
    }

    /// Number of rows currently checked.
    pub fn checked_count(&self) -> usize {
        self.rows.iter().filter(|row| row.checked).count()
    }
}

/// Seed value for 1-based row `position` at overall column `col`.
///
/// The last three data columns carry date, float, and int values; anything
/// before them is the same text placeholder `add_row` generates.
fn seed_cell(position: usize, col: usize, column_count: usize) -> Cell {
    match column_count - 1 - col {
        0 => Cell::Date(seed_date(position)),
        1 => Cell::Float(position as f64 * 2.5),
        2 => Cell::Int(position as i64 * 10),
        _ => Cell::Text(format!("Item {}-{}", position, col + 1)),
    }
}

fn seed_date(position: usize) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    base.checked_add_days(Days::new(position.saturating_sub(1) as u64))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_row_appends_unchecked_placeholder() {
        let mut table = TableGrid::seeded(10, 5);
        table.add_row();

        assert_eq!(table.row_count(), 11);
        let added = table.row(10).unwrap();
        assert!(!added.checked);
        assert_eq!(added.cells[0], Cell::Text("Item 11-2".to_string()));
        assert_eq!(added.cells[3], Cell::Text("Item 11-5".to_string()));
    }

    #[test]
    fn test_added_rows_keep_column_count() {
        let mut table = TableGrid::seeded(3, 5);
        table.add_row();
        for row in table.rows() {
            assert_eq!(row.cells.len(), table.column_count() - 1);
        }
    }

    #[test]
    fn test_remove_row_shifts_following_rows() {
        let mut table = TableGrid::seeded(10, 5);
        let former_fourth = table.row(4).unwrap().clone();

        let removed = table.remove_row(3);

        assert!(removed.is_some());
        assert_eq!(table.row_count(), 9);
        assert_eq!(table.row(3), Some(&former_fourth));
    }

    #[test]
    fn test_remove_row_out_of_range_is_noop() {
        let mut table = TableGrid::seeded(4, 5);
        assert!(table.remove_row(4).is_none());
        assert_eq!(table.row_count(), 4);
    }

    #[test]
    fn test_toggle_checked_is_involution() {
        let mut table = TableGrid::seeded(5, 5);
        let before = table.row(2).unwrap().checked;

        assert!(table.toggle_checked(2));
        assert_ne!(table.row(2).unwrap().checked, before);
        assert!(table.toggle_checked(2));
        assert_eq!(table.row(2).unwrap().checked, before);
    }

    #[test]
    fn test_toggle_checked_out_of_range_is_noop() {
        let mut table = TableGrid::seeded(2, 5);
        assert!(!table.toggle_checked(9));
        assert_eq!(table.checked_count(), 0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows = vec![
            Row {
                checked: false,
                cells: vec![Cell::Int(1), Cell::Int(2)],
            },
            Row {
                checked: false,
                cells: vec![Cell::Int(3)],
            },
        ];
        assert!(TableGrid::from_rows(3, rows).is_err());
    }

    #[test]
    fn test_seeded_covers_every_cell_kind() {
        let table = TableGrid::seeded(1, 5);
        let cells = &table.row(0).unwrap().cells;
        assert!(matches!(cells[0], Cell::Text(_)));
        assert!(matches!(cells[1], Cell::Int(_)));
        assert!(matches!(cells[2], Cell::Float(_)));
        assert!(matches!(cells[3], Cell::Date(_)));
    }

    #[test]
    fn test_selection_index() {
        assert_eq!(Selection::None.index(), None);
        assert_eq!(Selection::Row(0).index(), Some(0));
        assert!(Selection::None.is_none());
        assert!(!Selection::Row(3).is_none());
    }
}
