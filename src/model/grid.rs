//! Read-only grid adapter mapping raw cell values to display output.
//!
//! The display surface queries cells by (row, column); this layer answers
//! with formatted strings and, for boolean cells, an iconographic indicator.

use crate::model::cell::{Cell, CheckIndicator};
use crate::model::table::TableGrid;
use anyhow::{bail, Result};

/// Rectangular snapshot of cell values for display.
#[derive(Debug, Clone)]
pub struct GridView {
    rows: Vec<Vec<Cell>>,
}

impl GridView {
    /// Build a view over an arbitrary grid, failing fast when any row's
    /// width differs from the first row's.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            for (index, row) in rows.iter().enumerate() {
                if row.len() != width {
                    bail!(
                        "grid shape mismatch: row {} has width {}, expected {}",
                        index,
                        row.len(),
                        width
                    );
                }
            }
        }
        Ok(Self { rows })
    }

    /// Build the full display grid for a table, with the checked flag as a
    /// boolean cell in column 0. Infallible: `TableGrid` is rectangular by
    /// construction.
    pub fn from_table(table: &TableGrid) -> Self {
        let rows = table
            .rows()
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(table.column_count());
                cells.push(Cell::Bool(row.checked));
                cells.extend(row.cells.iter().cloned());
                cells
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; 0 for an empty grid.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)
    }

    /// Formatted value at (row, col); empty for out-of-range positions.
    pub fn display_value(&self, row: usize, col: usize) -> String {
        self.cell(row, col).map(Cell::display).unwrap_or_default()
    }

    /// Indicator at (row, col); `Some` only for boolean cells.
    pub fn decoration(&self, row: usize, col: usize) -> Option<CheckIndicator> {
        self.cell(row, col)?.decoration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_rejects_ragged_grid() {
        let rows = vec![
            vec![Cell::Int(1), Cell::Int(2)],
            vec![Cell::Int(3)],
        ];
        assert!(GridView::new(rows).is_err());
    }

    #[test]
    fn test_new_accepts_rectangular_grid() {
        let rows = vec![
            vec![Cell::Int(1), Cell::Text("a".to_string())],
            vec![Cell::Float(2.0), Cell::Bool(true)],
        ];
        let view = GridView::new(rows).unwrap();
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.column_count(), 2);
    }

    #[test]
    fn test_display_values() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let view = GridView::new(vec![vec![
            Cell::Float(3.14159),
            Cell::Date(date),
            Cell::Int(7),
        ]])
        .unwrap();

        assert_eq!(view.display_value(0, 0), "3.14");
        assert_eq!(view.display_value(0, 1), "2024-01-05");
        assert_eq!(view.display_value(0, 2), "7");
        assert_eq!(view.display_value(5, 0), "");
    }

    #[test]
    fn test_decoration_only_for_bool_cells() {
        let view = GridView::new(vec![vec![Cell::Bool(true), Cell::Int(1)]]).unwrap();
        assert_eq!(view.decoration(0, 0), Some(CheckIndicator::Checked));
        assert_eq!(view.decoration(0, 1), None);
        assert_eq!(view.decoration(3, 0), None);
    }

    #[test]
    fn test_from_table_maps_checked_flag_to_column_zero() {
        let mut table = TableGrid::seeded(2, 3);
        table.toggle_checked(1);

        let view = GridView::from_table(&table);
        assert_eq!(view.column_count(), 3);
        assert_eq!(view.decoration(0, 0), Some(CheckIndicator::Unchecked));
        assert_eq!(view.decoration(1, 0), Some(CheckIndicator::Checked));
    }

    #[test]
    fn test_empty_grid() {
        let view = GridView::new(Vec::new()).unwrap();
        assert_eq!(view.row_count(), 0);
        assert_eq!(view.column_count(), 0);
    }
}
