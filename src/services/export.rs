//! CSV export of table data.
//!
//! Writes the display values of a grid, one record per row with a generated
//! header, to `<tab-label>.csv` in the working directory.

use crate::model::grid::GridView;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Export a table's display grid to CSV. Returns the path written.
pub fn export_table(label: &str, view: &GridView) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}.csv", sanitize_label(label)));
    let file =
        File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, view)?;
    Ok(path)
}

/// Write the grid to any writer. Column 0 is the checked flag.
pub fn write_csv<W: Write>(writer: W, view: &GridView) -> Result<()> {
    let columns = view.column_count();
    if columns == 0 {
        return Ok(());
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    let headers: Vec<String> = (0..columns).map(column_header).collect();
    csv_writer.write_record(&headers)?;

    for row in 0..view.row_count() {
        let record: Vec<String> = (0..columns)
            .map(|col| view.display_value(row, col))
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn column_header(col: usize) -> String {
    if col == 0 {
        "checked".to_string()
    } else {
        format!("column_{}", col + 1)
    }
}

/// Derive a filesystem-friendly file stem from a tab label.
fn sanitize_label(label: &str) -> String {
    let stem: String = label
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let stem = stem.trim_matches('-').to_string();
    if stem.is_empty() {
        "table".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::TableGrid;

    #[test]
    fn test_write_csv_headers_and_rows() {
        let mut table = TableGrid::seeded(2, 5);
        table.toggle_checked(0);
        let view = GridView::from_table(&table);

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &view).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("checked,column_2,column_3,column_4,column_5")
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("true,Item 1-2,"));
        assert!(first.contains("2.50"));
        assert!(first.ends_with("2024-01-01"));
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn test_write_csv_empty_grid() {
        let view = GridView::from_table(&TableGrid::seeded(0, 5));
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &view).unwrap();
        // No first row to take a width from, so nothing is written.
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(sanitize_label("Table 1"), "table-1");
        assert_eq!(sanitize_label("  My / Data  "), "my---data");
        assert_eq!(sanitize_label("///"), "table");
    }
}
