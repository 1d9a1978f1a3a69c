//! Table view for the current tab.
//!
//! Renders the display grid with computed column widths, the check column
//! as its indicator glyph, and the selected row highlighted.

use crate::model::cell::CheckIndicator;
use crate::model::domain::TabPane;
use crate::model::grid::GridView;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell as ViewCell, Row as ViewRow, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Cap on any single column so one long cell cannot crowd out the rest.
const MAX_COLUMN_WIDTH: usize = 24;

/// Render the tab's table into `area`.
pub fn render_table(frame: &mut Frame, area: Rect, pane: &TabPane) {
    let view = GridView::from_table(&pane.grid);
    let headers = column_headers(view.column_count());
    let widths = column_widths(&view, &headers);

    let header = ViewRow::new(
        headers
            .iter()
            .map(|title| {
                ViewCell::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect::<Vec<_>>(),
    );

    let rows: Vec<ViewRow> = (0..view.row_count())
        .map(|row| {
            let cells: Vec<ViewCell> = (0..view.column_count())
                .map(|col| match view.decoration(row, col) {
                    Some(indicator) => {
                        let color = if indicator == CheckIndicator::Checked {
                            Color::Green
                        } else {
                            Color::DarkGray
                        };
                        ViewCell::from(Span::styled(
                            indicator.glyph(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ))
                    }
                    None => ViewCell::from(Span::styled(
                        view.display_value(row, col),
                        Style::default().fg(Color::White),
                    )),
                })
                .collect();
            ViewRow::new(cells)
        })
        .collect();

    let title = format!(
        " {} ({} rows, {} checked) ",
        pane.label,
        pane.grid.row_count(),
        pane.grid.checked_count()
    );

    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|&width| Constraint::Length(width))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(pane.selection.index());
    frame.render_stateful_widget(table, area, &mut state);
}

/// Generated header titles: the check column, then 1-based column labels.
pub fn column_headers(columns: usize) -> Vec<String> {
    (0..columns)
        .map(|col| {
            if col == 0 {
                "✓".to_string()
            } else {
                format!("Col {}", col + 1)
            }
        })
        .collect()
}

/// Per-column display widths: the widest of header and cells, capped.
pub fn column_widths(view: &GridView, headers: &[String]) -> Vec<u16> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let mut width = header.width();
            for row in 0..view.row_count() {
                width = width.max(view.display_value(row, col).width());
            }
            width.min(MAX_COLUMN_WIDTH) as u16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::Cell;
    use crate::model::table::TableGrid;

    #[test]
    fn test_column_widths_cover_longest_cell() {
        let table = TableGrid::seeded(10, 5);
        let view = GridView::from_table(&table);
        let headers = column_headers(view.column_count());
        let widths = column_widths(&view, &headers);

        assert_eq!(widths.len(), 5);
        // "Item 10-2" is wider than the "Col 2" header
        assert_eq!(widths[1], "Item 10-2".len() as u16);
        // Date column: "2024-01-10" is 10 wide
        assert_eq!(widths[4], 10);
    }

    #[test]
    fn test_column_widths_are_capped() {
        let long = "x".repeat(100);
        let view = GridView::new(vec![vec![Cell::Text(long)]]).unwrap();
        let headers = column_headers(1);
        let widths = column_widths(&view, &headers);
        assert_eq!(widths[0], MAX_COLUMN_WIDTH as u16);
    }

    #[test]
    fn test_column_headers_shape() {
        let headers = column_headers(3);
        assert_eq!(headers, vec!["✓", "Col 2", "Col 3"]);
    }
}
