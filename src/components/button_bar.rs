//! Button bar - the action buttons, plus the lazily created extra button.
//!
//! The extra button does not exist until the first toggle; once created it
//! is drawn only in the visible state.

use crate::model::toggle::ToggleElement;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the button row.
pub fn render_button_bar(frame: &mut Frame, area: Rect, extra: ToggleElement) {
    let mut spans = vec![
        button(" a ", "Add Row", Color::Green),
        button(" d ", "Remove Row", Color::Red),
        button(" b ", "Toggle Button", Color::Cyan),
        button(" e ", "Export CSV", Color::Magenta),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    if extra.is_visible() {
        spans.push(Span::styled(
            " New Button ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}

fn button(key: &str, label: &str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}  ", label)),
    ]
}
