//! Home component - Main application screen
//!
//! Maps keys to actions and renders the tab strip, table view, button bar,
//! status bar, and help bar. All table and selection state lives in
//! `DomainState`; this component is a pure view over it.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, render_button_bar, render_table};
use crate::model::domain::DomainState;
use crate::model::table::Selection;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Home component for the main application view
pub struct HomeComponent;

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::FirstRow),
            KeyCode::Char('G') => Some(Action::LastRow),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Esc => Some(Action::ClearSelection),

            // Table operations
            KeyCode::Char(' ') => Some(Action::ToggleChecked),
            KeyCode::Char('a') => Some(Action::AddRow),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::RemoveRow),

            // Buttons & export
            KeyCode::Char('b') => Some(Action::ToggleExtraButton),
            KeyCode::Char('e') => Some(Action::ExportCsv),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub domain: &'a DomainState,
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Draw the home screen
pub fn draw_home_screen(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_tabs(frame, layout.tabs, ctx.domain);
    render_table(frame, layout.table, ctx.domain.current());
    render_button_bar(frame, layout.buttons, ctx.domain.extra_button);
    render_status_bar(frame, layout.status, ctx);
    render_help_bar(frame, layout.help);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, domain: &DomainState) {
    let titles: Vec<&str> = domain.tabs().iter().map(|tab| tab.label.as_str()).collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(domain.active_tab())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let pane = ctx.domain.current();
    let mut spans = vec![
        Span::styled(
            format!(" {} ", pane.label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} rows, {} checked", pane.grid.row_count(), pane.grid.checked_count()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
    ];

    match pane.selection {
        Selection::None => spans.push(Span::styled(
            "no selection",
            Style::default().fg(Color::DarkGray),
        )),
        Selection::Row(index) => spans.push(Span::styled(
            format!("row {} selected", index + 1),
            Style::default().fg(Color::Cyan),
        )),
    }

    // Error message if present
    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    // Status message if present
    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!("  {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " j/k ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Rows "),
        Span::styled(
            " Tab ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Tables "),
        Span::styled(
            " Space ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Check "),
        Span::styled(
            " a ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Add "),
        Span::styled(
            " d ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Remove "),
        Span::styled(
            " b ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Button "),
        Span::styled(
            " e ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Export "),
        Span::styled(
            " ? ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Help "),
        Span::styled(
            " q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit"),
    ];

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}
