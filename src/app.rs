//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App is intentionally lean - table semantics live in the
//! model layer; App only routes actions to it.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::grid::GridView;
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, warn};

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (tables, tabs, selection, extra button)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance from the saved config, or defaults.
    pub fn new() -> App {
        Self::with_config(&Config::load().unwrap_or_default())
    }

    pub fn with_config(config: &Config) -> App {
        App {
            domain: DomainState::new(&config.tab_labels, config.initial_rows, config.columns),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            home: HomeComponent,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn export_current_table(&mut self) {
        let pane = self.domain.current();
        let view = GridView::from_table(&pane.grid);
        match services::export_table(&pane.label, &view) {
            Ok(path) => {
                self.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "csv export failed");
                self.error = Some(format!("Export failed: {}", e));
            }
        }
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help { .. }) => self.help_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // Transient messages describe the previous operation only.
        if !matches!(action, Action::Tick | Action::Resize(_, _)) {
            self.status_message = None;
            self.error = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to DomainState)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow => self.domain.current_mut().select_next(),
            Action::PrevRow => self.domain.current_mut().select_previous(),
            Action::FirstRow => self.domain.current_mut().select_first(),
            Action::LastRow => self.domain.current_mut().select_last(),
            Action::NextTab => self.domain.next_tab(),
            Action::PrevTab => self.domain.previous_tab(),
            Action::ClearSelection => self.domain.current_mut().clear_selection(),

            // ─────────────────────────────────────────────────────────────────
            // Table Operations
            // ─────────────────────────────────────────────────────────────────
            Action::AddRow => {
                self.domain.current_mut().grid.add_row();
                debug!(
                    rows = self.domain.current().grid.row_count(),
                    "row added"
                );
            }
            Action::RemoveRow => {
                if !self.domain.current_mut().remove_selected() {
                    debug!("remove ignored: no row selected");
                }
            }
            Action::ToggleChecked => {
                self.domain.current_mut().toggle_selected();
            }

            // ─────────────────────────────────────────────────────────────────
            // Buttons & Export
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleExtraButton => {
                self.domain.toggle_extra_button();
                debug!(state = ?self.domain.extra_button, "extra button toggled");
            }
            Action::ExportCsv => self.export_current_table(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            domain: &self.domain,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };
        draw_home_screen(frame, area, &ctx)?;

        // Draw modal overlay if active
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help { .. }) => self.help_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::Selection;
    use crate::model::toggle::ToggleElement;

    fn test_app() -> App {
        App::with_config(&Config::default())
    }

    #[test]
    fn test_add_row_action_grows_current_table() {
        let mut app = test_app();
        let before = app.domain.current().grid.row_count();

        app.update(Action::AddRow).unwrap();

        assert_eq!(app.domain.current().grid.row_count(), before + 1);
    }

    #[test]
    fn test_remove_row_action_without_selection_is_noop() {
        let mut app = test_app();
        let before = app.domain.current().grid.row_count();

        app.update(Action::RemoveRow).unwrap();

        assert_eq!(app.domain.current().grid.row_count(), before);
    }

    #[test]
    fn test_select_then_remove() {
        let mut app = test_app();
        let before = app.domain.current().grid.row_count();

        app.update(Action::NextRow).unwrap();
        app.update(Action::NextRow).unwrap();
        assert_eq!(app.domain.current().selection, Selection::Row(1));

        app.update(Action::RemoveRow).unwrap();
        assert_eq!(app.domain.current().grid.row_count(), before - 1);
        assert_eq!(app.domain.current().selection, Selection::None);
    }

    #[test]
    fn test_toggle_extra_button_cycle() {
        let mut app = test_app();
        app.update(Action::ToggleExtraButton).unwrap();
        assert_eq!(app.domain.extra_button, ToggleElement::Visible);
        app.update(Action::ToggleExtraButton).unwrap();
        assert_eq!(app.domain.extra_button, ToggleElement::Hidden);
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = test_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
