//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the row selection down
    NextRow,
    /// Move the row selection up
    PrevRow,
    /// Jump to the first row
    FirstRow,
    /// Jump to the last row
    LastRow,
    /// Switch to the next tab
    NextTab,
    /// Switch to the previous tab
    PrevTab,
    /// Drop the row selection
    ClearSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Table Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a row to the current table
    AddRow,
    /// Remove the selected row from the current table
    RemoveRow,
    /// Flip the checked flag of the selected row
    ToggleChecked,

    // ─────────────────────────────────────────────────────────────────────────
    // Buttons & Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the lazily created extra button
    ToggleExtraButton,
    /// Export the current table to CSV
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::AddRow => write!(f, "AddRow"),
            Action::RemoveRow => write!(f, "RemoveRow"),
            Action::ToggleChecked => write!(f, "ToggleChecked"),
            Action::ToggleExtraButton => write!(f, "ToggleExtraButton"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
