//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Cell` / `GridView` - typed cell values and their display adapter
//! - `TableGrid` / `Selection` - table rows and explicit row selection
//! - `DomainState` - the tab collection and the extra toggle button
//! - `ModalStack` - modal overlay management

pub mod cell;
pub mod domain;
pub mod grid;
pub mod modal;
pub mod table;
pub mod toggle;

// Re-export commonly used types
pub use cell::{Cell, CheckIndicator};
pub use domain::{DomainState, TabPane};
pub use grid::GridView;
pub use modal::{Modal, ModalStack};
pub use table::{Row, Selection, TableGrid};
pub use toggle::ToggleElement;
