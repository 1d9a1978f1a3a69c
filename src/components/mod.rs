//! UI Components
//!
//! Each component encapsulates its own event handling and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod button_bar;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod table;

pub use button_bar::render_button_bar;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use table::render_table;
