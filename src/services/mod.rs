//! Services - operations against the world outside the UI

pub mod export;

pub use export::export_table;
