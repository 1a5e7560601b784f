//! rolle-tui - Terminal interface for rolle
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from rolle-app and adds terminal rendering, event polling, and
//! the panel strip widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
