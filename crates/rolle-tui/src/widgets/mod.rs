//! Widgets for the panel strip

pub mod panel;
pub mod status_bar;

pub use panel::PanelWidget;
pub use status_bar::StatusBar;
