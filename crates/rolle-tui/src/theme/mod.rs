//! Centralized theme for the panel strip.
//!
//! - `palette` -- raw color constants
//! - `styles` -- semantic style builder functions

pub mod palette;
pub mod styles;
