//! Whole-application state
//!
//! Everything the renderer needs lives here: the navigation history, the
//! shared token store, the panel chain derived from it, and which panel
//! currently has keyboard focus.

use rolle_core::TokenStore;

use crate::history::History;
use crate::panel::Panel;

/// Complete application state.
#[derive(Debug)]
pub struct AppState {
    pub history: History,
    pub store: TokenStore,
    pub root: Panel,
    /// Index into the panel chain of the panel receiving key input
    pub focus: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(history: History, store: TokenStore, root: Panel) -> Self {
        Self {
            history,
            store,
            root,
            focus: 0,
            should_quit: false,
        }
    }

    /// The panel holding keyboard focus.
    pub fn focused_panel(&self) -> &Panel {
        self.root.panel_at(self.focus).unwrap_or(&self.root)
    }

    pub fn focused_panel_mut(&mut self) -> Option<&mut Panel> {
        self.root.panel_at_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.root.chain_len() {
            self.focus += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Pull the focus back into range after the chain shrank.
    pub fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.root.chain_len() - 1);
    }
}
