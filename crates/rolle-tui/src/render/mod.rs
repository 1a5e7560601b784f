//! Frame composition
//!
//! Walks the panel chain left to right and renders each panel into its
//! strip column, then the status bar underneath.

use ratatui::Frame;

use rolle_app::AppState;

use crate::layout;
use crate::widgets::{PanelWidget, StatusBar};

/// Render one frame of the whole application.
pub fn view(frame: &mut Frame, state: &AppState, panel_width: u16) {
    let areas = layout::create(frame.area());
    let columns = layout::panel_columns(areas.panels, state.root.chain_len(), panel_width);

    for (index, column) in columns.into_iter().enumerate() {
        if column.width == 0 {
            continue;
        }
        if let Some(panel) = state.root.panel_at(index) {
            frame.render_widget(PanelWidget::new(panel, index == state.focus), column);
        }
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}
