//! Status bar widget
//!
//! One line at the bottom: the current location string on the left, key
//! hints on the right. The location is the shareable form of the whole
//! navigation state, so it stays visible at all times.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use rolle_app::AppState;

use crate::theme::styles;

const KEY_HINTS: &str = "\u{2190}/\u{2192} tabs  \u{2191}/\u{2193} select  enter open  tab focus  b/f history  q quit";

/// Status bar showing the current location and key hints
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let location = self.state.history.current().to_string();
        let used = location.width() + KEY_HINTS.width();
        let gap = (area.width as usize).saturating_sub(used).max(2);

        let line = Line::from(vec![
            Span::styled(location, styles::location()),
            Span::raw(" ".repeat(gap)),
            Span::styled(KEY_HINTS, styles::keybinding()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
