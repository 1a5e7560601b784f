//! Screen layout for the panel strip
//!
//! Panels sit side by side in a horizontal strip of fixed-width columns.
//! When the strip outgrows the viewport the strip slides left so the
//! newest (rightmost) panel stays fully visible; columns pushed off the
//! left edge are clipped or dropped.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// The panel strip
    pub panels: Rect,

    /// One-line status bar at the bottom
    pub status: Rect,
}

/// Split the screen into the panel strip and the status bar.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    ScreenAreas {
        panels: chunks[0],
        status: chunks[1],
    }
}

/// Column rectangles for a chain of `count` panels, rightmost panel
/// anchored inside `area`. Fully hidden columns come back zero-width.
pub fn panel_columns(area: Rect, count: usize, panel_width: u16) -> Vec<Rect> {
    let strip_width = panel_width as u32 * count as u32;
    let overflow = strip_width.saturating_sub(area.width as u32);

    (0..count)
        .map(|i| {
            let start = i as u32 * panel_width as u32;
            let end = start + panel_width as u32;
            // Shift the strip left by the overflow, clip at the viewport edge
            let visible_start = start.saturating_sub(overflow).min(area.width as u32);
            let visible_end = end.saturating_sub(overflow).min(area.width as u32);
            Rect {
                x: area.x + visible_start as u16,
                y: area.y,
                width: (visible_end - visible_start) as u16,
                height: area.height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_is_one_row() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.panels.height, 23);
    }

    #[test]
    fn test_columns_fit_without_overflow() {
        let area = Rect::new(0, 0, 100, 20);
        let cols = panel_columns(area, 2, 40);
        assert_eq!(cols[0], Rect::new(0, 0, 40, 20));
        assert_eq!(cols[1], Rect::new(40, 0, 40, 20));
    }

    #[test]
    fn test_overflow_keeps_rightmost_panel_visible() {
        let area = Rect::new(0, 0, 70, 20);
        let cols = panel_columns(area, 2, 40);
        // Strip is 80 wide, shifted left by 10
        assert_eq!(cols[0], Rect::new(0, 0, 30, 20));
        assert_eq!(cols[1], Rect::new(30, 0, 40, 20));
    }

    #[test]
    fn test_far_left_panels_collapse_to_zero_width() {
        let area = Rect::new(0, 0, 50, 20);
        let cols = panel_columns(area, 3, 40);
        assert_eq!(cols[0].width, 0);
        assert_eq!(cols[1].width, 30);
        assert_eq!(cols[2], Rect::new(10, 0, 40, 20));
    }

    #[test]
    fn test_offset_area_is_respected() {
        let area = Rect::new(5, 3, 100, 10);
        let cols = panel_columns(area, 1, 40);
        assert_eq!(cols[0], Rect::new(5, 3, 40, 10));
    }
}
