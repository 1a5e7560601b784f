//! One panel of the drill-down strip
//!
//! Bordered column titled with the panel's header. Tabbed bodies render a
//! one-line tab bar over the active tab's content; character bodies render
//! the stat table. Content that is still waiting on its fetch shows a
//! loading line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Tabs, Widget},
};
use unicode_width::UnicodeWidthStr;

use rolle_api::Character;
use rolle_app::{ListView, Panel, PanelBody, TabContent, TabView};

use crate::theme::styles;

const STAT_LABEL_WIDTH: usize = 14;

/// One panel of the drill-down strip.
pub struct PanelWidget<'a> {
    panel: &'a Panel,
    focused: bool,
}

impl<'a> PanelWidget<'a> {
    pub fn new(panel: &'a Panel, focused: bool) -> Self {
        Self { panel, focused }
    }

    fn border_style(&self) -> Style {
        if self.focused {
            styles::border_active()
        } else {
            styles::border_inactive()
        }
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                self.panel.header().to_string(),
                styles::text_primary().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        // Record panels waiting on their fetch show only their
        // "Fetching ..." title, no body
        match self.panel.body() {
            PanelBody::Tabs(tabs) => render_tabbed(tabs, inner, buf),
            PanelBody::Place { tabs: Some(tabs), .. } => render_tabbed(tabs, inner, buf),
            PanelBody::Place { tabs: None, .. } => {}
            PanelBody::Character { character: Some(character) } => {
                render_stats(character, inner, buf);
            }
            PanelBody::Character { character: None } => {}
        }
    }
}

fn render_tabbed(tabs: &TabView, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

    let names: Vec<Line> = tabs.tabs().iter().map(|t| Line::from(t.name)).collect();
    Tabs::new(names)
        .select(tabs.active())
        .style(styles::tab_inactive())
        .highlight_style(styles::tab_active())
        .render(chunks[0], buf);

    match tabs.content() {
        TabContent::Placeholder(text) => {
            Paragraph::new(*text)
                .style(styles::text_muted())
                .render(chunks[1], buf);
        }
        TabContent::List(list) => render_list(list, chunks[1], buf),
    }
}

// A list that has not loaded renders nothing: pending and failed fetches
// look the same, and neither gets a placeholder row
fn render_list(list: &ListView, area: Rect, buf: &mut Buffer) {
    if !list.loaded {
        return;
    }

    let items: Vec<ListItem> = list
        .rows
        .iter()
        .map(|row| {
            let style = if row.token.is_some() {
                styles::text_secondary()
            } else {
                styles::text_muted()
            };
            ListItem::new(Span::styled(row.label.clone(), style))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(list.selected));
    StatefulWidget::render(
        List::new(items).highlight_style(styles::list_selected()),
        area,
        buf,
        &mut state,
    );
}

fn render_stats(character: &Character, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = character
        .stat_rows()
        .iter()
        .map(|(label, value)| {
            let pad = STAT_LABEL_WIDTH.saturating_sub(label.width());
            Line::from(vec![
                Span::styled(format!("{}{}", label, " ".repeat(pad)), styles::text_secondary()),
                Span::styled(value.to_string(), styles::text_primary()),
            ])
        })
        .collect();
    Paragraph::new(lines).render(area, buf);
}
