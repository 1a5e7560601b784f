//! The drill-down panel chain
//!
//! Panels form a singly linked chain growing to the right. Each panel owns
//! the cursor position of the token that created it, a body (tab bar plus
//! content, or a record view), and maybe a next panel. `update` re-binds
//! the panel to the current cursor and cascades down the chain;
//! `update_next` decides whether the next panel survives, gets replaced, or
//! goes away, based on the tag of the next unconsumed token.

use rolle_api::{Character, NameId, Place};
use rolle_core::{Cursor, Error, Result};
use tracing::debug;

use crate::ctx::{Generation, UpdateCtx};
use crate::generators;
use crate::tabs::TabView;

/// What a panel displays under its header.
#[derive(Debug)]
pub enum PanelBody {
    /// Top-level tab groups (the root panel)
    Tabs(TabView),

    /// A place: header record plus its own tab groups
    Place {
        /// `None` until the record fetch resolves
        place: Option<Place>,
        /// Built once the record is available; the sentinel place builds
        /// its tabs synchronously
        tabs: Option<TabView>,
    },

    /// A character record's stat table
    Character {
        /// `None` until the record fetch resolves
        character: Option<Character>,
    },
}

/// One panel of the drill-down chain.
#[derive(Debug)]
pub struct Panel {
    tag: &'static str,
    id: i64,
    generation: Generation,
    cursor: Cursor,
    body: PanelBody,
    next: Option<Box<Panel>>,
}

impl Panel {
    pub(crate) fn new(
        tag: &'static str,
        id: i64,
        generation: Generation,
        cursor: Cursor,
        body: PanelBody,
    ) -> Self {
        Self {
            tag,
            id,
            generation,
            cursor,
            body,
            next: None,
        }
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn body(&self) -> &PanelBody {
        &self.body
    }

    pub fn next(&self) -> Option<&Panel> {
        self.next.as_deref()
    }

    /// Header line for rendering. Record panels show a fetching placeholder
    /// until their record resolves.
    pub fn header(&self) -> &str {
        match &self.body {
            PanelBody::Tabs(_) => "Rolle",
            PanelBody::Place { place, .. } => {
                place.as_ref().map_or("Fetching place", |p| &p.name)
            }
            PanelBody::Character { character } => {
                character.as_ref().map_or("Fetching character", |c| &c.name)
            }
        }
    }

    /// The tab view of this panel's body, if it has one yet.
    pub fn tabs(&self) -> Option<&TabView> {
        match &self.body {
            PanelBody::Tabs(tabs) => Some(tabs),
            PanelBody::Place { tabs, .. } => tabs.as_ref(),
            PanelBody::Character { .. } => None,
        }
    }

    pub fn tabs_mut(&mut self) -> Option<&mut TabView> {
        match &mut self.body {
            PanelBody::Tabs(tabs) => Some(tabs),
            PanelBody::Place { tabs, .. } => tabs.as_mut(),
            PanelBody::Character { .. } => None,
        }
    }

    /// Number of panels in the chain starting here.
    pub fn chain_len(&self) -> usize {
        1 + self.next.as_deref().map_or(0, Panel::chain_len)
    }

    /// Panel at `index` steps down the chain from this one.
    pub fn panel_at(&self, index: usize) -> Option<&Panel> {
        if index == 0 {
            return Some(self);
        }
        self.next.as_deref()?.panel_at(index - 1)
    }

    pub fn panel_at_mut(&mut self, index: usize) -> Option<&mut Panel> {
        if index == 0 {
            return Some(self);
        }
        self.next.as_deref_mut()?.panel_at_mut(index - 1)
    }

    /// Re-derive this panel and everything below it from the cursor.
    ///
    /// The panel does not re-read its own token: a token at the same depth
    /// with the same tag always re-binds the existing panel, id included.
    pub fn update(&mut self, cursor: Cursor, ctx: &UpdateCtx) -> Result<()> {
        self.cursor = cursor.clone();
        match &mut self.body {
            PanelBody::Tabs(tabs) => {
                let after = tabs.update(cursor, ctx);
                self.update_next(after, ctx)
            }
            PanelBody::Place { tabs, .. } => {
                // The tab-index slot stays reserved whether or not the tab
                // view exists yet, so deeper drill-down is independent of
                // the record fetch
                if let Some(tabs) = tabs {
                    tabs.update(cursor.next(), ctx);
                }
                self.update_next(cursor.next().next(), ctx)
            }
            PanelBody::Character { .. } => Ok(()),
        }
    }

    /// Reconcile the next panel with the token at `cursor`.
    ///
    /// Same tag: the existing panel is kept and re-bound, even when the id
    /// in the token differs. Different tag: the old panel is dropped and a
    /// fresh one generated from the tag registry. No token, or a token
    /// without a tag, ends the chain here; a tag with no registered
    /// generator is a hard error, it never occurs on a reachable
    /// navigation path.
    pub(crate) fn update_next(&mut self, cursor: Cursor, ctx: &UpdateCtx) -> Result<()> {
        let Some(type_id) = cursor.type_id() else {
            self.next = None;
            return Ok(());
        };
        if type_id.tag.is_empty() {
            self.next = None;
            return Ok(());
        }

        if self.next.as_deref().map(Panel::tag) == Some(type_id.tag.as_str()) {
            if let Some(next) = self.next.as_deref_mut() {
                next.update(cursor, ctx)?;
            }
            return Ok(());
        }

        self.next = None;
        let generator = generators::lookup(&type_id.tag)
            .ok_or_else(|| Error::unknown_panel_tag(&type_id.tag))?;
        let panel = generator(ctx, type_id.id, cursor)?;
        debug!(tag = %type_id.tag, id = type_id.id, "panel generated");
        self.next = Some(Box::new(panel));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Fetch Completion Delivery
    //
    // Completions address their target by generation; a stamp
    // that matches nothing in the live chain is stale and the
    // delivery reports false.
    // ─────────────────────────────────────────────────────────

    /// Deliver a resolved place record to the panel that asked for it,
    /// building its tab groups now that the record is known.
    pub fn apply_place(&mut self, generation: Generation, record: Place, ctx: &UpdateCtx) -> bool {
        if self.generation == generation {
            if let PanelBody::Place { place, tabs } = &mut self.body {
                if tabs.is_none() {
                    *tabs = Some(TabView::new(
                        self.cursor.next(),
                        generators::place_tabs(self.id),
                        ctx,
                    ));
                }
                *place = Some(record);
                return true;
            }
            return false;
        }
        match self.next.as_deref_mut() {
            Some(next) => next.apply_place(generation, record, ctx),
            None => false,
        }
    }

    /// Deliver a resolved character record to the panel that asked for it.
    pub fn apply_character(&mut self, generation: Generation, record: Character) -> bool {
        if self.generation == generation {
            if let PanelBody::Character { character } = &mut self.body {
                *character = Some(record);
                return true;
            }
            return false;
        }
        match self.next.as_deref_mut() {
            Some(next) => next.apply_character(generation, record),
            None => false,
        }
    }

    /// Deliver a resolved name/id listing to the list that asked for it.
    pub fn apply_list(&mut self, generation: Generation, items: Vec<NameId>) -> bool {
        if let Some(list) = self.tabs_mut().and_then(TabView::list_mut) {
            if list.generation == generation {
                list.load(items);
                return true;
            }
        }
        match self.next.as_deref_mut() {
            Some(next) => next.apply_list(generation, items),
            None => false,
        }
    }
}
