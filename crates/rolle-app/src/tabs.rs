//! Tab views and list content
//!
//! A [`TabView`] is the one panel element: it consumes exactly one token
//! from the cursor it is given (its active-tab index) and returns the
//! advanced cursor. Tab content is produced fresh each time a tab becomes
//! active -- list tabs re-issue their fetch, nothing is cached.

use rolle_api::NameId;
use rolle_core::{Cursor, TypeId};
use tracing::info;

use crate::ctx::{Generation, UpdateCtx};

/// How a tab materializes its content when it becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRecipe {
    /// All characters (`/characters/id,name`)
    AllCharacters,
    /// All places (`/places/id,name`), with the synthetic "No place" row
    Places,
    /// Static placeholder for the unbuilt groups view
    GroupsPlaceholder,
    /// Static placeholder, places carry no description yet
    PlaceDescription,
    /// Characters at one place (`/characters/id,name?place=...`)
    CharactersAt { place_id: i64 },
}

/// Immutable pairing of a display name and a content recipe.
#[derive(Debug, Clone)]
pub struct Tab {
    pub name: &'static str,
    pub recipe: TabRecipe,
}

impl Tab {
    pub fn new(name: &'static str, recipe: TabRecipe) -> Self {
        Self { name, recipe }
    }
}

/// The active tab's materialized content region.
#[derive(Debug)]
pub enum TabContent {
    Placeholder(&'static str),
    List(ListView),
}

/// One selectable row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub label: String,
    /// Drill-down token this row activates; `None` for the inert
    /// "No characters" row.
    pub token: Option<String>,
}

/// A fetched name/id listing with a selection.
///
/// Starts empty until its fetch resolves; a failed fetch leaves it empty
/// forever (failure is logged by the fetch task, never shown here).
#[derive(Debug)]
pub struct ListView {
    pub generation: Generation,
    pub recipe: TabRecipe,
    pub rows: Vec<ListRow>,
    pub loaded: bool,
    pub selected: usize,
}

impl ListView {
    fn new(generation: Generation, recipe: TabRecipe) -> Self {
        Self {
            generation,
            recipe,
            rows: Vec::new(),
            loaded: false,
            selected: 0,
        }
    }

    /// Fill the list from a resolved fetch.
    pub fn load(&mut self, items: Vec<NameId>) {
        self.rows = match self.recipe {
            TabRecipe::AllCharacters | TabRecipe::CharactersAt { .. } => {
                info!("got {} characters", items.len());
                if items.is_empty() {
                    vec![ListRow {
                        label: "No characters".to_string(),
                        token: None,
                    }]
                } else {
                    items
                        .into_iter()
                        .map(|c| ListRow {
                            label: c.name,
                            token: Some(TypeId::token("character", c.id)),
                        })
                        .collect()
                }
            }
            TabRecipe::Places => {
                info!("got {} places", items.len());
                let mut rows = vec![ListRow {
                    label: "No place".to_string(),
                    token: Some(TypeId::token("place", 0)),
                }];
                rows.extend(items.into_iter().map(|p| ListRow {
                    label: p.name,
                    token: Some(TypeId::token("place", p.id)),
                }));
                rows
            }
            TabRecipe::GroupsPlaceholder | TabRecipe::PlaceDescription => Vec::new(),
        };
        self.loaded = true;
        self.selected = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Token of the currently selected row, if it is activatable.
    pub fn selected_token(&self) -> Option<&str> {
        self.rows.get(self.selected)?.token.as_deref()
    }
}

/// Horizontal tab bar plus the active tab's content region.
#[derive(Debug)]
pub struct TabView {
    tabs: Vec<Tab>,
    active: usize,
    cursor: Cursor,
    content: TabContent,
}

impl TabView {
    /// Build a tab view bound to a cursor, eagerly materializing the active
    /// tab's content (spawning its fetch if the recipe needs one).
    pub fn new(cursor: Cursor, tabs: Vec<Tab>, ctx: &UpdateCtx) -> Self {
        let active = Self::resolve_active(&cursor, tabs.len());
        let content = Self::make_content(&tabs[active], ctx);
        Self {
            tabs,
            active,
            cursor,
            content,
        }
    }

    /// Active tab index from the cursor token, 0 when absent or not a
    /// number, clamped into range.
    fn resolve_active(cursor: &Cursor, tab_count: usize) -> usize {
        let index = cursor
            .value()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);
        index.min(tab_count.saturating_sub(1))
    }

    fn make_content(tab: &Tab, ctx: &UpdateCtx) -> TabContent {
        match tab.recipe {
            TabRecipe::GroupsPlaceholder => TabContent::Placeholder("Groups are listed here"),
            TabRecipe::PlaceDescription => {
                TabContent::Placeholder("This place has no description")
            }
            TabRecipe::AllCharacters => {
                let generation = ctx.next_generation();
                ctx.fetch_characters(generation);
                TabContent::List(ListView::new(generation, tab.recipe))
            }
            TabRecipe::Places => {
                let generation = ctx.next_generation();
                ctx.fetch_places(generation);
                TabContent::List(ListView::new(generation, tab.recipe))
            }
            TabRecipe::CharactersAt { place_id } => {
                let generation = ctx.next_generation();
                ctx.fetch_characters_at(generation, place_id);
                TabContent::List(ListView::new(generation, tab.recipe))
            }
        }
    }

    /// Consume one token: re-bind to the new cursor, rebuild the content
    /// region if the resolved active index changed, and return the advanced
    /// cursor regardless.
    pub fn update(&mut self, cursor: Cursor, ctx: &UpdateCtx) -> Cursor {
        let new_active = Self::resolve_active(&cursor, self.tabs.len());
        self.cursor = cursor.clone();
        if new_active != self.active {
            info!(from = self.active, to = new_active, "tab change");
            self.active = new_active;
            self.content = Self::make_content(&self.tabs[new_active], ctx);
        }
        cursor.next()
    }

    /// Write a new active-tab index through the bound cursor.
    ///
    /// Returns `true` iff the token changed; the caller then pushes a
    /// history entry and re-runs the full update cascade, which is what
    /// actually switches the content.
    pub fn select(&self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.cursor.set(index.to_string())
    }

    /// Replace the cursor tail with the selected list row's drill token.
    ///
    /// The tail slot is the one after this view's own token, so any deeper
    /// navigation state is truncated. Returns `true` when something was
    /// activated (truncation always counts as a change).
    pub fn activate_selected(&self) -> bool {
        let TabContent::List(list) = &self.content else {
            return false;
        };
        let Some(token) = list.selected_token() else {
            return false;
        };
        self.cursor.next().replace(&[token.to_string()]);
        true
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn content(&self) -> &TabContent {
        &self.content
    }

    pub fn list(&self) -> Option<&ListView> {
        match &self.content {
            TabContent::List(list) => Some(list),
            TabContent::Placeholder(_) => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ListView> {
        match &mut self.content {
            TabContent::List(list) => Some(list),
            TabContent::Placeholder(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolle_api::ApiClient;
    use rolle_core::TokenStore;
    use tokio::sync::mpsc;

    fn ctx() -> UpdateCtx {
        let api = ApiClient::from_base_url("http://127.0.0.1:1/").unwrap();
        let (tx, _rx) = mpsc::channel(32);
        UpdateCtx::new(api, tx)
    }

    fn root_tabs() -> Vec<Tab> {
        vec![
            Tab::new("Characters", TabRecipe::AllCharacters),
            Tab::new("Places", TabRecipe::Places),
            Tab::new("Groups", TabRecipe::GroupsPlaceholder),
        ]
    }

    fn store(tokens: &[&str]) -> TokenStore {
        TokenStore::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[tokio::test]
    async fn test_active_defaults_to_zero() {
        let s = store(&[]);
        let tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        assert_eq!(tv.active(), 0);
        assert!(tv.list().is_some());
    }

    #[tokio::test]
    async fn test_active_from_token() {
        let s = store(&["2"]);
        let tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        assert_eq!(tv.active(), 2);
        assert!(matches!(
            tv.content(),
            TabContent::Placeholder("Groups are listed here")
        ));
    }

    #[tokio::test]
    async fn test_out_of_range_token_is_clamped() {
        let s = store(&["9"]);
        let tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        assert_eq!(tv.active(), 2);
    }

    #[tokio::test]
    async fn test_update_always_consumes_one_token() {
        let s = store(&["0", "place5"]);
        let mut tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        let after = tv.update(s.cursor(), &ctx());
        assert_eq!(after.index(), 1);
        assert_eq!(after.value().as_deref(), Some("place5"));
    }

    #[tokio::test]
    async fn test_update_unchanged_index_keeps_content() {
        let s = store(&["0"]);
        let c = ctx();
        let mut tv = TabView::new(s.cursor(), root_tabs(), &c);
        let generation_before = tv.list().unwrap().generation;

        tv.update(s.cursor(), &c);
        assert_eq!(tv.list().unwrap().generation, generation_before);
    }

    #[tokio::test]
    async fn test_update_changed_index_rebuilds_content() {
        let s = store(&["0"]);
        let c = ctx();
        let mut tv = TabView::new(s.cursor(), root_tabs(), &c);
        let generation_before = tv.list().unwrap().generation;

        s.cursor().set("1");
        tv.update(s.cursor(), &c);
        assert_eq!(tv.active(), 1);
        // Fresh content, fresh generation: nothing is cached
        assert!(tv.list().unwrap().generation > generation_before);
        assert_eq!(tv.list().unwrap().recipe, TabRecipe::Places);
    }

    #[tokio::test]
    async fn test_select_writes_through_cursor() {
        let s = store(&["0", "place5"]);
        let tv = TabView::new(s.cursor(), root_tabs(), &ctx());

        assert!(tv.select(1));
        // The write keeps deeper tokens intact
        assert_eq!(s.tokens(), vec!["1", "place5"]);
        // Selecting the already-active tab is a no-op
        assert!(!tv.select(1));
        assert!(!tv.select(7));
    }

    #[tokio::test]
    async fn test_activate_selected_replaces_tail() {
        let s = store(&["0", "place5", "1"]);
        let mut tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        tv.list_mut().unwrap().load(vec![NameId {
            id: 7,
            name: "Alice".into(),
        }]);

        assert!(tv.activate_selected());
        assert_eq!(s.tokens(), vec!["0", "character7"]);
    }

    #[tokio::test]
    async fn test_activate_on_empty_listing_is_inert() {
        let s = store(&["0"]);
        let mut tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        tv.list_mut().unwrap().load(Vec::new());

        assert_eq!(tv.list().unwrap().rows[0].label, "No characters");
        assert!(!tv.activate_selected());
        assert_eq!(s.tokens(), vec!["0"]);
    }

    #[tokio::test]
    async fn test_places_listing_prepends_no_place() {
        let s = store(&["1"]);
        let mut tv = TabView::new(s.cursor(), root_tabs(), &ctx());
        tv.list_mut().unwrap().load(vec![NameId {
            id: 5,
            name: "Harbor".into(),
        }]);

        let list = tv.list().unwrap();
        assert_eq!(list.rows[0].label, "No place");
        assert_eq!(list.rows[0].token.as_deref(), Some("place0"));
        assert_eq!(list.rows[1].token.as_deref(), Some("place5"));
    }

    #[tokio::test]
    async fn test_list_selection_moves_and_clamps() {
        let mut list = ListView::new(1, TabRecipe::AllCharacters);
        list.load(vec![
            NameId {
                id: 1,
                name: "Alice".into(),
            },
            NameId {
                id: 2,
                name: "Bob".into(),
            },
        ]);

        list.select_previous();
        assert_eq!(list.selected, 0);
        list.select_next();
        assert_eq!(list.selected, 1);
        list.select_next();
        assert_eq!(list.selected, 1);
        assert_eq!(list.selected_token(), Some("character2"));
    }
}
