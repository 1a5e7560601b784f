//! Panel generators, keyed by token tag
//!
//! A generator turns a `tag<id>` token into a fully wired panel: it spawns
//! whatever record fetch the panel needs and cascades into deeper tokens
//! where the panel kind supports drilling further. The registry maps each
//! capability tag to its generator; a tag with no generator is a hard
//! error, such a token never appears on a reachable navigation path.

use std::collections::HashMap;
use std::sync::OnceLock;

use rolle_api::Place;
use rolle_core::{Cursor, Error, Result};

use crate::ctx::UpdateCtx;
use crate::panel::{Panel, PanelBody};
use crate::tabs::{Tab, TabRecipe, TabView};

/// Builds the panel for one `tag<id>` token at the given cursor position.
pub type GeneratorFn = fn(&UpdateCtx, i64, Cursor) -> Result<Panel>;

fn registry() -> &'static HashMap<&'static str, GeneratorFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, GeneratorFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, GeneratorFn> = HashMap::new();
        map.insert("place", place_panel);
        map.insert("character", character_panel);
        map
    })
}

/// Generator registered for the given tag, if any.
pub fn lookup(tag: &str) -> Option<GeneratorFn> {
    registry().get(tag).copied()
}

/// Build the root panel over the whole token sequence.
///
/// Not part of the registry: the root is never named by a token, its
/// cursor position holds the active-tab index directly.
pub fn root(cursor: Cursor, ctx: &UpdateCtx) -> Result<Panel> {
    let tabs = TabView::new(
        cursor.clone(),
        vec![
            Tab::new("Characters", TabRecipe::AllCharacters),
            Tab::new("Places", TabRecipe::Places),
            Tab::new("Groups", TabRecipe::GroupsPlaceholder),
        ],
        ctx,
    );
    let mut panel = Panel::new("root", 0, 0, cursor.clone(), PanelBody::Tabs(tabs));
    panel.update_next(cursor.next(), ctx)?;
    Ok(panel)
}

/// Tab groups of a place panel. Description sits at index 0; tab indexes
/// are encoded positionally in the location, so the order is part of the
/// deep-link contract.
pub(crate) fn place_tabs(place_id: i64) -> Vec<Tab> {
    vec![
        Tab::new("Description", TabRecipe::PlaceDescription),
        Tab::new("Characters", TabRecipe::CharactersAt { place_id }),
    ]
}

/// Place panel: record header, characters-at-place and description tabs,
/// and a further drill-down slot two tokens deeper.
///
/// The tab view is only built once the record is known (synchronously for
/// the id 0 sentinel); the drill-down cascade runs immediately either way.
fn place_panel(ctx: &UpdateCtx, id: i64, cursor: Cursor) -> Result<Panel> {
    if id < 0 {
        return Err(Error::InvalidPlaceId { id });
    }

    let generation = ctx.next_generation();
    let (place, tabs) = if id == 0 {
        // Sentinel for "no specific place", nothing to fetch
        let place = Place {
            id: 0,
            name: "No place".to_string(),
        };
        let tabs = TabView::new(cursor.next(), place_tabs(0), ctx);
        (Some(place), Some(tabs))
    } else {
        ctx.fetch_place(generation, id);
        (None, None)
    };

    let mut panel = Panel::new(
        "place",
        id,
        generation,
        cursor.clone(),
        PanelBody::Place { place, tabs },
    );
    panel.update_next(cursor.next().next(), ctx)?;
    Ok(panel)
}

/// Character panel: a stat table under the record's name. Nothing drills
/// deeper than a character.
fn character_panel(ctx: &UpdateCtx, id: i64, cursor: Cursor) -> Result<Panel> {
    let generation = ctx.next_generation();
    ctx.fetch_character(generation, id);
    Ok(Panel::new(
        "character",
        id,
        generation,
        cursor,
        PanelBody::Character { character: None },
    ))
}
