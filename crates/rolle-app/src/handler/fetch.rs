//! Fetch completion handling
//!
//! Completions carry the generation stamp of the component that issued the
//! fetch. Anything torn down between issue and completion fails delivery
//! and is dropped with a debug log; a late response must never resurrect
//! state the user has already navigated away from.

use rolle_api::{Character, NameId, Place};
use tracing::debug;

use crate::ctx::{Generation, UpdateCtx};
use crate::state::AppState;

pub fn place_loaded(state: &mut AppState, generation: Generation, place: Place, ctx: &UpdateCtx) {
    debug!(generation, id = place.id, "place record resolved");
    if !state.root.apply_place(generation, place, ctx) {
        debug!(generation, "stale place completion dropped");
    }
}

pub fn character_loaded(state: &mut AppState, generation: Generation, character: Character) {
    debug!(generation, id = character.id, "character record resolved");
    if !state.root.apply_character(generation, character) {
        debug!(generation, "stale character completion dropped");
    }
}

pub fn list_loaded(state: &mut AppState, generation: Generation, items: Vec<NameId>) {
    debug!(generation, count = items.len(), "listing resolved");
    if !state.root.apply_list(generation, items) {
        debug!(generation, "stale listing completion dropped");
    }
}
