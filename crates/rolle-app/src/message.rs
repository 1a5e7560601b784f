//! Message types for the application (TEA pattern)

use rolle_api::{Character, NameId, Place};

use crate::ctx::Generation;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Fetch Completions
    //
    // Failures never produce a message: the fetch task logs them
    // and the issuing view keeps its placeholder state.
    // ─────────────────────────────────────────────────────────
    /// Place record resolved for the panel with this generation
    PlaceLoaded {
        generation: Generation,
        place: Place,
    },

    /// Character record resolved for the panel with this generation
    CharacterLoaded {
        generation: Generation,
        character: Character,
    },

    /// Name/id listing resolved for the list with this generation
    ListLoaded {
        generation: Generation,
        items: Vec<NameId>,
    },
}
