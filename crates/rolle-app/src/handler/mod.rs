//! Message handlers (TEA pattern)
//!
//! Handlers mutate [`AppState`](crate::state::AppState) and hand any
//! navigation side effect back to the engine as a [`NavAction`]; the engine
//! owns history pushes and the update cascade.

pub mod fetch;
pub mod keys;

/// Navigation side effect requested by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The token sequence changed: record a history entry and re-derive
    /// the panel chain.
    Push,
    /// Step back through history.
    Back,
    /// Step forward through history.
    Forward,
}
