//! # rolle-core - Core Domain Types
//!
//! Foundation crate for rolle. Provides the shared token store and cursor,
//! token parsing, the location codec, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Navigation State (`state`, `token`, `location`)
//! - [`TokenStore`] - shared, mutable ordered sequence of navigation tokens
//! - [`Cursor`] - (shared sequence, index) pair threading tokens through the
//!   panel tree
//! - [`TypeId`] - a drill-down token split into type tag and entity id
//! - [`Location`] - `path[?query][#fragment]` string with the `state`
//!   parameter codec
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod location;
pub mod logging;
pub mod state;
pub mod token;

/// Prelude for common imports used throughout all rolle crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use location::{Location, STATE_PARAM};
pub use state::{Cursor, TokenStore};
pub use token::TypeId;
