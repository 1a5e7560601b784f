//! rolle-api - REST client for the rested server
//!
//! Thin async wrapper over the read-only JSON endpoints:
//! `/characters/id,name`, `/characters/<id>`, `/places/id,name`,
//! `/places/<id>`. Shapes are defined in [`types`]; the client itself never
//! retries and surfaces failures as `rolle_core::Error`.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{Character, NameId, Place};
