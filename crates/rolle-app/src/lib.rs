//! Application logic for the rolle browser
//!
//! Message-driven core (TEA pattern): the [`Engine`] owns the
//! [`AppState`], processes [`Message`]s from the terminal and from fetch
//! tasks, and keeps the panel chain in sync with the token sequence that
//! also lives in the location string.

pub mod config;
pub mod ctx;
pub mod engine;
pub mod generators;
pub mod handler;
pub mod history;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod state;
pub mod tabs;

pub use config::{default_config_path, load_settings, Settings};
pub use ctx::{Generation, UpdateCtx};
pub use engine::Engine;
pub use history::History;
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{Panel, PanelBody};
pub use state::AppState;
pub use tabs::{ListRow, ListView, Tab, TabContent, TabRecipe, TabView};
