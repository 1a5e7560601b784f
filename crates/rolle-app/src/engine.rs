//! Application engine (TEA pattern)
//!
//! The engine owns the state, the message channel, and the navigation
//! protocol: handlers request a [`NavAction`], the engine serializes the
//! token sequence into the location, records history, and re-runs the
//! panel update cascade. Fetch completions arrive over the channel and
//! are drained between frames.

use tokio::sync::mpsc;
use tracing::{debug, info};

use rolle_api::ApiClient;
use rolle_core::{Location, Result, TokenStore};

use crate::ctx::UpdateCtx;
use crate::generators;
use crate::handler::{fetch, keys, NavAction};
use crate::history::History;
use crate::message::Message;
use crate::state::AppState;

const CHANNEL_CAPACITY: usize = 256;

/// The application engine.
#[derive(Debug)]
pub struct Engine {
    state: AppState,
    ctx: UpdateCtx,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl Engine {
    /// Boot the engine at a location, materializing the panel chain its
    /// `state` parameter describes. Must run inside a tokio runtime: the
    /// chain's fetches are spawned immediately.
    pub fn new(api: ApiClient, location: Location) -> Result<Self> {
        info!(%location, "starting at");
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let ctx = UpdateCtx::new(api, tx.clone());

        let store = TokenStore::from_location(&location);
        let root = generators::root(store.cursor(), &ctx)?;
        let state = AppState::new(History::new(location), store, root);

        Ok(Self { state, ctx, tx, rx })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Sender half of the message channel, for event sources outside the
    /// main loop.
    pub fn sender(&self) -> mpsc::Sender<Message> {
        self.tx.clone()
    }

    /// Process one message to completion, including any navigation it
    /// requests.
    pub fn process_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::Key(key) => {
                if let Some(action) = keys::handle_key(&mut self.state, key) {
                    self.apply(action)?;
                }
            }
            Message::Tick => {}
            Message::Quit => {
                self.state.should_quit = true;
            }
            Message::PlaceLoaded { generation, place } => {
                fetch::place_loaded(&mut self.state, generation, place, &self.ctx);
            }
            Message::CharacterLoaded {
                generation,
                character,
            } => {
                fetch::character_loaded(&mut self.state, generation, character);
            }
            Message::ListLoaded { generation, items } => {
                fetch::list_loaded(&mut self.state, generation, items);
            }
        }
        Ok(())
    }

    /// Drain every message already sitting in the channel.
    pub fn drain_pending_messages(&mut self) -> Result<()> {
        while let Ok(message) = self.rx.try_recv() {
            self.process_message(message)?;
        }
        Ok(())
    }

    fn apply(&mut self, action: NavAction) -> Result<()> {
        match action {
            NavAction::Push => {
                let location = self
                    .state
                    .history
                    .current()
                    .with_state(&self.state.store.tokens());
                info!(%location, "navigate");
                self.state.history.push(location);
                self.update_tree()
            }
            NavAction::Back => match self.state.history.back().cloned() {
                Some(location) => self.traverse(location),
                None => {
                    debug!("history: already at the oldest entry");
                    Ok(())
                }
            },
            NavAction::Forward => match self.state.history.forward().cloned() {
                Some(location) => self.traverse(location),
                None => {
                    debug!("history: already at the newest entry");
                    Ok(())
                }
            },
        }
    }

    /// Jump to a history entry: rebuild the token store from its location
    /// and re-derive the chain from the fresh store.
    fn traverse(&mut self, location: Location) -> Result<()> {
        info!(%location, "traverse");
        self.state.store = TokenStore::from_location(&location);
        self.update_tree()
    }

    fn update_tree(&mut self) -> Result<()> {
        let cursor = self.state.store.cursor();
        self.state.root.update(cursor, &self.ctx)?;
        self.state.clamp_focus();
        Ok(())
    }
}
