//! Update context: API access, fetch spawning, and generation stamps
//!
//! Every panel and list carries a generation from a monotonically increasing
//! counter. Fetch tasks send their completion back as a message stamped with
//! the issuing component's generation; a completion whose generation no
//! longer exists in the live tree is stale and gets dropped. This is the
//! explicit cancellation the DOM original lacked: a torn-down panel can
//! never be mutated by a fetch that outlived it.

use std::cell::Cell;
use std::rc::Rc;

use tokio::sync::mpsc;
use tracing::error;

use rolle_api::ApiClient;

use crate::message::Message;

/// Generation stamp tying a fetch completion to the component that issued it.
pub type Generation = u64;

/// Context threaded through the panel update cascade.
///
/// Cheap to clone; the generation counter is shared between clones.
#[derive(Debug, Clone)]
pub struct UpdateCtx {
    api: ApiClient,
    tx: mpsc::Sender<Message>,
    generations: Rc<Cell<Generation>>,
}

impl UpdateCtx {
    pub fn new(api: ApiClient, tx: mpsc::Sender<Message>) -> Self {
        Self {
            api,
            tx,
            generations: Rc::new(Cell::new(0)),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Hand out the next generation stamp.
    pub fn next_generation(&self) -> Generation {
        let generation = self.generations.get() + 1;
        self.generations.set(generation);
        generation
    }

    /// Spawn a fetch of one full place record.
    pub fn fetch_place(&self, generation: Generation, id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match api.place(id).await {
                Ok(place) => {
                    let _ = tx.send(Message::PlaceLoaded { generation, place }).await;
                }
                Err(e) => error!("place {} fetch failed: {}", id, e),
            }
        });
    }

    /// Spawn a fetch of one full character record.
    pub fn fetch_character(&self, generation: Generation, id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match api.character(id).await {
                Ok(character) => {
                    let _ = tx
                        .send(Message::CharacterLoaded {
                            generation,
                            character,
                        })
                        .await;
                }
                Err(e) => error!("character {} fetch failed: {}", id, e),
            }
        });
    }

    /// Spawn a fetch of the all-characters listing.
    pub fn fetch_characters(&self, generation: Generation) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match api.characters().await {
                Ok(items) => {
                    let _ = tx.send(Message::ListLoaded { generation, items }).await;
                }
                Err(e) => error!("characters fetch failed: {}", e),
            }
        });
    }

    /// Spawn a fetch of the characters-at-place listing.
    pub fn fetch_characters_at(&self, generation: Generation, place_id: i64) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match api.characters_at(place_id).await {
                Ok(items) => {
                    let _ = tx.send(Message::ListLoaded { generation, items }).await;
                }
                Err(e) => error!("characters at place {} fetch failed: {}", place_id, e),
            }
        });
    }

    /// Spawn a fetch of the places listing.
    pub fn fetch_places(&self, generation: Generation) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match api.places().await {
                Ok(items) => {
                    let _ = tx.send(Message::ListLoaded { generation, items }).await;
                }
                Err(e) => error!("places fetch failed: {}", e),
            }
        });
    }
}
