//! Saves and restores the whole board through a single storage slot.

use crate::{domain::BoardState, error::Result, storage::Storage};
use tracing::{debug, warn};

/// Persistence adapter bound to one storage key
pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serializes the full board into the slot
    pub async fn save(&self, state: &BoardState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.storage.set_item(&self.key, &json).await?;
        debug!(key = %self.key, bytes = json.len(), "saved board state");
        Ok(())
    }

    /// Reads the slot back
    ///
    /// A missing slot, an unreadable slot and an unparseable blob all mean
    /// "no saved state".
    pub async fn load(&self) -> Option<BoardState> {
        let contents = match self.storage.get_item(&self.key).await {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(key = %self.key, "no saved board state");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read saved board state");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed board state");
                None
            }
        }
    }

    /// Deletes the slot
    pub async fn reset(&self) -> Result<()> {
        self.storage.remove_item(&self.key).await?;
        debug!(key = %self.key, "cleared saved board state");
        Ok(())
    }
}
