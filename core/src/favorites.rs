// SPDX-FileCopyrightText: 2025-2026 Evex Developers <dev@evex.app>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tokio::sync::Mutex;

use crate::event::Event;
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key of the favorites slot.
pub const FAVORITES_KEY: &str = "favorites";

/// Errors raised by mutating operations on [`Favorites`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// `add` was called with an id that is already a favorite.
    #[error("event {id:?} is already a favorite")]
    Duplicate { id: String },

    /// The durable write or read failed; the in-memory state is unchanged.
    #[error("failed to persist favorites: {0}")]
    Persistence(String),
}

impl From<StorageError> for FavoritesError {
    fn from(e: StorageError) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for FavoritesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

/// The durable, insertion-ordered set of favorited events.
///
/// The store keeps exactly one in-memory copy of the persisted slot and
/// writes through on every mutation: a mutation is committed to memory only
/// after the durable write succeeds, so a failed write never leaves the two
/// out of sync. Reads (`contains`, `list`) are synchronous snapshots and
/// never touch storage.
pub struct Favorites {
    storage: Arc<dyn KeyValueStorage>,

    /// Committed mirror of the persisted slot.
    state: RwLock<Vec<Event>>,

    /// Serializes mutating operations across their durable-write await, so
    /// two near-simultaneous mutations apply as if sequenced.
    write_lock: Mutex<()>,
}

impl Favorites {
    /// Loads the store from the persisted slot.
    ///
    /// A missing slot yields an empty store. A corrupt or unreadable slot is
    /// logged and also yields an empty store: the slot is a client cache,
    /// not a source of truth, and refusing to start over it would be the
    /// worse outcome.
    pub async fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let events = match storage.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(events) => events,
                Err(e) => {
                    tracing::warn!(error = %e, "favorites slot is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites slot, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = events.len(), "loaded favorites");
        Self {
            storage,
            state: RwLock::new(events),
            write_lock: Mutex::new(()),
        }
    }

    /// Appends `event` to the favorites and persists the new sequence.
    ///
    /// Fails with [`FavoritesError::Duplicate`] if the id is already present.
    pub async fn add(&self, event: Event) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;
        self.add_locked(event).await
    }

    /// Removes the event with `id`, if present, and persists the new
    /// sequence. Removing an absent id is a successful no-op.
    pub async fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;
        self.remove_locked(id).await
    }

    /// Removes the event if its id is a favorite, adds it otherwise.
    ///
    /// Membership is decided purely by id; stored field differences are
    /// ignored. Returns whether the event is a favorite after the call.
    /// Calling twice with the same record restores the original sequence.
    pub async fn toggle(&self, event: Event) -> Result<bool, FavoritesError> {
        let _guard = self.write_lock.lock().await;
        if self.contains(&event.id) {
            self.remove_locked(&event.id).await?;
            Ok(false)
        } else {
            self.add_locked(event).await?;
            Ok(true)
        }
    }

    /// Whether an event with `id` is currently a favorite. Never fails.
    pub fn contains(&self, id: &str) -> bool {
        self.read_state().iter().any(|e| e.id == id)
    }

    /// The committed favorites in insertion order. Never fails.
    pub fn list(&self) -> Vec<Event> {
        self.read_state().clone()
    }

    /// Re-reads the persisted slot, replacing the in-memory state.
    ///
    /// Used when the slot may have changed out of band. Unlike the initial
    /// load, a read or decode failure here surfaces as
    /// [`FavoritesError::Persistence`] and the committed state is kept.
    pub async fn refresh(&self) -> Result<(), FavoritesError> {
        let _guard = self.write_lock.lock().await;
        let events = match self.storage.get(FAVORITES_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        tracing::debug!(count = events.len(), "refreshed favorites from storage");
        *self.write_state() = events;
        Ok(())
    }

    async fn add_locked(&self, event: Event) -> Result<(), FavoritesError> {
        if self.contains(&event.id) {
            return Err(FavoritesError::Duplicate { id: event.id });
        }

        tracing::debug!(id = %event.id, "adding favorite");
        let mut next = self.list();
        next.push(event);
        self.persist(next).await
    }

    async fn remove_locked(&self, id: &str) -> Result<(), FavoritesError> {
        if !self.contains(id) {
            tracing::debug!(id, "favorite not present, nothing to remove");
            return Ok(());
        }

        tracing::debug!(id, "removing favorite");
        let mut next = self.list();
        next.retain(|e| e.id != id);
        self.persist(next).await
    }

    /// Writes `next` through to storage, committing it to memory only on a
    /// successful write. Caller must hold `write_lock`.
    async fn persist(&self, next: Vec<Event>) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string_pretty(&next)?;
        self.storage.set(FAVORITES_KEY, &raw).await?;
        *self.write_state() = next;
        Ok(())
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        // State is only ever replaced wholesale; a poisoned lock still holds
        // a consistent committed sequence.
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Event>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Favorites")
            .field("count", &self.read_state().len())
            .finish_non_exhaustive()
    }
}
