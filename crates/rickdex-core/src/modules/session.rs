//! The home view session: glue between the repository, the favorites store,
//! and the pure filter/overlay functions.

use std::collections::HashSet;

use tokio::sync::watch;

use rickdex_types::{
    Character, CharacterEntry, CharacterRepository, Result, TypedError,
};

use super::favorites::{self, FavoriteStore};
use super::search;

/// Snapshot of everything the character list screen needs to render.
///
/// Recomputed wholesale from the current collection, query, and favorite
/// set on every change — no incremental patching, so `entries` can never
/// carry a favorite flag that disagrees with the set that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Filtered characters annotated with their favorite flags
    pub entries: Vec<CharacterEntry>,
    /// A fetch is in flight
    pub is_loading: bool,
    /// Message from the last failed fetch, cleared on the next attempt
    pub error: Option<String>,
}

/// Owns the inputs to the overlay engine and republishes [`DisplayState`]
/// whenever one of them changes.
///
/// The session holds the last-known-good character collection: a failed
/// refresh publishes its error message but keeps the previous entries on
/// screen. Favorites are loaded from the store once at construction and
/// saved back after every toggle.
pub struct HomeSession<R: CharacterRepository> {
    repo: R,
    store: FavoriteStore,
    characters: Vec<Character>,
    favorites: HashSet<String>,
    query: String,
    last_error: Option<String>,
    tx: watch::Sender<DisplayState>,
}

impl<R: CharacterRepository> HomeSession<R> {
    pub fn new(repo: R, store: FavoriteStore) -> Result<Self> {
        let favorites = store.load()?;
        tracing::info!("Session started with {} favorites", favorites.len());

        let (tx, _) = watch::channel(DisplayState {
            entries: Vec::new(),
            is_loading: false,
            error: None,
        });

        Ok(Self {
            repo,
            store,
            characters: Vec::new(),
            favorites,
            query: String::new(),
            last_error: None,
            tx,
        })
    }

    /// New receiver for the published display state.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.tx.subscribe()
    }

    /// Replace the collection with a fresh full fetch.
    ///
    /// On failure the previous collection stays published alongside the
    /// error message, and the error is also returned to the caller.
    pub async fn refresh(&mut self) -> Result<()> {
        self.last_error = None;
        self.publish(true);

        match self.repo.fetch_all().await {
            Ok(characters) => {
                self.characters = characters;
                self.publish(false);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Character fetch failed: {}", e);
                self.last_error = Some(e.to_string());
                self.publish(false);
                Err(TypedError::Network(e))
            }
        }
    }

    /// Replace the collection with the residents of a selected location.
    pub async fn show_residents(&mut self, ids: &[String]) -> Result<()> {
        self.last_error = None;
        self.publish(true);

        match self.repo.fetch_by_ids(ids).await {
            Ok(characters) => {
                self.characters = characters;
                self.publish(false);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Resident fetch failed: {}", e);
                self.last_error = Some(e.to_string());
                self.publish(false);
                Err(TypedError::Network(e))
            }
        }
    }

    /// Update the search query and republish.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.publish(false);
    }

    /// Toggle a favorite, persist the new set, and republish.
    ///
    /// The in-memory set and the published state reflect the toggle even if
    /// persistence fails; the storage error is returned for the caller to
    /// surface.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<()> {
        self.favorites = favorites::toggle(&self.favorites, id);
        let saved = self.store.save(&self.favorites);
        self.publish(false);
        saved.map_err(TypedError::from)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        favorites::is_favorite(&self.favorites, id)
    }

    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    fn publish(&self, is_loading: bool) {
        let filtered = search::filter(&self.characters, &self.query);
        let entries = favorites::project(&filtered, &self.favorites);
        self.tx.send_replace(DisplayState {
            entries,
            is_loading,
            error: self.last_error.clone(),
        });
    }
}
