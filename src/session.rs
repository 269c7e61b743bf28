use leptos::prelude::*;

use crate::catalog::Profile;
use crate::deck::Deck;
use crate::decisions::DecisionProcessor;
use crate::store::Store;

/// Per-session state, provided as context at the app root. Owns the deck
/// (catalog + cursor + visible window), the durable store, and the pending
/// match notification.
#[derive(Clone)]
pub struct Session {
    pub deck: RwSignal<Deck>,
    pub store: Store,
    pub decisions: DecisionProcessor,
    /// Set when a like turns into a match; cleared when dismissed.
    pub matched: RwSignal<Option<Profile>>,
    /// False until the catalog fetch resolves (either way).
    pub catalog_ready: RwSignal<bool>,
}

impl Session {
    pub fn new(store: Store) -> Self {
        Self {
            deck: RwSignal::new(Deck::default()),
            decisions: DecisionProcessor::new(store.clone()),
            store,
            matched: RwSignal::new(None),
            catalog_ready: RwSignal::new(false),
        }
    }

    /// Wipe all persisted data and restart the session from scratch.
    pub fn reset(&self) {
        self.store.clear_all();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
