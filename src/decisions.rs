use crate::catalog::Profile;
use crate::store::{Store, KEY_LIKES, KEY_MATCHES, KEY_PASSES};

/// Records like/pass decisions and applies the match rule: a like on a
/// profile that likes you back becomes a match. Repeated decisions for the
/// same id are no-ops (set semantics).
#[derive(Clone)]
pub struct DecisionProcessor {
    store: Store,
}

impl DecisionProcessor {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Record a like. Returns the matched profile when the like is mutual,
    /// so the caller can show the notification.
    pub fn record_like(&self, catalog: &[Profile], id: &str) -> Option<Profile> {
        self.store.add_to_set(KEY_LIKES, id);
        let matched = catalog.iter().find(|p| p.id == id && p.likes_you)?;
        self.store.add_to_set(KEY_MATCHES, id);
        Some(matched.clone())
    }

    pub fn record_pass(&self, id: &str) {
        self.store.add_to_set(KEY_PASSES, id);
    }

    /// Profiles to show on the matches view, recomputed from store state.
    /// Union of the recorded matches and likes on likes-you profiles; the
    /// two agree in normal flow, the union also surfaces likes whose match
    /// entry never got written.
    pub fn matched_profiles(&self, catalog: &[Profile]) -> Vec<Profile> {
        let likes = self.store.set_members(KEY_LIKES);
        let matches = self.store.set_members(KEY_MATCHES);
        catalog
            .iter()
            .filter(|p| {
                matches.iter().any(|id| *id == p.id)
                    || (p.likes_you && likes.iter().any(|id| *id == p.id))
            })
            .cloned()
            .collect()
    }
}
