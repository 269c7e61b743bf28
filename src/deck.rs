use crate::catalog::Profile;

/// Number of cards kept visible at once.
pub const WINDOW_SIZE: usize = 3;

/// The card deck: owns the loaded catalog, the session cursor marking the
/// next undealt profile, and the visible window. Stored bottom-to-top, so
/// the last element is the top card (newest dealt).
#[derive(Debug)]
pub struct Deck {
    catalog: Vec<Profile>,
    cursor: usize,
    visible: Vec<Profile>,
}

impl Deck {
    pub fn new(catalog: Vec<Profile>) -> Self {
        let mut deck = Self {
            catalog,
            cursor: 0,
            visible: Vec::new(),
        };
        deck.refill();
        deck
    }

    /// Deal from the catalog until the window is full or the cursor runs out.
    pub fn refill(&mut self) {
        while self.visible.len() < WINDOW_SIZE && self.cursor < self.catalog.len() {
            self.visible.push(self.catalog[self.cursor].clone());
            self.cursor += 1;
        }
    }

    pub fn remove_top(&mut self) -> Option<Profile> {
        self.visible.pop()
    }

    pub fn top(&self) -> Option<&Profile> {
        self.visible.last()
    }

    /// Visible window, bottom card first.
    pub fn visible(&self) -> &[Profile] {
        &self.visible
    }

    pub fn catalog(&self) -> &[Profile] {
        &self.catalog
    }

    /// Cursor exhausted and nothing left on screen: show the placeholder.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.catalog.len() && self.visible.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Profile {}", id),
            age: 30,
            bio: None,
            city: None,
            photo: "assets/placeholder.svg".to_string(),
            likes_you: false,
        }
    }

    fn catalog(n: usize) -> Vec<Profile> {
        (0..n).map(|i| profile(&i.to_string())).collect()
    }

    #[test]
    fn initial_fill_deals_up_to_three() {
        let deck = Deck::new(catalog(5));
        let ids: Vec<&str> = deck.visible().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["0", "1", "2"]);
        assert_eq!(deck.top().unwrap().id, "2");
    }

    #[test]
    fn window_holds_min_of_three_and_remaining() {
        let mut deck = Deck::new(catalog(5));
        for remaining in (0..5).rev() {
            deck.remove_top();
            deck.refill();
            assert_eq!(deck.visible().len(), remaining.min(WINDOW_SIZE));
        }
    }

    #[test]
    fn short_catalog_deals_everything() {
        let deck = Deck::new(catalog(2));
        assert_eq!(deck.visible().len(), 2);
        assert!(!deck.is_done());
    }

    #[test]
    fn empty_catalog_is_done_immediately() {
        let deck = Deck::new(Vec::new());
        assert!(deck.visible().is_empty());
        assert!(deck.is_done());
    }

    #[test]
    fn done_only_after_window_drains() {
        let mut deck = Deck::new(catalog(4));
        for _ in 0..3 {
            deck.remove_top();
            deck.refill();
        }
        // Cursor exhausted but one card still showing.
        assert_eq!(deck.visible().len(), 1);
        assert!(!deck.is_done());

        deck.remove_top();
        deck.refill();
        assert!(deck.is_done());
    }

    #[test]
    fn remove_top_on_empty_is_none() {
        let mut deck = Deck::new(Vec::new());
        assert_eq!(deck.remove_top(), None);
    }
}
