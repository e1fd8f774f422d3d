//! # Application State
//!
//! Core study state for Fayin. Domain logic only, no TUI types.
//! Presentation state (drag offset, scroll position) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck              // active + dismissed stacks
//! ├── revealed: bool          // top card face-up?
//! ├── deck_name: String       // asset the deck came from
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::card::Card;
use crate::core::deck::Deck;

pub struct App {
    pub deck: Deck,
    /// View state of the top card. Cleared whenever a different card surfaces.
    pub revealed: bool,
    pub deck_name: String,
    pub status_message: String,
}

impl App {
    pub fn new(deck: Deck, deck_name: String) -> Self {
        let status_message = if deck.total() == 0 {
            String::from("No cards to show")
        } else {
            String::from("Swipe up when you know it, down to go back")
        };
        Self {
            deck,
            revealed: false,
            deck_name,
            status_message,
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(!app.revealed);
        assert_eq!(app.deck_name, "Test");
        assert_eq!(app.current_card().map(|c| c.phonetic.as_str()), Some("/ʃ/"));
    }

    #[test]
    fn test_empty_deck_status() {
        let app = App::new(Deck::new(Vec::new()), "Empty".to_string());
        assert!(app.current_card().is_none());
        assert_eq!(app.status_message, "No cards to show");
    }
}
