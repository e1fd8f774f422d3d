//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;

use crate::core::audio::AudioPlayer;
use crate::core::card::Card;
use crate::core::deck::Deck;
use crate::core::state::App;

/// A card whose phonetic label is `label`, with one self-marking example.
pub fn card(label: &str) -> Card {
    Card {
        phonetic: label.to_string(),
        examples: vec![format!("{label}!")],
        marked_letters: vec![label.to_string()],
        audio_filename: format!("{label}.mp3"),
    }
}

/// Phonetic labels of a stack, bottom→top.
pub fn labels(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.phonetic.as_str()).collect()
}

/// Three realistic cards; `/ʃ/` is on top.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card {
            phonetic: "/æ/".to_string(),
            examples: vec!["cat".to_string(), "apple".to_string()],
            marked_letters: vec!["a".to_string(), "a".to_string()],
            audio_filename: "ae.mp3".to_string(),
        },
        Card {
            phonetic: "/iː/".to_string(),
            examples: vec!["see".to_string(), "tea".to_string()],
            marked_letters: vec!["ee".to_string(), "ea".to_string()],
            audio_filename: "i_long.mp3".to_string(),
        },
        Card {
            phonetic: "/ʃ/".to_string(),
            examples: vec!["ship".to_string(), "nation".to_string()],
            marked_letters: vec!["sh".to_string(), "ti".to_string()],
            audio_filename: "sh.mp3".to_string(),
        },
    ]
}

/// Creates a test App over [`sample_cards`].
pub fn test_app() -> App {
    App::new(Deck::new(sample_cards()), "Test".to_string())
}

/// Records every filename it is asked to play.
#[derive(Default)]
pub struct RecordingPlayer {
    pub played: RefCell<Vec<String>>,
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, filename: &str) {
        self.played.borrow_mut().push(filename.to_string());
    }
}
