//! # Card
//!
//! A single phonetic study unit, loaded once from the deck asset and never
//! mutated afterwards.

use serde::Deserialize;

use crate::core::highlight::{Segment, highlight};

/// One flashcard: a phonetic label, example sentences, and the substring to
/// highlight in each example.
///
/// Field names on the wire are camelCase (`markedLetters`, `audioFilename`).
/// Unknown fields are ignored; a missing field is a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub phonetic: String,
    pub examples: Vec<String>,
    pub marked_letters: Vec<String>,
    /// Opaque reference handed to the audio player.
    pub audio_filename: String,
}

impl Card {
    /// True when every example has exactly one marker.
    pub fn is_well_paired(&self) -> bool {
        self.examples.len() == self.marked_letters.len()
    }

    /// Each example paired with its marker and split into segments.
    ///
    /// Pairs positionally and stops at the shorter of the two lists, so a
    /// card with a missing marker simply shows fewer examples.
    pub fn highlighted_examples(&self) -> Vec<Vec<Segment>> {
        self.examples
            .iter()
            .zip(&self.marked_letters)
            .map(|(example, marker)| highlight(example, marker))
            .collect()
    }
}
