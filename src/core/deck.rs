//! # Deck Navigator
//!
//! Two stacks and the rules for moving cards between them.
//!
//! ```text
//!            advance(≤ -threshold)
//!   active ───────────────────────▶ dismissed
//!          ◀───────────────────────
//!            advance(≥ +threshold)
//!
//!   reset(): active empty → active = dismissed, dismissed = []
//! ```
//!
//! Both stacks are stored bottom→top, so the visible card is the last
//! element of `active`. Every card loaded lives in exactly one stack; no
//! operation creates, clones, or drops a card. Requests that cannot be
//! honoured (sub-threshold gesture, empty source stack, reset while cards
//! remain) leave the deck untouched.

use log::debug;

use crate::core::card::Card;

/// Gesture magnitude needed to move a card, in presentation units.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 200.0;

/// What a call to [`Deck::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Top of `active` moved onto `dismissed`.
    Dismissed,
    /// Top of `dismissed` moved back onto `active`.
    Recalled,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Deck {
    active: Vec<Card>,
    dismissed: Vec<Card>,
    threshold: f32,
}

impl Deck {
    /// Build a deck from loader output. The last card is shown first.
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_threshold(cards, DEFAULT_SWIPE_THRESHOLD)
    }

    /// Like [`Deck::new`] with a custom swipe threshold. Values that are not
    /// finite and positive fall back to [`DEFAULT_SWIPE_THRESHOLD`].
    pub fn with_threshold(cards: Vec<Card>, threshold: f32) -> Self {
        let threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold
        } else {
            DEFAULT_SWIPE_THRESHOLD
        };
        Self {
            active: cards,
            dismissed: Vec::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Apply one completed gesture. Negative is upward (dismiss), positive
    /// is downward (recall).
    pub fn advance(&mut self, direction: f32) -> Transition {
        if direction <= -self.threshold {
            if let Some(card) = self.active.pop() {
                debug!("Dismissed card {}", card.phonetic);
                self.dismissed.push(card);
                return Transition::Dismissed;
            }
        } else if direction >= self.threshold {
            if let Some(card) = self.dismissed.pop() {
                debug!("Recalled card {}", card.phonetic);
                self.active.push(card);
                return Transition::Recalled;
            }
        }
        Transition::Unchanged
    }

    /// Refill `active` from `dismissed` once the deck is exhausted.
    ///
    /// `dismissed` moves over as-is, so the deck comes back in the reverse
    /// of its load order: the first card dismissed is on the bottom and the
    /// last one is shown first. Returns whether anything happened.
    pub fn reset(&mut self) -> bool {
        if !self.active.is_empty() {
            return false;
        }
        self.active = std::mem::take(&mut self.dismissed);
        debug!("Deck reset with {} cards", self.active.len());
        true
    }

    /// The visible, interactive card.
    pub fn top(&self) -> Option<&Card> {
        self.active.last()
    }

    pub fn is_exhausted(&self) -> bool {
        self.active.is_empty()
    }

    /// Cards still to review, bottom→top.
    pub fn active(&self) -> &[Card] {
        &self.active
    }

    /// Reviewed cards, bottom→top (top is the most recently dismissed).
    pub fn dismissed(&self) -> &[Card] {
        &self.dismissed
    }

    pub fn total(&self) -> usize {
        self.active.len() + self.dismissed.len()
    }

    pub fn reviewed(&self) -> usize {
        self.dismissed.len()
    }
}
