//! # Actions
//!
//! Everything that can happen in Fayin becomes an `Action`.
//! User drags a card up? That's `Action::Swipe(-260.0)`.
//! User taps the card? That's `Action::Flip`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` for the caller to perform. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::deck::Transition;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A finished gesture with its signed vertical magnitude.
    Swipe(f32),
    Flip,
    PlayAudio,
    Restart,
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Play this audio filename.
    PlayAudio(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Swipe(direction) => {
            match app.deck.advance(direction) {
                Transition::Dismissed => {
                    app.revealed = false;
                    app.status_message = if app.deck.is_exhausted() {
                        String::from("All done!")
                    } else {
                        format!("{} left", app.deck.active().len())
                    };
                }
                Transition::Recalled => {
                    app.revealed = false;
                    app.status_message = String::from("Back one card");
                }
                Transition::Unchanged => {}
            }
            Effect::None
        }
        Action::Flip => {
            if app.deck.top().is_some() {
                app.revealed = !app.revealed;
            }
            Effect::None
        }
        Action::PlayAudio => match app.deck.top() {
            Some(card) => Effect::PlayAudio(card.audio_filename.clone()),
            None => Effect::None,
        },
        Action::Restart => {
            if app.deck.reset() && app.deck.total() > 0 {
                app.revealed = false;
                app.status_message = format!("Starting over with {} cards", app.deck.total());
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
