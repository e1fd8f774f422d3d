//! # Drag Gesture
//!
//! Turns a left-button press, drag, and release over the card into either a
//! tap or a signed vertical magnitude for `Deck::advance`.
//!
//! The live row offset is exposed separately so the card can follow the
//! pointer while the button is held. That is the visual half of the gesture
//! and it never touches the deck.
//!
//! ```text
//! MouseDown(row 12) → MouseDrag(row 7) → MouseUp(row 6)
//!   offset_rows() = -5 while dragging
//!   release       = Swipe(-6 × scale)
//! ```

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Released without moving.
    Tap,
    /// Released after moving; negative is upward.
    Swipe(f32),
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    /// Row where the button went down, if a gesture is in progress.
    origin: Option<u16>,
    current: u16,
    moved: bool,
    /// Presentation units per row.
    scale: f32,
}

impl DragGesture {
    pub fn new(scale: f32) -> Self {
        Self {
            origin: None,
            current: 0,
            moved: false,
            scale,
        }
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, row: u16) {
        self.origin = Some(row);
        self.current = row;
        self.moved = false;
    }

    pub fn drag(&mut self, row: u16) {
        if self.origin.is_some() {
            self.current = row;
            self.moved = true;
        }
    }

    /// Finish the gesture. `None` if no gesture was in progress.
    pub fn release(&mut self, row: u16) -> Option<GestureEnd> {
        let origin = self.origin.take()?;
        let moved = self.moved || row != origin;
        self.moved = false;
        if !moved {
            return Some(GestureEnd::Tap);
        }
        let rows = i32::from(row) - i32::from(origin);
        Some(GestureEnd::Swipe(rows as f32 * self.scale))
    }

    /// Drop an in-progress gesture without producing anything.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.moved = false;
    }

    /// Rows the top card should be shifted by right now.
    pub fn offset_rows(&self) -> i32 {
        match self.origin {
            Some(origin) => i32::from(self.current) - i32::from(origin),
            None => 0,
        }
    }
}

impl EventHandler for DragGesture {
    type Event = GestureEnd;

    /// `MouseDown` must already have passed a hit test; callers only forward
    /// presses that land on the card.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<GestureEnd> {
        match *event {
            TuiEvent::MouseDown(_, row) => {
                self.begin(row);
                None
            }
            TuiEvent::MouseDrag(_, row) => {
                self.drag(row);
                None
            }
            TuiEvent::MouseUp(_, row) => self.release(row),
            _ => None,
        }
    }
}
