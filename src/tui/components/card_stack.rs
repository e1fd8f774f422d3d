//! # CardStack Component
//!
//! Draws the pile of active cards. Only the top card has content and
//! follows the drag; up to [`MAX_FILLER`] cards behind it are drawn as
//! empty outlines, each nudged down one row so the pile reads as a stack.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardStackState` lives in `TuiState`
//! - `CardStack` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear};
use tui_scrollview::ScrollViewState;
use unicode_width::UnicodeWidthStr;

use crate::core::deck::Deck;
use crate::tui::component::Component;
use crate::tui::components::card_face::CardFace;

pub const CARD_MIN_WIDTH: u16 = 36;
pub const CARD_MAX_WIDTH: u16 = 64;
pub const CARD_HEIGHT: u16 = 13;
const MAX_FILLER: usize = 2;

/// Persistent state for the card stack.
#[derive(Default)]
pub struct CardStackState {
    /// Where the top card was last drawn, for hit testing.
    pub card_area: Option<Rect>,
    /// Scroll position of the revealed examples.
    pub scroll: ScrollViewState,
}

impl CardStackState {
    pub fn hit(&self, col: u16, row: u16) -> bool {
        self.card_area
            .is_some_and(|area| area.contains((col, row).into()))
    }
}

pub struct CardStack<'a> {
    pub deck: &'a Deck,
    pub revealed: bool,
    /// Rows the top card is dragged by; negative is up.
    pub drag_offset: i32,
    pub state: &'a mut CardStackState,
}

impl<'a> CardStack<'a> {
    pub fn new(
        deck: &'a Deck,
        revealed: bool,
        drag_offset: i32,
        state: &'a mut CardStackState,
    ) -> Self {
        Self {
            deck,
            revealed,
            drag_offset,
            state,
        }
    }
}

/// Card width: wide enough for the longest example, within bounds.
pub fn card_width(deck: &Deck, available: u16) -> u16 {
    let longest = deck
        .top()
        .map(|card| {
            card.examples
                .iter()
                .map(|e| e.width())
                .chain(std::iter::once(card.phonetic.width()))
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);
    // borders + padding + scrollbar
    let wanted = u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(5);
    wanted
        .clamp(CARD_MIN_WIDTH, CARD_MAX_WIDTH)
        .min(available)
}

/// Rect of `size` centred in `area`, shifted vertically and kept inside `area`.
fn placed(area: Rect, width: u16, height: u16, shift: i32) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let centred_y = i32::from(area.y) + i32::from((area.height - height) / 2);
    let max_y = i32::from(area.y + area.height - height);
    let y = (centred_y + shift).clamp(i32::from(area.y), max_y) as u16;
    Rect::new(x, y, width, height)
}

impl Component for CardStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(top) = self.deck.top() else {
            self.state.card_area = None;
            return;
        };

        let width = card_width(self.deck, area.width);
        let filler = self.deck.active().len().saturating_sub(1).min(MAX_FILLER);

        // Back to front: the deepest filler first.
        for depth in (1..=filler).rev() {
            let rect = placed(area, width, CARD_HEIGHT, depth as i32);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
                rect,
            );
        }

        let rect = placed(area, width, CARD_HEIGHT, self.drag_offset);
        frame.render_widget(Clear, rect);
        CardFace::new(top, self.revealed, &mut self.state.scroll).render(frame, rect);
        self.state.card_area = Some(rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{card, sample_cards};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(deck: &Deck, offset: i32, state: &mut CardStackState) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                CardStack::new(deck, false, offset, state).render(f, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_card_area_recorded_and_hit() {
        let deck = Deck::new(sample_cards());
        let mut state = CardStackState::default();
        draw(&deck, 0, &mut state);
        let area = state.card_area.unwrap();
        assert_eq!(area.height, CARD_HEIGHT);
        assert!(state.hit(area.x + 1, area.y + 1));
        assert!(!state.hit(0, 0));
    }

    #[test]
    fn test_drag_offset_moves_card() {
        let deck = Deck::new(sample_cards());
        let mut resting = CardStackState::default();
        draw(&deck, 0, &mut resting);
        let mut dragged = CardStackState::default();
        draw(&deck, -3, &mut dragged);
        assert_eq!(
            dragged.card_area.unwrap().y + 3,
            resting.card_area.unwrap().y
        );
    }

    #[test]
    fn test_drag_offset_clamped_to_area() {
        let deck = Deck::new(sample_cards());
        let mut state = CardStackState::default();
        draw(&deck, -500, &mut state);
        assert_eq!(state.card_area.unwrap().y, 0);
        draw(&deck, 500, &mut state);
        assert_eq!(state.card_area.unwrap().bottom(), 20);
    }

    #[test]
    fn test_exhausted_deck_clears_card_area() {
        let mut deck = Deck::new(vec![card("A")]);
        deck.advance(-500.0);
        let mut state = CardStackState {
            card_area: Some(Rect::new(0, 0, 5, 5)),
            ..Default::default()
        };
        draw(&deck, 0, &mut state);
        assert!(state.card_area.is_none());
    }

    #[test]
    fn test_card_width_bounds() {
        let deck = Deck::new(sample_cards());
        assert_eq!(card_width(&deck, 200), CARD_MIN_WIDTH);
        assert_eq!(card_width(&deck, 20), 20);

        let mut long = card("/ə/");
        long.examples = vec!["x".repeat(100)];
        assert_eq!(card_width(&Deck::new(vec![long]), 200), CARD_MAX_WIDTH);
    }

    #[test]
    fn test_card_width_does_not_wrap_past_u16() {
        let mut huge = card("/ə/");
        huge.examples = vec!["x".repeat(usize::from(u16::MAX) + 2)];
        assert_eq!(card_width(&Deck::new(vec![huge]), 200), CARD_MAX_WIDTH);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let deck = Deck::new(sample_cards());
        let mut state = CardStackState::default();
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal
            .draw(|f| {
                CardStack::new(&deck, true, 2, &mut state).render(f, f.area());
            })
            .unwrap();
        assert!(state.card_area.is_some());
    }
}
