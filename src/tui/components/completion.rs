//! # Completion Screen
//!
//! Shown once every card has been swiped away (or the deck failed to load).
//! Offers a "Study again" button that restarts the deck.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

const BUTTON_LABEL: &str = "Study again (r)";

/// Persistent state: where the button was drawn.
#[derive(Default)]
pub struct CompletionState {
    pub button_area: Option<Rect>,
}

impl CompletionState {
    pub fn hit(&self, col: u16, row: u16) -> bool {
        self.button_area
            .is_some_and(|area| area.contains((col, row).into()))
    }
}

pub struct CompletionScreen<'a> {
    /// Cards that can be studied again.
    pub reviewed: usize,
    pub state: &'a mut CompletionState,
}

impl<'a> CompletionScreen<'a> {
    pub fn new(reviewed: usize, state: &'a mut CompletionState) -> Self {
        Self { reviewed, state }
    }
}

impl Component for CompletionScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (headline, detail) = if self.reviewed == 0 {
            ("No cards to show", String::from("The deck is empty."))
        } else {
            (
                "Congratulations, you finished this session!",
                format!("{} cards reviewed.", self.reviewed),
            )
        };

        let [text_area, _, button_row] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .flex(Flex::Center)
        .areas(area);

        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                headline,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(text, text_area);

        if self.reviewed == 0 {
            self.state.button_area = None;
            return;
        }

        let button_width = BUTTON_LABEL.len() as u16 + 4;
        let [button_area] = Layout::horizontal([Constraint::Length(button_width)])
            .flex(Flex::Center)
            .areas(button_row);
        let button = Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(button, button_area);
        self.state.button_area = Some(button_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(reviewed: usize, state: &mut CompletionState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| {
                CompletionScreen::new(reviewed, state).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_finished_session_shows_button() {
        let mut state = CompletionState::default();
        let text = draw(5, &mut state);
        assert!(text.contains("Congratulations"));
        assert!(text.contains("5 cards reviewed."));
        assert!(text.contains("Study again"));

        let button = state.button_area.unwrap();
        assert!(state.hit(button.x + 2, button.y + 1));
        assert!(!state.hit(0, 0));
    }

    #[test]
    fn test_empty_deck_has_no_button() {
        let mut state = CompletionState::default();
        let text = draw(0, &mut state);
        assert!(text.contains("No cards to show"));
        assert!(!text.contains("Study again"));
        assert!(state.button_area.is_none());
    }
}
