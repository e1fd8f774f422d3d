//! # TitleBar Component
//!
//! Top status line: deck name, progress, and the latest status message.
//!
//! ```text
//! Fayin · Phonetic · 3/10 | 7 left
//! ```
//!
//! Stateless: every field is a prop copied out of `App` each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub deck_name: String,
    pub reviewed: usize,
    pub total: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(deck_name: String, reviewed: usize, total: usize, status_message: String) -> Self {
        Self {
            deck_name,
            reviewed,
            total,
            status_message,
        }
    }

    fn text(&self) -> String {
        let base = format!(
            "Fayin · {} · {}/{}",
            self.deck_name, self.reviewed, self.total
        );
        if self.status_message.is_empty() {
            base
        } else {
            format!("{} | {}", base, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status() {
        let text = rendered(TitleBar::new(
            "Phonetic".to_string(),
            3,
            10,
            "7 left".to_string(),
        ));
        assert!(text.contains("Fayin · Phonetic · 3/10 | 7 left"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let text = rendered(TitleBar::new("Phonetic".to_string(), 0, 10, String::new()));
        assert!(text.contains("Phonetic · 0/10"));
        assert!(!text.contains('|'));
    }
}
