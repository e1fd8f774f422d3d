//! # CardFace Component
//!
//! One side of the top card.
//!
//! - **Front**: the phonetic label and a play hint.
//! - **Back**: each example on its own row, marked letters in red.
//!
//! The back can be taller than the card, so it renders through a
//! `ScrollView`. Content height is predicted with `textwrap` using the same
//! options as ratatui's `Paragraph` wrapping, so the scroll extent matches
//! what is drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::card::Card;
use crate::core::highlight::Segment;
use crate::tui::component::Component;

/// Blank row between examples.
const EXAMPLE_GAP: u16 = 1;

pub fn marked_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Turn highlighter output into a styled line. Empty segments are dropped.
pub fn highlight_line(segments: &[Segment]) -> Line<'_> {
    segments
        .iter()
        .filter(|s| !s.content.is_empty())
        .map(|s| {
            if s.is_marked {
                Span::styled(s.content.as_str(), marked_style())
            } else {
                Span::raw(s.content.as_str())
            }
        })
        .collect()
}

/// Rows needed to show `text` at `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    (textwrap::wrap(text, options).len() as u16).max(1)
}

/// Scroll extent of stacked examples, each followed by a gap.
fn content_height(heights: &[u16]) -> u16 {
    heights
        .iter()
        .fold(0u16, |acc, h| acc.saturating_add(*h).saturating_add(EXAMPLE_GAP))
}

pub struct CardFace<'a> {
    pub card: &'a Card,
    pub revealed: bool,
    pub scroll: &'a mut ScrollViewState,
}

impl<'a> CardFace<'a> {
    pub fn new(card: &'a Card, revealed: bool, scroll: &'a mut ScrollViewState) -> Self {
        Self {
            card,
            revealed,
            scroll,
        }
    }

    fn block(&self) -> Block<'static> {
        let hint = if self.revealed {
            " Space: front "
        } else {
            " Space: flip "
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
            .title_bottom(Line::from(hint).centered().style(Style::default().fg(Color::DarkGray)))
            .padding(Padding::horizontal(1))
    }

    fn render_front(&self, frame: &mut Frame, inner: Rect) {
        let label = Line::from(Span::styled(
            self.card.phonetic.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        let play = Line::from(Span::styled(
            "▶ p to play",
            Style::default().fg(Color::Blue),
        ));
        let [label_area, _, play_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(inner);
        frame.render_widget(Paragraph::new(label).alignment(Alignment::Center), label_area);
        frame.render_widget(Paragraph::new(play).alignment(Alignment::Center), play_area);
    }

    fn render_back(&mut self, frame: &mut Frame, inner: Rect) {
        let rows = self.card.highlighted_examples();
        // One column stays free for the scrollbar.
        let content_width = inner.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .card
            .examples
            .iter()
            .take(rows.len())
            .map(|example| wrapped_height(example, content_width))
            .collect();
        let total_height = content_height(&heights);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (segments, height) in rows.iter().zip(&heights) {
            let paragraph = Paragraph::new(highlight_line(segments))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            scroll_view.render_widget(paragraph, Rect::new(0, y, content_width, *height));
            y = y.saturating_add(*height).saturating_add(EXAMPLE_GAP);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut *self.scroll);
    }
}

impl Component for CardFace<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if self.revealed {
            self.render_back(frame, inner);
        } else {
            self.render_front(frame, inner);
        }
    }
}
