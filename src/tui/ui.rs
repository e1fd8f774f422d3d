use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardStack, CompletionScreen, TitleBar};

const HELP_STUDYING: &str = "↑/drag up: got it  ↓/drag down: back  space/click: flip  p: play  q: quit";
const HELP_DONE: &str = "r: study again  q: quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.deck_name.clone(),
        app.deck.reviewed(),
        app.deck.total(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let help = if app.deck.is_exhausted() {
        tui.stack.card_area = None;
        CompletionScreen::new(app.deck.reviewed(), &mut tui.completion).render(frame, main_area);
        HELP_DONE
    } else {
        tui.completion.button_area = None;
        CardStack::new(
            &app.deck,
            app.revealed,
            tui.gesture.offset_rows(),
            &mut tui.stack,
        )
        .render(frame, main_area);
        HELP_STUDYING
    };

    frame.render_widget(
        Line::from(help).centered().style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
