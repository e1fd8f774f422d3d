//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Gestures
//!
//! A left-button press on the top card starts a drag. While the button is
//! held the card follows the pointer row by row; on release the total rows
//! moved, times `drag_scale`, become `Action::Swipe`. The deck decides from
//! that number alone whether anything moves. A release without movement is
//! a tap and flips the card.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event arrived.

mod component;
mod components;
mod event;
mod gesture;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::audio::{AudioPlayer, SystemPlayer};
use crate::core::config::ResolvedConfig;
use crate::core::deck::Deck;
use crate::core::loader::AssetBundle;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardStackState, CompletionState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::gesture::{DragGesture, GestureEnd};

/// TUI-specific presentation state (not part of core study logic)
pub struct TuiState {
    pub gesture: DragGesture,
    pub stack: CardStackState,
    pub completion: CompletionState,
}

impl TuiState {
    pub fn new(drag_scale: f32) -> Self {
        Self {
            gesture: DragGesture::new(drag_scale),
            stack: CardStackState::default(),
            completion: CompletionState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal mouse capture enabled");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the audio player described by the config.
pub fn build_player(config: &ResolvedConfig) -> SystemPlayer {
    let player = SystemPlayer::new(config.audio_dir.clone());
    match &config.audio_command {
        Some(command) => player.with_command(command.clone(), config.audio_args.clone()),
        None => player,
    }
}

/// Load the configured deck. Failures leave an empty deck.
pub fn build_app(config: &ResolvedConfig) -> App {
    let bundle = AssetBundle::new(config.asset_dir.clone());
    let cards = bundle.load(&config.deck);
    let deck = Deck::with_threshold(cards, config.swipe_threshold);
    App::new(deck, config.deck.clone())
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = build_app(&config);
    let player = build_player(&config);
    let mut tui = TuiState::new(config.drag_scale);
    info!(
        "Studying {} ({} cards, threshold {})",
        app.deck_name,
        app.deck.total(),
        app.deck.threshold()
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(&mut app, &mut tui, event);
            if perform(effect, &player) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one event to the gesture tracker, scroll state, or reducer.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let key_swipe = app.deck.threshold() + 1.0;
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::SwipeUp => apply(app, tui, Action::Swipe(-key_swipe)),
        TuiEvent::SwipeDown => apply(app, tui, Action::Swipe(key_swipe)),
        TuiEvent::Flip => apply(app, tui, Action::Flip),
        TuiEvent::PlayAudio => update(app, Action::PlayAudio),
        TuiEvent::Restart => apply(app, tui, Action::Restart),
        TuiEvent::ScrollUp => {
            tui.stack.scroll.scroll_up();
            Effect::None
        }
        TuiEvent::ScrollDown => {
            tui.stack.scroll.scroll_down();
            Effect::None
        }
        TuiEvent::MouseDown(col, row) => {
            if tui.completion.hit(col, row) {
                return apply(app, tui, Action::Restart);
            }
            if tui.stack.hit(col, row) {
                tui.gesture.handle_event(&event);
            } else {
                tui.gesture.cancel();
            }
            Effect::None
        }
        TuiEvent::MouseDrag(..) | TuiEvent::MouseUp(..) => {
            match tui.gesture.handle_event(&event) {
                Some(GestureEnd::Tap) => apply(app, tui, Action::Flip),
                Some(GestureEnd::Swipe(magnitude)) => {
                    debug!("Drag released with magnitude {}", magnitude);
                    apply(app, tui, Action::Swipe(magnitude))
                }
                None => Effect::None,
            }
        }
    }
}

/// Run the reducer and reset presentation state that belongs to one card.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let before = app.deck.top().cloned();
    let was_revealed = app.revealed;
    let effect = update(app, action);
    if app.deck.top() != before.as_ref() || app.revealed != was_revealed {
        tui.stack.scroll = Default::default();
        tui.gesture.cancel();
    }
    effect
}

/// Carry out an effect. Returns true when the app should exit.
fn perform(effect: Effect, player: &dyn AudioPlayer) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::PlayAudio(filename) => {
            player.play(&filename);
            false
        }
    }
}
