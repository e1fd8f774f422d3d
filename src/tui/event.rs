use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Mapped straight to core actions
    Quit,
    SwipeUp,
    SwipeDown,
    Flip,
    PlayAudio,
    Restart,

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => translate(ev),
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Map a raw crossterm event onto a `TuiEvent`.
pub fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => translate_mouse(mouse_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Terminals with keyboard enhancement also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::SwipeUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::SwipeDown),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Enter) => Some(TuiEvent::Flip),
        (_, KeyCode::Char('p')) => Some(TuiEvent::PlayAudio),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Restart),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}

fn translate_mouse(mouse_event: MouseEvent) -> Option<TuiEvent> {
    let (col, row) = (mouse_event.column, mouse_event.row);
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::MouseDown(col, row)),
        MouseEventKind::Drag(MouseButton::Left) => Some(TuiEvent::MouseDrag(col, row)),
        MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(col, row)),
        MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate(key(KeyCode::Up)), Some(TuiEvent::SwipeUp));
        assert_eq!(translate(key(KeyCode::Char('k'))), Some(TuiEvent::SwipeUp));
        assert_eq!(translate(key(KeyCode::Down)), Some(TuiEvent::SwipeDown));
        assert_eq!(translate(key(KeyCode::Char(' '))), Some(TuiEvent::Flip));
        assert_eq!(translate(key(KeyCode::Enter)), Some(TuiEvent::Flip));
        assert_eq!(translate(key(KeyCode::Char('p'))), Some(TuiEvent::PlayAudio));
        assert_eq!(translate(key(KeyCode::Char('r'))), Some(TuiEvent::Restart));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(ctrl_c), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_button_drag_sequence() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 10, 12)),
            Some(TuiEvent::MouseDown(10, 12))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 6)),
            Some(TuiEvent::MouseDrag(10, 6))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 10, 5)),
            Some(TuiEvent::MouseUp(10, 5))
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
    }
}
