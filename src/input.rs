//! Terminal input mapping.
//!
//! The game has a single gameplay input, the primary action. Space and Up
//! are its keyboard binding; a mouse press stands in for a tap.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Primary, // Space, Up, or a mouse press
    Quit,    // Esc, q, or Ctrl+C
    None,
}

/// Map a terminal event to an action.
pub fn map_event(event: &Event) -> InputAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => InputAction::Primary,
            _ => InputAction::None,
        },
        _ => InputAction::None,
    }
}

fn map_key(key: &KeyEvent) -> InputAction {
    // Holding the key must not retrigger, and some terminals report releases.
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => InputAction::Primary,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Quit,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_primary_bindings() {
        assert_eq!(map_event(&key(KeyCode::Char(' '))), InputAction::Primary);
        assert_eq!(map_event(&key(KeyCode::Up)), InputAction::Primary);
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left))),
            InputAction::Primary
        );
    }

    #[test]
    fn test_quit_bindings() {
        assert_eq!(map_event(&key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(map_event(&key(KeyCode::Char('q'))), InputAction::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), InputAction::Quit);
    }

    #[test]
    fn test_unbound_input_ignored() {
        assert_eq!(map_event(&key(KeyCode::Char('c'))), InputAction::None);
        assert_eq!(map_event(&key(KeyCode::Down)), InputAction::None);
        assert_eq!(
            map_event(&mouse(MouseEventKind::Up(MouseButton::Left))),
            InputAction::None
        );
        assert_eq!(map_event(&Event::Resize(80, 24)), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release), InputAction::None);
    }
}
