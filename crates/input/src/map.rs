//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(GameAction::Jump),
        _ => None,
    }
}

/// Map any terminal event to a game action.
///
/// Only key presses count; releases, repeats, resizes and mouse input are ignored.
pub fn map_event(event: &Event) -> Option<GameAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if an event dismisses the game-over screen.
pub fn is_acknowledge(event: &Event) -> bool {
    matches!(map_event(event), Some(GameAction::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_jump_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Char('w'),
            KeyCode::Char('K'),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameAction::Jump),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_releases_and_non_key_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(map_event(&Event::FocusLost), None);
    }

    #[test]
    fn test_acknowledge() {
        assert!(is_acknowledge(&Event::Key(KeyEvent::from(KeyCode::Esc))));
        assert!(!is_acknowledge(&Event::Key(KeyEvent::from(KeyCode::Char(' ')))));
    }
}
