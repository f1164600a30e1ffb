//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => {
            Some(GameAction::Turn(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => {
            Some(GameAction::Turn(Direction::Left))
        }

        // Game
        KeyCode::Char('r' | 'R') => Some(GameAction::Restart),
        KeyCode::Char('m' | 'M') => Some(GameAction::ToggleMode),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Turn(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Turn(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Turn(Direction::Left))
        );
    }

    #[test]
    fn test_wasd_and_vim_keys() {
        let cases = [
            ('w', Direction::Up),
            ('a', Direction::Left),
            ('s', Direction::Down),
            ('d', Direction::Right),
            ('K', Direction::Up),
            ('H', Direction::Left),
            ('J', Direction::Down),
            ('L', Direction::Right),
        ];
        for (ch, dir) in cases {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(GameAction::Turn(dir)),
                "key {:?}",
                ch
            );
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('M'))),
            Some(GameAction::ToggleMode)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
