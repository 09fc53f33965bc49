//! Key mapping from terminal events to game actions.
//!
//! Non-directional keys with no binding map to `None` and are dropped at
//! this boundary, before they reach the state machine.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Steering
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(GameAction::Turn(Direction::Right))
        }

        // Start / pause / unpause
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        // Restart (game-over screen or mid-game)
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
