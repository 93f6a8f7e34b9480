use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// What a key press means to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Turn(Direction),
    Restart,
    Quit,
    Other,
}

impl Key {
    pub fn from_key_event(ev: &KeyEvent) -> Self {
        if is_ctrl_c(ev) {
            return Key::Quit;
        }

        match ev.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Key::Turn(Up),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Key::Turn(Down),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Key::Turn(Left),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Key::Turn(Right),
            KeyCode::Char('r') => Key::Restart,
            KeyCode::Char('q') => Key::Quit,
            _ => Key::Other,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}
