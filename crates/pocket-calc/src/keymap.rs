//! Key name to action mapping
//!
//! Key names follow the browser `KeyboardEvent.key` convention (`"Enter"`,
//! `"Backspace"`, `"Escape"`, single characters for everything printable),
//! plus the glyphs printed on keypad buttons.

use crate::core::{Action, Operation};
use std::str::FromStr;
use thiserror::Error;

/// A key name with no calculator meaning
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key: {0:?}")]
pub struct UnknownKey(pub String);

/// Maps a key name to a calculator action
#[must_use]
pub fn action_for_key(key: &str) -> Option<Action> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(d) = c.to_digit(10) {
            return u8::try_from(d).ok().map(Action::Digit);
        }
    }
    if let Some(op) = Operation::from_symbol(key) {
        return Some(Action::SetOperator(op));
    }
    match key {
        "." | "," => Some(Action::Dot),
        "=" | "Enter" => Some(Action::Equals),
        "%" => Some(Action::Percent),
        "±" | "F9" => Some(Action::ToggleSign),
        "Backspace" | "⌫" => Some(Action::Backspace),
        "Escape" | "c" | "C" | "AC" => Some(Action::ClearAll),
        "Delete" | "CE" => Some(Action::ClearEntry),
        _ => None,
    }
}

/// The canonical key name for an action; `action_for_key` maps it back
#[must_use]
pub fn key_for_action(action: Action) -> String {
    match action {
        Action::Digit(d) => d.to_string(),
        Action::Dot => ".".to_string(),
        Action::ToggleSign => "±".to_string(),
        Action::Percent => "%".to_string(),
        Action::Backspace => "Backspace".to_string(),
        Action::ClearAll => "Escape".to_string(),
        Action::ClearEntry => "Delete".to_string(),
        Action::SetOperator(op) => op.symbol().to_string(),
        Action::Equals => "=".to_string(),
    }
}

impl FromStr for Action {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        action_for_key(s).ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Terminal key event mapping
#[cfg(feature = "tui")]
pub mod terminal {
    use super::action_for_key;
    use crate::core::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    /// Maps crossterm key events to calculator actions
    #[derive(Debug, Default, Clone, Copy)]
    pub struct KeyInput;

    impl KeyInput {
        /// Creates a new key input mapper
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        /// Maps a key event to an action; releases and Ctrl chords are ignored
        #[must_use]
        pub fn action_for_event(&self, event: KeyEvent) -> Option<Action> {
            if event.kind == KeyEventKind::Release
                || event.modifiers.contains(KeyModifiers::CONTROL)
            {
                return None;
            }
            match event.code {
                KeyCode::Char(c) => action_for_key(c.encode_utf8(&mut [0; 4])),
                KeyCode::Enter => Some(Action::Equals),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Delete => Some(Action::ClearEntry),
                KeyCode::Esc => Some(Action::ClearAll),
                KeyCode::F(9) => Some(Action::ToggleSign),
                _ => None,
            }
        }
    }

}
