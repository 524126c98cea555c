//! Logical keypad actions

use super::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logical key press understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Enter a digit (0-9); larger values are ignored
    Digit(u8),
    /// Enter the decimal point
    Dot,
    /// Negate the displayed value
    ToggleSign,
    /// Divide the displayed value by 100
    Percent,
    /// Erase the last typed character
    Backspace,
    /// Reset everything
    ClearAll,
    /// Reset only the entry being typed
    ClearEntry,
    /// Choose a binary operator
    SetOperator(Operation),
    /// Evaluate the pending (or last) operation
    Equals,
}

impl Action {
    /// Returns the key label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ClearAll => "AC".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::SetOperator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
