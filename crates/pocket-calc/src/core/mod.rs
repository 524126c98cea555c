//! Core calculator module: arithmetic, display formatting and the keystroke
//! state machine.
//!
//! Every action on the engine is total. Arithmetic failures never cross the
//! action boundary; they put the display into the `"Error"` sentinel and are
//! reported through [`CalcError`] for diagnostics only.

pub mod action;
pub mod config;
pub mod engine;
pub mod format;
mod operations;
pub mod state;

pub use action::Action;
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Causes of the arithmetic error state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number.
    ///
    /// Only [`Calculator::check_finite`] called on its own reports this; the
    /// engine's operands are finite and a zero divisor is classified first.
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// The display could not be read back as a finite operand
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
}

/// Errors raised while loading or validating an [`config::EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for the schema
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the engine cannot honour
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Create a validation error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
