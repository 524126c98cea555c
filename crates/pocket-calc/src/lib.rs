//! Pocket Calculator - keystroke-driven arithmetic engine
//!
//! The engine models a four-function desktop calculator: digits are typed
//! into a display, operators are evaluated strictly left to right, `=`
//! repeats the last operation and any arithmetic failure shows `"Error"`
//! until the next key recovers.
//!
//! The crate carries no rendering. Hosts translate their key events into
//! [`core::Action`]s (see [`keymap`]) and draw [`core::engine::CalculatorEngine::display`].
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.apply_all([
//!     Action::Digit(2),
//!     Action::SetOperator(Operation::Add),
//!     Action::Digit(3),
//!     Action::SetOperator(Operation::Multiply),
//!     Action::Digit(4),
//!     Action::Equals,
//! ]);
//! assert_eq!(engine.display(), "20");
//!
//! // Repeat-equals applies `× 4` again
//! engine.equals();
//! assert_eq!(engine.display(), "80");
//!
//! // Keys by name
//! let mut driver = KeystrokeDriver::new();
//! assert_eq!(driver.press_keys("1 / 0 =").unwrap(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keymap;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::config::EngineConfig;
    pub use crate::core::engine::CalculatorEngine;
    pub use crate::core::format::{format_number, parse_display, FormatPolicy, ERROR_DISPLAY};
    pub use crate::core::state::CalculatorState;
    pub use crate::core::{Action, CalcError, CalcResult, Calculator, ConfigError, Operation};
    pub use crate::driver::{CalculatorDriver, KeystrokeDriver};
    pub use crate::keymap::{action_for_key, key_for_action, UnknownKey};

    #[cfg(feature = "tui")]
    pub use crate::keymap::terminal::KeyInput;
}
