//! Keystroke driver
//!
//! A [`CalculatorDriver`] replays whitespace-separated key tapes such as
//! `"5 + 3 = ="` so the same scenario can run against any front end that
//! wraps the engine. The `verify_*` functions are reusable scenario checks
//! for such front ends.

use crate::core::engine::CalculatorEngine;
use crate::keymap::{action_for_key, UnknownKey};

/// Interface a host front end exposes for scripted key presses
pub trait CalculatorDriver {
    /// Presses a single named key
    fn press(&mut self, key: &str) -> Result<(), UnknownKey>;

    /// Current display string
    fn display(&self) -> String;

    /// Auxiliary pending-operation line, if any
    fn pending_expression(&self) -> Option<String>;

    /// Presses every key of a whitespace-separated tape, stopping at the
    /// first unknown key
    fn press_keys(&mut self, tape: &str) -> Result<String, UnknownKey> {
        for key in tape.split_whitespace() {
            self.press(key)?;
        }
        Ok(self.display())
    }
}

/// Driver over an in-process [`CalculatorEngine`]
#[derive(Debug, Default)]
pub struct KeystrokeDriver {
    engine: CalculatorEngine,
}

impl KeystrokeDriver {
    /// Creates a driver around a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a mutable reference to the underlying engine
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }
}

impl CalculatorDriver for KeystrokeDriver {
    fn press(&mut self, key: &str) -> Result<(), UnknownKey> {
        let action = action_for_key(key).ok_or_else(|| UnknownKey(key.to_string()))?;
        self.engine.apply(action);
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn pending_expression(&self) -> Option<String> {
        self.engine.pending_expression()
    }
}

// ===== Reusable scenario checks =====
// These run against ANY CalculatorDriver implementation

fn assert_tape<D: CalculatorDriver>(driver: &mut D, tape: &str, display: &str) {
    let shown = driver
        .press_keys("Escape")
        .and_then(|_| driver.press_keys(tape));
    assert_eq!(shown.as_deref(), Ok(display), "tape {tape:?}");
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_tape(driver, "2 + 3 =", "5");
    assert_tape(driver, "1 0 - 4 =", "6");
    assert_tape(driver, "6 * 7 =", "42");
    assert_tape(driver, "2 0 / 4 =", "5");
}

/// Verifies strict left-to-right evaluation and operator substitution
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    assert_tape(driver, "2 + 3 * 4 =", "20");
    assert_tape(driver, "2 + 3 *", "5");
    assert_tape(driver, "9 + - * 2 =", "18");
}

/// Verifies repeat-equals semantics
pub fn verify_repeat_equals<D: CalculatorDriver>(driver: &mut D) {
    assert_tape(driver, "5 + 3 =", "8");
    assert_tape(driver, "5 + 3 = =", "11");
    assert_tape(driver, "5 + =", "10");
    assert_tape(driver, "5 + = =", "15");
}

/// Verifies the error sentinel and recovery
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    assert_tape(driver, "1 / 0 =", "Error");
    assert_tape(driver, "1 / 0 = + 5 =", "5");
    assert_tape(driver, "1 / 0 = 7", "7");
    assert_tape(driver, "1 / 0 = Escape", "0");
}

/// Verifies display formatting of results
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    assert_tape(driver, ". 1 + . 2 =", "0.3");
    assert_tape(driver, "1 / 3 =", "0.333333333333");
    assert_tape(driver, "0 ±", "0");
    assert_tape(driver, "5 0 %", "0.5");
}

/// Complete verification suite
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right(driver);
    verify_repeat_equals(driver);
    verify_error_handling(driver);
    verify_formatting(driver);
}
