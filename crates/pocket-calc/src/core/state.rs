//! Calculator interaction state and its transition function
//!
//! A [`CalculatorState`] is plain data. [`CalculatorState::apply`] moves it
//! to the next state for one [`Action`]; [`CalculatorState::next`] does the
//! same without touching the original, which keeps transitions testable
//! without any engine or host around them.
//!
//! Chains are evaluated strictly left to right: `2 + 3 × 4` shows `5` when
//! `×` is pressed and `20` on `=`.

use super::action::Action;
use super::config::EngineConfig;
use super::format::{format_number, parse_display, ERROR_DISPLAY};
use super::{CalcError, CalcResult, Calculator, Operation};
use serde::{Deserialize, Serialize};

/// The accumulator/operator/display record behind the keypad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    accumulator: Option<f64>,
    pending_operator: Option<Operation>,
    awaiting_operand: bool,
    /// Operator and right operand of the last `=`, replayed by a further `=`
    repeat: Option<(Operation, f64)>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_operand: false,
            repeat: None,
        }
    }
}

impl CalculatorState {
    /// Creates the initial state (`"0"`, nothing pending)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The string shown on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the operation in progress
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Operator chosen but not yet applied
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Operation a further `=` would repeat
    #[must_use]
    pub fn repeat(&self) -> Option<(Operation, f64)> {
        self.repeat
    }

    /// True when the display holds the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// The displayed value as a number, if it is one
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_display(&self.display)
    }

    /// Returns the state that `action` leads to, leaving `self` untouched
    #[must_use]
    pub fn next(&self, action: Action, config: &EngineConfig) -> Self {
        let mut next = self.clone();
        // The error is already folded into the returned state
        let _ = next.apply(action, config);
        next
    }

    /// Applies `action` in place.
    ///
    /// Returns the cause when the action drove the state into the error
    /// sentinel. The state is always left valid either way.
    pub fn apply(&mut self, action: Action, config: &EngineConfig) -> CalcResult<()> {
        let outcome = match action {
            Action::Digit(d) => {
                self.push_digit(d, config);
                Ok(())
            }
            Action::Dot => {
                self.push_dot(config);
                Ok(())
            }
            Action::ToggleSign => self.toggle_sign(config),
            Action::Percent => self.percent(config),
            Action::Backspace => {
                self.backspace();
                Ok(())
            }
            Action::ClearAll => {
                self.reset();
                Ok(())
            }
            Action::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
            Action::SetOperator(op) => self.set_operator(op, config),
            Action::Equals => self.equals(config),
        };
        if outcome.is_err() {
            self.enter_error();
        }
        outcome
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn enter_error(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.accumulator = None;
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.repeat = None;
    }

    /// Results in exponent form are replaced, not extended, by new input
    fn is_exponent_form(&self) -> bool {
        self.display.contains('e')
    }

    fn push_digit(&mut self, digit: u8, config: &EngineConfig) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.is_error() {
            self.reset();
        }
        if self.awaiting_operand || self.is_exponent_form() || self.display == "0" {
            self.display = ch.to_string();
            self.awaiting_operand = false;
        } else if self.display.chars().count() < config.max_display_len {
            self.display.push(ch);
        }
    }

    fn push_dot(&mut self, config: &EngineConfig) {
        if self.is_error() {
            self.reset();
        }
        if self.awaiting_operand || self.is_exponent_form() {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.')
            && self.display.chars().count() < config.max_display_len
        {
            self.display.push('.');
        }
    }

    fn toggle_sign(&mut self, config: &EngineConfig) -> CalcResult<()> {
        if self.is_error() {
            return Ok(());
        }
        let n = self.read_operand()?;
        if n == 0.0 {
            return Ok(());
        }
        self.display = format_number(-n, &config.format, config.max_display_len);
        self.awaiting_operand = false;
        Ok(())
    }

    fn percent(&mut self, config: &EngineConfig) -> CalcResult<()> {
        if self.is_error() {
            return Ok(());
        }
        let n = self.read_operand()?;
        self.display = format_number(n / 100.0, &config.format, config.max_display_len);
        self.awaiting_operand = false;
        Ok(())
    }

    fn backspace(&mut self) {
        if self.is_error() {
            self.reset();
            return;
        }
        if self.awaiting_operand {
            return;
        }
        if self.is_exponent_form() {
            self.display = "0".to_string();
            return;
        }
        self.display.pop();
        // "-0.05" loses its last digit as "0.0", never "-0.0"
        if self.display.starts_with('-') && self.value() == Some(0.0) {
            self.display.remove(0);
        }
        if self.display.is_empty() || self.value().is_none() {
            self.display = "0".to_string();
        }
    }

    fn clear_entry(&mut self) {
        if self.is_error() {
            self.reset();
            return;
        }
        self.display = "0".to_string();
        self.awaiting_operand = true;
    }

    fn set_operator(&mut self, op: Operation, config: &EngineConfig) -> CalcResult<()> {
        if self.is_error() {
            self.reset();
            return Ok(());
        }
        let cur = self.read_operand()?;
        match (self.accumulator, self.pending_operator) {
            (Some(acc), Some(pending)) if !self.awaiting_operand => {
                let result = Calculator::calculate(acc, cur, pending)?;
                self.show_result(result, config);
            }
            // Pressed again before a new operand: substitute, don't evaluate
            (Some(_), Some(_)) => {}
            _ => self.accumulator = Some(self.shown_value(cur, config)),
        }
        self.pending_operator = Some(op);
        self.awaiting_operand = true;
        Ok(())
    }

    fn equals(&mut self, config: &EngineConfig) -> CalcResult<()> {
        if self.is_error() || (self.pending_operator.is_none() && self.repeat.is_none()) {
            return Ok(());
        }
        let cur = self.read_operand()?;
        let (op, left, right) = match (self.pending_operator, self.repeat) {
            (Some(op), _) => {
                let acc = self.accumulator.unwrap_or(cur);
                // `5 + =` reuses the left operand
                let right = if self.awaiting_operand { acc } else { cur };
                (op, acc, right)
            }
            (None, Some((op, right))) => (op, self.shown_value(cur, config), right),
            (None, None) => return Ok(()),
        };
        let result = Calculator::calculate(left, right, op)?;
        self.show_result(result, config);
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.repeat = Some((op, right));
        Ok(())
    }

    fn read_operand(&self) -> CalcResult<f64> {
        self.value()
            .ok_or_else(|| CalcError::InvalidOperand(self.display.clone()))
    }

    /// Full-precision accumulator when the display is still showing it
    fn shown_value(&self, cur: f64, config: &EngineConfig) -> f64 {
        match self.accumulator {
            Some(acc)
                if self.awaiting_operand
                    && format_number(acc, &config.format, config.max_display_len)
                        == self.display =>
            {
                acc
            }
            _ => cur,
        }
    }

    fn show_result(&mut self, result: f64, config: &EngineConfig) {
        self.accumulator = Some(result);
        self.display = format_number(result, &config.format, config.max_display_len);
    }
}
