//! The calculator engine: one method per logical key
//!
//! [`CalculatorEngine`] owns a [`CalculatorState`] and an [`EngineConfig`].
//! Actions never fail from the caller's point of view; an arithmetic failure
//! shows `"Error"` and its cause is kept in [`CalculatorEngine::last_error`].

use super::action::Action;
use super::config::EngineConfig;
use super::format::format_number;
use super::state::CalculatorState;
use super::{CalcError, ConfigError, Operation};
use tracing::{debug, trace};

/// Keystroke-driven pocket calculator
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
    last_error: Option<CalcError>,
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::new(),
            config,
            last_error: None,
        })
    }

    /// Applies one action and returns the new display
    pub fn apply(&mut self, action: Action) -> &str {
        match self.state.apply(action, &self.config) {
            Ok(()) => {
                if action == Action::ClearAll {
                    self.last_error = None;
                }
            }
            Err(err) => {
                debug!(%action, error = %err, "calculator entered error state");
                self.last_error = Some(err);
            }
        }
        trace!(
            %action,
            display = self.state.display(),
            awaiting_operand = self.state.awaiting_operand(),
            "applied action"
        );
        if let (Action::SetOperator(_) | Action::Equals, Some(acc)) =
            (action, self.state.accumulator())
        {
            debug!(
                %action,
                accumulator = acc,
                pending = ?self.state.pending_operator(),
                "evaluation step"
            );
        }
        self.state.display()
    }

    /// Applies a sequence of actions and returns the final display
    pub fn apply_all<I>(&mut self, actions: I) -> &str
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.apply(action);
        }
        self.state.display()
    }

    /// Enters a digit (0-9)
    pub fn digit(&mut self, d: u8) {
        self.apply(Action::Digit(d));
    }

    /// Enters the decimal point
    pub fn dot(&mut self) {
        self.apply(Action::Dot);
    }

    /// Negates the displayed value
    pub fn toggle_sign(&mut self) {
        self.apply(Action::ToggleSign);
    }

    /// Divides the displayed value by 100
    pub fn percent(&mut self) {
        self.apply(Action::Percent);
    }

    /// Erases the last typed character
    pub fn backspace(&mut self) {
        self.apply(Action::Backspace);
    }

    /// Resets to the initial state
    pub fn clear_all(&mut self) {
        self.apply(Action::ClearAll);
    }

    /// Resets only the entry being typed
    pub fn clear_entry(&mut self) {
        self.apply(Action::ClearEntry);
    }

    /// Chooses a binary operator
    pub fn set_operator(&mut self, op: Operation) {
        self.apply(Action::SetOperator(op));
    }

    /// Evaluates the pending operation
    pub fn equals(&mut self) {
        self.apply(Action::Equals);
    }

    /// Current display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Left operand of the operation in progress
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.state.accumulator()
    }

    /// Operator waiting for its right operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.state.pending_operator()
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.state.awaiting_operand()
    }

    /// True when the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Why the engine last entered the error state; cleared by `ClearAll`
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Snapshot of the full interaction state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Auxiliary line for the host, e.g. `"12 ×"` while an operator is pending
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        let acc = self.state.accumulator()?;
        let op = self.state.pending_operator()?;
        let left = format_number(acc, &self.config.format, self.config.max_display_len);
        Some(format!("{left} {op}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::ERROR_DISPLAY;

    // ===== Constructor tests =====

    #[test]
    fn test_engine_new() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.display(), "0");
        assert_eq!(engine.accumulator(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_operand());
        assert!(engine.last_error().is_none());
    }

    #[test]
    fn test_engine_with_config() {
        let config = EngineConfig::default().with_max_display_len(7);
        let mut engine = CalculatorEngine::with_config(config).unwrap();
        for _ in 0..9 {
            engine.digit(9);
        }
        assert_eq!(engine.display(), "9999999");
        assert_eq!(engine.config().max_display_len, 7);
    }

    #[test]
    fn test_narrowest_display_holds_negated_result() {
        let config = EngineConfig::default().with_max_display_len(EngineConfig::MIN_DISPLAY_LEN);
        let mut engine = CalculatorEngine::with_config(config).unwrap();
        engine.apply_all([
            Action::Digit(9),
            Action::Digit(9),
            Action::Digit(9),
            Action::SetOperator(Operation::Multiply),
            Action::Digit(9),
            Action::Digit(9),
            Action::Digit(9),
            Action::Equals,
            Action::ToggleSign,
        ]);
        assert_eq!(engine.display(), "-998001");
        engine.apply_all([Action::SetOperator(Operation::Multiply), Action::Equals]);
        assert_eq!(engine.display(), "9.96e11");
        engine.toggle_sign();
        assert!(engine.display().chars().count() <= EngineConfig::MIN_DISPLAY_LEN);
    }

    #[test]
    fn test_engine_with_invalid_config() {
        let config = EngineConfig::default().with_max_display_len(0);
        assert!(matches!(
            CalculatorEngine::with_config(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_engine_debug() {
        let engine = CalculatorEngine::new();
        assert!(format!("{engine:?}").contains("CalculatorEngine"));
    }

    // ===== Named actions =====

    #[test]
    fn test_named_actions() {
        let mut engine = CalculatorEngine::new();
        engine.digit(1);
        engine.digit(2);
        engine.dot();
        engine.digit(5);
        engine.set_operator(Operation::Multiply);
        engine.digit(2);
        engine.equals();
        assert_eq!(engine.display(), "25");
        engine.toggle_sign();
        assert_eq!(engine.display(), "-25");
        engine.percent();
        assert_eq!(engine.display(), "-0.25");
        engine.backspace();
        assert_eq!(engine.display(), "-0.2");
        engine.clear_entry();
        assert_eq!(engine.display(), "0");
        engine.clear_all();
        assert_eq!(engine.state(), &CalculatorState::new());
    }

    #[test]
    fn test_apply_all_returns_display() {
        let mut engine = CalculatorEngine::new();
        let display = engine.apply_all([
            Action::Digit(2),
            Action::SetOperator(Operation::Add),
            Action::Digit(3),
            Action::SetOperator(Operation::Multiply),
            Action::Digit(4),
            Action::Equals,
        ]);
        assert_eq!(display, "20");
    }

    // ===== Error reporting =====

    #[test]
    fn test_last_error_division_by_zero() {
        let mut engine = CalculatorEngine::new();
        engine.digit(8);
        engine.set_operator(Operation::Divide);
        engine.digit(0);
        engine.equals();
        assert_eq!(engine.display(), ERROR_DISPLAY);
        assert!(engine.is_error());
        assert_eq!(engine.last_error(), Some(&CalcError::DivisionByZero));
    }

    #[test]
    fn test_last_error_cleared_by_clear_all() {
        let mut engine = CalculatorEngine::new();
        engine.apply_all([
            Action::Digit(1),
            Action::SetOperator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
        ]);
        engine.clear_all();
        assert!(engine.last_error().is_none());
        assert_eq!(engine.display(), "0");
    }

    #[test]
    fn test_last_error_kept_until_clear() {
        let mut engine = CalculatorEngine::new();
        engine.apply_all([
            Action::Digit(1),
            Action::SetOperator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
            Action::Digit(4),
        ]);
        assert_eq!(engine.display(), "4");
        assert_eq!(engine.last_error(), Some(&CalcError::DivisionByZero));
    }

    // ===== Auxiliary display =====

    #[test]
    fn test_pending_expression() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.pending_expression(), None);
        engine.digit(1);
        engine.digit(2);
        engine.set_operator(Operation::Multiply);
        assert_eq!(engine.pending_expression().as_deref(), Some("12 ×"));
        engine.set_operator(Operation::Subtract);
        assert_eq!(engine.pending_expression().as_deref(), Some("12 −"));
        engine.digit(2);
        engine.equals();
        assert_eq!(engine.pending_expression(), None);
    }
}
