//! Input/operator state machine
//!
//! The engine owns every piece of calculator state and only changes it
//! through five operations: digit entry, operator entry, function entry,
//! evaluation and reset (all or entry). After each operation the pair
//! `(current text, history text)` in [`Snapshot`] is what a front end draws.
//!
//! Operations never fail. Undefined results (division by zero, square root
//! of a negative, overflow) put the display into [`DisplayValue::Error`].

use crate::config::{EngineConfig, ErrorEntryPolicy};
use crate::core::format::{format_operand, format_result_with};
use crate::core::operations::{Operator, UnaryFunction};
use crate::core::{parse_numeral, CalcError, DisplayValue};

/// A key that extends the numeral being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    /// Decimal digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
}

impl InputSymbol {
    /// Parses a keypad character (`'0'..='9'` or `'.'`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            _ => c.to_digit(10).and_then(|d| Self::digit(d as u8)),
        }
    }

    /// A digit symbol, `None` unless `d` is 0-9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// The character appended to the display
    #[must_use]
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => {
                debug_assert!(*d <= 9, "digit out of range: {d}");
                char::from(b'0' + (*d).min(9))
            }
            Self::Point => '.',
        }
    }
}

/// Whether a binary calculation is in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    /// No operator selected
    #[default]
    Idle,
    /// An operator was chosen and waits for its second operand
    OperandPending {
        /// Numeral captured when the operator was chosen
        previous: String,
        /// The pending operator
        operator: Operator,
    },
}

/// Renderable display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Main display text
    pub current: String,
    /// History line text
    pub history: String,
}

#[derive(Debug, Clone, Default)]
struct CalculatorState {
    display: DisplayValue,
    phase: Phase,
    awaiting_fresh_input: bool,
    history: String,
}

/// Calculator engine - one per session
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
}

impl CalculatorEngine {
    /// Creates an engine in the initial `"0"` state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
        }
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Accessors =====

    /// Main display value
    #[must_use]
    pub fn display(&self) -> &DisplayValue {
        &self.state.display
    }

    /// Main display text (`"Error"` on the error display)
    #[must_use]
    pub fn current_input(&self) -> &str {
        self.state.display.as_str()
    }

    /// Operand captured by the pending operator, empty when idle
    #[must_use]
    pub fn previous_input(&self) -> &str {
        match &self.state.phase {
            Phase::OperandPending { previous, .. } => previous,
            Phase::Idle => "",
        }
    }

    /// The operator awaiting its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        match &self.state.phase {
            Phase::OperandPending { operator, .. } => Some(*operator),
            Phase::Idle => None,
        }
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    /// True when the next digit starts a new numeral
    #[must_use]
    pub fn is_awaiting_fresh_input(&self) -> bool {
        self.state.awaiting_fresh_input
    }

    /// History line text
    #[must_use]
    pub fn history_text(&self) -> &str {
        &self.state.history
    }

    /// True while the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.display.is_error()
    }

    /// The `(current, history)` pair to render
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current_input().to_string(),
            history: self.state.history.clone(),
        }
    }

    // ===== Operations =====

    /// AC: returns every field to its initial value
    pub fn reset_all(&mut self) {
        tracing::debug!("reset all");
        self.state = CalculatorState::default();
    }

    /// CE: clears the display only, keeping the pending operator and history
    pub fn reset_entry(&mut self) {
        tracing::debug!("reset entry");
        self.state.display = DisplayValue::zero();
        self.state.awaiting_fresh_input = false;
    }

    /// Extends the numeral on the display
    pub fn enter_digit(&mut self, symbol: InputSymbol) {
        let ch = symbol.as_char();

        if self.state.display.is_error() && self.config.error_entry == ErrorEntryPolicy::Blocked {
            tracing::debug!(%ch, "digit ignored on error display");
            return;
        }

        if self.state.awaiting_fresh_input || self.state.display.is_error() {
            self.state.display = DisplayValue::Numeral(ch.to_string());
            self.state.awaiting_fresh_input = false;
            return;
        }

        let DisplayValue::Numeral(text) = &mut self.state.display else {
            return;
        };

        if text.as_str() == "0" && symbol != InputSymbol::Point {
            *text = ch.to_string();
        } else if symbol == InputSymbol::Point && text.contains('.') {
            tracing::trace!("second decimal point dropped");
        } else {
            text.push(ch);
        }
    }

    /// Selects a binary operator, finishing a chained calculation first
    pub fn enter_operator(&mut self, operator: Operator) {
        if self.pending_operator().is_some() && !self.state.awaiting_fresh_input {
            self.evaluate();
        }

        let DisplayValue::Numeral(previous) = &self.state.display else {
            tracing::debug!(?operator, "operator ignored on error display");
            return;
        };

        let previous = previous.clone();
        self.state.history = format!("{previous} {}", operator.symbol());
        tracing::debug!(%previous, ?operator, "operator pending");
        self.state.phase = Phase::OperandPending { previous, operator };
        self.state.awaiting_fresh_input = true;
    }

    /// Applies a unary function to the display immediately
    pub fn enter_function(&mut self, function: UnaryFunction) {
        let Some(operand) = self.state.display.value() else {
            tracing::debug!(?function, "function ignored on error display");
            return;
        };

        match function.apply(operand) {
            Ok(result) => {
                self.state.history = format!("{}({}) =", function.symbol(), format_operand(operand));
                self.state.display = DisplayValue::Numeral(self.format(result));
            }
            Err(e) => {
                tracing::warn!(error = %e, ?function, operand, "function result undefined");
                self.state.display = DisplayValue::Error;
            }
        }
        self.state.awaiting_fresh_input = true;
    }

    /// `=`: applies the pending operator to the captured and displayed operands
    ///
    /// Does nothing without a pending operator or before a second operand
    /// has been typed.
    pub fn evaluate(&mut self) {
        if self.state.awaiting_fresh_input {
            return;
        }
        let Phase::OperandPending { previous, operator } = &self.state.phase else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (parse_numeral(previous), self.state.display.value()) else {
            return;
        };

        let operator = *operator;
        let previous = previous.clone();
        let rhs_text = format_operand(rhs);

        match operator.apply(lhs, rhs) {
            Ok(result) => {
                self.state.history = format!("{previous} {} {rhs_text} =", operator.symbol());
                self.state.display = DisplayValue::Numeral(self.format(result));
                tracing::debug!(%previous, ?operator, rhs, result, "evaluated");
            }
            Err(CalcError::DivisionByZero) => {
                tracing::warn!(%previous, "division by zero");
                self.state.history.push_str(&format!(" {rhs_text} ="));
                self.state.display = DisplayValue::Error;
            }
            Err(e) => {
                tracing::warn!(error = %e, %previous, ?operator, rhs, "result undefined");
                self.state.history = format!("{previous} {} {rhs_text} =", operator.symbol());
                self.state.display = DisplayValue::Error;
            }
        }

        self.state.phase = Phase::Idle;
        self.state.awaiting_fresh_input = true;
    }

    fn format(&self, value: f64) -> String {
        format_result_with(value, self.config.max_fraction_digits)
    }
}
