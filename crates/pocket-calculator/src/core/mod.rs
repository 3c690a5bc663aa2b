//! Core calculator module
//!
//! Holds the arithmetic, the result formatter and the input/operator state
//! machine. Nothing in here knows about a DOM or a terminal.

pub mod engine;
pub mod format;
mod operations;

pub use engine::{CalculatorEngine, InputSymbol, Phase, Snapshot};
pub use format::{format_operand, format_result, format_result_with};
pub use operations::{Operator, UnaryFunction};

use thiserror::Error;

/// Text shown in place of a number after a domain error
pub const ERROR_TEXT: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Error)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,

    /// Square root of a negative operand
    #[error("Square root of negative number: {0}")]
    NegativeSquareRoot(f64),

    /// Result overflowed or is otherwise not a finite number
    #[error("Result is not a finite number")]
    NonFinite,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed
    #[error("Invalid configuration file: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Returns true for errors that come from the arithmetic itself
    #[must_use]
    pub const fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::NegativeSquareRoot(_) | Self::NonFinite
        )
    }
}

/// The value shown on the main display
///
/// An error is its own variant so that digit entry can never append onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// A numeral being typed or a formatted result, e.g. `"0"`, `"3.14"`, `"."`
    Numeral(String),
    /// Undefined result (division by zero, square root of a negative)
    Error,
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayValue {
    /// The initial `"0"` numeral
    #[must_use]
    pub fn zero() -> Self {
        Self::Numeral("0".to_string())
    }

    /// Returns true when showing the error marker
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Numeric value of the numeral, `None` for the error marker
    ///
    /// A lone `"."` counts as zero.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeral(text) => parse_numeral(text),
            Self::Error => None,
        }
    }
}

/// Parses numeral text as typed on the keypad; `"."` is zero
pub(crate) fn parse_numeral(text: &str) -> Option<f64> {
    if text == "." {
        return Some(0.0);
    }
    text.parse().ok()
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
