//! Binary operators and unary functions

use crate::core::{CalcError, CalcResult};

/// Binary operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbol shown in the history line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Keyboard key that selects this operator
    #[must_use]
    pub const fn key(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Looks up the operator bound to a keyboard key
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Applies the operator to `lhs` and `rhs`
    ///
    /// Fails on a zero divisor and on any non-finite result.
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        check_finite(result)
    }
}

/// Unary function applied immediately to the displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    /// Square root
    Sqrt,
}

impl UnaryFunction {
    /// Symbol shown in the history line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Sqrt => "√",
        }
    }

    /// Applies the function to `operand`
    pub fn apply(&self, operand: f64) -> CalcResult<f64> {
        match self {
            Self::Sqrt => {
                if operand < 0.0 {
                    return Err(CalcError::NegativeSquareRoot(operand));
                }
                check_finite(operand.sqrt())
            }
        }
    }
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NonFinite)
    }
}
