//! Calculator commands and the keyboard binding table
//!
//! Every front end (browser keydown, keypad click, terminal key) is reduced
//! to a [`Command`] before it reaches the engine.

use crate::core::{CalculatorEngine, InputSymbol, Operator, UnaryFunction};

/// One call into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Digit or decimal point entry
    Input(InputSymbol),
    /// Binary operator selection
    Operator(Operator),
    /// Unary function applied immediately
    Function(UnaryFunction),
    /// `=`
    Evaluate,
    /// AC
    ResetAll,
    /// CE
    ResetEntry,
}

impl Command {
    /// Maps a browser `KeyboardEvent.key` value to a command
    ///
    /// | Key | Command |
    /// |---|---|
    /// | `0`-`9`, `.` | digit entry |
    /// | `+` `-` `*` `/` | operator |
    /// | `Enter`, `=` | evaluate |
    /// | `Escape` | reset all |
    /// | `Backspace` | reset entry |
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => return Some(Self::Evaluate),
            "Escape" => return Some(Self::ResetAll),
            "Backspace" => return Some(Self::ResetEntry),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::from_char(c)
    }

    /// Maps a single typed character to a command
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(symbol) = InputSymbol::from_char(c) {
            return Some(Self::Input(symbol));
        }
        if let Some(op) = Operator::from_key(c) {
            return Some(Self::Operator(op));
        }
        (c == '=').then_some(Self::Evaluate)
    }

    /// Applies the command to an engine
    pub fn apply(self, engine: &mut CalculatorEngine) {
        tracing::debug!(command = ?self, "apply");
        match self {
            Self::Input(symbol) => engine.enter_digit(symbol),
            Self::Operator(op) => engine.enter_operator(op),
            Self::Function(f) => engine.enter_function(f),
            Self::Evaluate => engine.evaluate(),
            Self::ResetAll => engine.reset_all(),
            Self::ResetEntry => engine.reset_entry(),
        }
    }

    /// Button label for this command
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Input(symbol) => symbol.as_char().to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(f) => f.symbol().to_string(),
            Self::Evaluate => "=".to_string(),
            Self::ResetAll => "AC".to_string(),
            Self::ResetEntry => "CE".to_string(),
        }
    }
}
