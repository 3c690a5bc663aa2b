//! Pointer keypad layout shared by the browser and terminal front ends
//!
//! Layout:
//! ```text
//! [ AC ] [ CE ] [ √ ] [ ÷ ]
//! [ 7  ] [ 8  ] [ 9 ] [ × ]
//! [ 4  ] [ 5  ] [ 6 ] [ − ]
//! [ 1  ] [ 2  ] [ 3 ] [ + ]
//! [ 0         ] [ . ] [ = ]
//! ```

use crate::command::Command;
use crate::core::{InputSymbol, Operator, UnaryFunction};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The command this button dispatches
    pub command: Command,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        Self {
            id: element_id(command),
            command,
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Button label
    #[must_use]
    pub fn label(&self) -> String {
        self.command.label()
    }

    /// Returns true if the button covers `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// DOM element ID for a command's button
#[must_use]
pub fn element_id(command: Command) -> String {
    match command {
        Command::Input(InputSymbol::Digit(d)) => format!("btn-{d}"),
        Command::Input(InputSymbol::Point) => "btn-decimal".to_string(),
        Command::Operator(op) => format!("btn-{}", operator_name(op)),
        Command::Function(UnaryFunction::Sqrt) => "btn-sqrt".to_string(),
        Command::Evaluate => "btn-equals".to_string(),
        Command::ResetAll => "btn-clear-all".to_string(),
        Command::ResetEntry => "btn-clear-entry".to_string(),
    }
}

fn operator_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Command::{Evaluate, Function, Input, ResetAll, ResetEntry};
        let digit = |d: u8| Input(InputSymbol::Digit(d));
        let op = Command::Operator;

        let buttons = vec![
            // Row 0: AC CE √ ÷
            KeypadButton::new(ResetAll, 0, 0),
            KeypadButton::new(ResetEntry, 0, 1),
            KeypadButton::new(Function(UnaryFunction::Sqrt), 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButton::new(digit(7), 1, 0),
            KeypadButton::new(digit(8), 1, 1),
            KeypadButton::new(digit(9), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButton::new(digit(4), 2, 0),
            KeypadButton::new(digit(5), 2, 1),
            KeypadButton::new(digit(6), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(digit(1), 3, 0),
            KeypadButton::new(digit(2), 3, 1),
            KeypadButton::new(digit(3), 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::new(digit(0), 4, 0).with_span(2),
            KeypadButton::new(Input(InputSymbol::Point), 4, 2),
            KeypadButton::new(Evaluate, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Returns the command for a clicked element, if it is a keypad button
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Command> {
        self.find_by_id(element_id).map(|b| b.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 19);
    }

    #[test]
    fn test_every_cell_covered_once() {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.buttons().iter().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_zero_is_wide() {
        let keypad = Keypad::new();
        let zero = keypad.get_button_at(4, 1).unwrap();
        assert_eq!(zero.id, "btn-0");
        assert_eq!(zero.span, 2);
        assert_eq!(keypad.get_button_at(4, 0), Some(zero));
    }

    #[test]
    fn test_ids_unique() {
        let keypad = Keypad::new();
        let ids: HashSet<_> = keypad.buttons().iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_out_of_range() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-7"),
            Some(Command::Input(InputSymbol::Digit(7)))
        );
        assert_eq!(
            keypad.handle_click("btn-minus"),
            Some(Command::Operator(Operator::Subtract))
        );
        assert_eq!(
            keypad.handle_click("btn-sqrt"),
            Some(Command::Function(UnaryFunction::Sqrt))
        );
        assert_eq!(keypad.handle_click("btn-clear-all"), Some(Command::ResetAll));
        assert_eq!(keypad.handle_click("btn-clear-entry"), Some(Command::ResetEntry));
        assert_eq!(keypad.handle_click("display"), None);
    }

    #[test]
    fn test_row_iteration() {
        let keypad = Keypad::new();
        let labels: Vec<String> = keypad.row(0).map(KeypadButton::label).collect();
        assert_eq!(labels, vec!["AC", "CE", "√", "÷"]);
    }

    #[test]
    fn test_with_span_minimum() {
        let button = KeypadButton::new(Command::Evaluate, 0, 0).with_span(0);
        assert_eq!(button.span, 1);
    }
}
