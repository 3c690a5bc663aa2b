//! Unified Calculator Driver
//!
//! Write the scenario once, run it against every front end. Both the mock
//! browser and the terminal app implement [`CalculatorDriver`]; the
//! `verify_*` functions below are the shared scenarios.

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses a keyboard key (browser `KeyboardEvent.key` naming)
    fn press_key(&mut self, key: &str);

    /// Clicks a keypad button by element ID
    fn click(&mut self, button_id: &str);

    /// Text on the main display
    fn display_text(&self) -> String;

    /// Text on the history line
    fn history_text(&self) -> String;

    /// Presses each key in turn
    fn press_keys(&mut self, keys: &[&str]) {
        for key in keys {
            self.press_key(key);
        }
    }

    /// Types every character of `text` as its own key
    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press_key(&c.to_string());
        }
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::CalculatorDriver;
    use crate::config::EngineConfig;
    use crate::tui::{self, CalculatorApp, InputHandler};

    /// TUI-specific driver wrapping the calculator app
    ///
    /// Keys go through the crossterm key mapping; clicks are turned into
    /// mouse positions on a virtual 80x24 terminal and hit-tested against
    /// the rendered keypad.
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
        area: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a TUI driver with custom engine configuration
        #[must_use]
        pub fn with_config(config: EngineConfig) -> Self {
            Self::with_app(CalculatorApp::with_config(config))
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
                area: Rect::new(0, 0, 80, 24),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Simulates a left click at a terminal cell
        pub fn click_at(&mut self, column: u16, row: u16) {
            if let Some(command) = tui::button_at(self.area, self.app.keypad(), column, row) {
                self.app.apply(command);
            }
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_key(&mut self, key: &str) {
            if let Some(event) = InputHandler::key_event_for(key) {
                let action = self.input.handle_key(event);
                self.app.handle_action(action);
            }
        }

        fn click(&mut self, button_id: &str) {
            let keypad_area = tui::layout(self.area).keypad;
            let Some(button) = self.app.keypad().find_by_id(button_id) else {
                return;
            };
            let rect = tui::button_rect(keypad_area, self.app.keypad(), button);
            self.click_at(rect.x + rect.width / 2, rect.y + rect.height / 2);
        }

        fn display_text(&self) -> String {
            self.app.engine().current_input().to_string()
        }

        fn history_text(&self) -> String {
            self.app.engine().history_text().to_string()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        ("2+3=", "5", "2 + 3 ="),
        ("10-4=", "6", "10 − 4 ="),
        ("6*7=", "42", "6 × 7 ="),
        ("20/4=", "5", "20 ÷ 4 ="),
    ];
    for (keys, display, history) in cases {
        driver.press_key("Escape");
        driver.type_text(keys);
        assert_eq!(driver.display_text(), display, "keys {keys}");
        assert_eq!(driver.history_text(), history, "keys {keys}");
    }
    driver.press_key("Escape");
}

/// Verifies chained operators evaluate left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_text("3+4+");
    assert_eq!(driver.display_text(), "7");
    assert_eq!(driver.history_text(), "7 +");
    driver.type_text("2");
    driver.press_key("Enter");
    assert_eq!(driver.display_text(), "9");

    // no precedence: 2 + 3 * 4 is (2 + 3) * 4
    driver.press_key("Escape");
    driver.type_text("2+3*4=");
    assert_eq!(driver.display_text(), "20");
    driver.press_key("Escape");
}

/// Verifies digit entry rules
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_text("007");
    assert_eq!(driver.display_text(), "7");

    driver.press_key("Escape");
    driver.type_text("3.14.15");
    assert_eq!(driver.display_text(), "3.1415");

    driver.press_key("Escape");
    driver.type_text(".5");
    assert_eq!(driver.display_text(), "0.5");
    driver.press_key("Escape");
}

/// Verifies result formatting
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_text(".1+.2=");
    assert_eq!(driver.display_text(), "0.3");

    driver.press_key("Escape");
    driver.type_text("1/3=");
    assert_eq!(driver.display_text(), "0.3333333333");

    driver.press_key("Escape");
    driver.type_text("2.5*2=");
    assert_eq!(driver.display_text(), "5");
    driver.press_key("Escape");
}

/// Verifies division by zero and negative square root
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_text("5/0=");
    assert_eq!(driver.display_text(), "Error");
    assert_eq!(driver.history_text(), "5 ÷ 0 =");

    // a digit starts over
    driver.type_text("8");
    assert_eq!(driver.display_text(), "8");

    driver.press_key("Escape");
    driver.type_text("0-9=");
    driver.click("btn-sqrt");
    assert_eq!(driver.display_text(), "Error");
    driver.press_key("Escape");
}

/// Verifies AC and CE
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_text("8-99");
    driver.press_key("Backspace");
    assert_eq!(driver.display_text(), "0");
    assert_eq!(driver.history_text(), "8 −");
    driver.type_text("3=");
    assert_eq!(driver.display_text(), "5");

    driver.press_key("Escape");
    assert_eq!(driver.display_text(), "0");
    assert_eq!(driver.history_text(), "");
}

/// Verifies the pointer keypad
pub fn verify_keypad<D: CalculatorDriver>(driver: &mut D) {
    driver.click("btn-clear-all");
    for id in ["btn-1", "btn-6", "btn-sqrt"] {
        driver.click(id);
    }
    assert_eq!(driver.display_text(), "4");
    assert_eq!(driver.history_text(), "√(16) =");

    for id in ["btn-times", "btn-2", "btn-decimal", "btn-5", "btn-equals"] {
        driver.click(id);
    }
    assert_eq!(driver.display_text(), "10");
    assert_eq!(driver.history_text(), "4 × 2.5 =");

    driver.click("btn-9");
    driver.click("btn-clear-entry");
    assert_eq!(driver.display_text(), "0");
    driver.click("btn-clear-all");
}

/// Runs every scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_digit_entry(driver);
    verify_formatting(driver);
    verify_error_handling(driver);
    verify_clear(driver);
    verify_keypad(driver);
}
