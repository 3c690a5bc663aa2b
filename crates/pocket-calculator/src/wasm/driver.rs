//! WASM Driver - browser event simulation over the mock DOM
//!
//! Events are recorded on the [`MockDom`] and then routed the way the page
//! script routes them: keydown through the keyboard table, clicks through
//! the keypad.

use super::dom::{DomEvent, MockDom, DISPLAY_ID, HISTORY_ID};
use crate::config::EngineConfig;
use crate::core::CalculatorEngine;
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;
use crate::session::Session;

/// WASM Driver wrapping a session rendering into the mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    session: Session<MockDom>,
    keypad: Keypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver on the calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a WASM driver with custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            session: Session::with_config(config, MockDom::calculator()),
            keypad: Keypad::new(),
        }
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        self.session.engine()
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.session.renderer()
    }

    /// Dispatches a DOM event
    ///
    /// Returns true if the event reached the calculator.
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        self.session.renderer_mut().dispatch_event(event.clone());
        match event {
            DomEvent::KeyDown { key } => self.session.handle_key(&key),
            DomEvent::Click { element_id } => match self.keypad.handle_click(&element_id) {
                Some(command) => {
                    self.session.dispatch(command);
                    true
                }
                None => false,
            },
        }
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(DISPLAY_ID)
    }

    /// Gets the history element's text
    #[must_use]
    pub fn history_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(HISTORY_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) {
        self.dispatch(DomEvent::key_down(key));
    }

    fn click(&mut self, button_id: &str) {
        self.dispatch(DomEvent::click(button_id));
    }

    fn display_text(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn history_text(&self) -> String {
        self.history_element_text().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorEntryPolicy;
    use crate::driver;

    #[test]
    fn test_wasm_driver_initial_page() {
        let driver = WasmDriver::new();
        assert_eq!(driver.display_element_text(), Some("0"));
        assert_eq!(driver.history_element_text(), Some(""));
        assert_eq!(driver.dom().render_count(), 1);
    }

    #[test]
    fn test_keydown_renders() {
        let mut driver = WasmDriver::new();
        assert!(driver.dispatch(DomEvent::key_down("7")));
        assert_eq!(driver.display_element_text(), Some("7"));
        assert_eq!(driver.dom().render_count(), 2);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut driver = WasmDriver::new();
        assert!(!driver.dispatch(DomEvent::key_down("Shift")));
        assert_eq!(driver.dom().render_count(), 1);
        assert_eq!(driver.dom().event_history().len(), 1);
    }

    #[test]
    fn test_click_non_button_ignored() {
        let mut driver = WasmDriver::new();
        assert!(!driver.dispatch(DomEvent::click(DISPLAY_ID)));
        assert_eq!(driver.display_text(), "0");
    }

    #[test]
    fn test_error_class_applied() {
        let mut driver = WasmDriver::new();
        driver.type_text("5/0=");
        let display = driver.dom().get_element(DISPLAY_ID).unwrap();
        assert!(display.has_class("error"));
        assert!(driver.engine().is_error());
    }

    #[test]
    fn test_blocked_error_entry() {
        let config = EngineConfig::new().with_error_entry(ErrorEntryPolicy::Blocked);
        let mut driver = WasmDriver::with_config(config);
        driver.type_text("5/0=7");
        assert_eq!(driver.display_text(), "Error");
        driver.press_key("Backspace");
        driver.type_text("7");
        assert_eq!(driver.display_text(), "7");
    }

    #[test]
    fn test_wasm_driver_unified_scenarios() {
        let mut driver = WasmDriver::new();
        driver::verify_all(&mut driver);
    }
}
