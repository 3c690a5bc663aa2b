//! Browser WASM bindings for the calculator
//!
//! The page script owns event wiring and forwards `keydown` keys and button
//! clicks here:
//!
//! ```js
//! const calc = new BrowserCalculator();
//! document.addEventListener("keydown", (e) => {
//!     if (calc.handle_key(e.key)) e.preventDefault();
//! });
//! document.querySelectorAll("button").forEach((b) =>
//!     b.addEventListener("click", () => calc.handle_button(b.id)));
//! ```

use wasm_bindgen::prelude::*;
use web_sys::{console, Element};

use crate::config::EngineConfig;
use crate::core::ERROR_TEXT;
use crate::keypad::Keypad;
use crate::session::{Renderer, Session};
use crate::wasm::dom::{DISPLAY_ID, HISTORY_ID};

/// Renders into the page's `#display` and `#history` elements
#[derive(Debug)]
struct DocumentRenderer {
    display: Option<Element>,
    history: Option<Element>,
}

impl DocumentRenderer {
    fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let lookup = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
        let renderer = Self {
            display: lookup(DISPLAY_ID),
            history: lookup(HISTORY_ID),
        };
        if renderer.display.is_none() {
            console::warn_1(&format!("#{DISPLAY_ID} element not found").into());
        }
        renderer
    }
}

impl Renderer for DocumentRenderer {
    fn render(&mut self, current: &str, history: &str) {
        if let Some(display) = &self.display {
            display.set_text_content(Some(current));
            if let Err(e) = display
                .class_list()
                .toggle_with_force("error", current == ERROR_TEXT)
            {
                console::warn_2(&"failed to toggle #display error class:".into(), &e);
            }
        }
        if let Some(line) = &self.history {
            line.set_text_content(Some(history));
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    session: Session<DocumentRenderer>,
    keypad: Keypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator bound to the current document
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create a calculator from a JSON engine configuration
    pub fn with_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(config))
    }

    /// Main display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.session.engine().current_input().to_string()
    }

    /// History line text
    #[wasm_bindgen(getter)]
    pub fn history(&self) -> String {
        self.session.engine().history_text().to_string()
    }

    /// Handle a `KeyboardEvent.key`; true when the key is bound
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.session.handle_key(key)
    }

    /// Handle a keypad button click by element ID; true when it is a keypad button
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        match self.keypad.handle_click(button_id) {
            Some(command) => {
                self.session.dispatch(command);
                true
            }
            None => false,
        }
    }
}

impl BrowserCalculator {
    fn build(config: EngineConfig) -> Self {
        console_error_panic_hook::set_once();
        Self {
            session: Session::with_config(config, DocumentRenderer::from_document()),
            keypad: Keypad::new(),
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
