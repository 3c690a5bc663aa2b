//! Mock DOM for browser testing
//!
//! An in-memory stand-in for the calculator page: a `#display` element, a
//! `#history` element and one `<button>` per keypad key. It implements
//! [`Renderer`], so a [`Session`](crate::session::Session) can draw into it
//! exactly as the browser build draws into the real document.

use std::collections::HashMap;

use crate::keypad::Keypad;
use crate::session::Renderer;

/// ID of the main display element
pub const DISPLAY_ID: &str = "display";
/// ID of the history line element
pub const HISTORY_ID: &str = "history";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// CSS classes
    pub classes: Vec<String>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Pointer click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Document-level keydown
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    render_count: usize,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: display, history line and keypad buttons
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(HISTORY_ID)
                .with_class("history"),
        );

        for button in Keypad::new().buttons() {
            dom.register_element(
                DomElement::new("button")
                    .with_id(&button.id)
                    .with_class("btn")
                    .with_text(&button.label()),
            );
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// How many times the calculator has rendered into this DOM
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Renderer for MockDom {
    fn render(&mut self, current: &str, history: &str) {
        self.set_element_text(DISPLAY_ID, current);
        self.set_element_text(HISTORY_ID, history);

        if let Some(display) = self.get_element_mut(DISPLAY_ID) {
            if current == crate::core::ERROR_TEXT {
                display.add_class("error");
            } else {
                display.remove_class("error");
            }
        }
        self.render_count += 1;
    }
}
