//! Keyboard input handling
//!
//! Maps crossterm key events onto the same bindings as the browser, plus a
//! few terminal-only keys (quit, square root).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::core::UnaryFunction;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the engine
    Command(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Enter => KeyAction::Command(Command::Evaluate),
            KeyCode::Esc => KeyAction::Command(Command::ResetAll),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Command(Command::ResetEntry),
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('s' | 'r') => KeyAction::Command(Command::Function(UnaryFunction::Sqrt)),
            KeyCode::Char(c) => Command::from_char(c).map_or(KeyAction::None, KeyAction::Command),
            _ => KeyAction::None,
        }
    }

    /// Translates a browser `KeyboardEvent.key` name into a crossterm event
    #[must_use]
    pub fn key_event_for(key: &str) -> Option<KeyEvent> {
        let code = match key {
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Esc,
            "Backspace" => KeyCode::Backspace,
            "Delete" => KeyCode::Delete,
            "Tab" => KeyCode::Tab,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(KeyEvent::new(code, KeyModifiers::NONE))
    }
}
