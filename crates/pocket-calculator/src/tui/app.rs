//! TUI Application State

use crate::command::Command;
use crate::config::EngineConfig;
use crate::core::CalculatorEngine;
use crate::keypad::Keypad;

use super::input::KeyAction;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    last_command: Option<Command>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            ..Self::default()
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The most recently applied command, for keypad highlighting
    #[must_use]
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a command to the engine
    pub fn apply(&mut self, command: Command) {
        command.apply(&mut self.engine);
        self.last_command = Some(command);
    }

    /// Handles a key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.apply(command),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}
