//! Render interface and the engine session that drives it
//!
//! A [`Session`] pairs the engine with whatever draws it. Each command runs to
//! completion and then the renderer is handed the new `(current, history)`
//! pair, synchronously.

use crate::command::Command;
use crate::config::EngineConfig;
use crate::core::{CalculatorEngine, Snapshot};

/// Presentation layer receiving display updates
pub trait Renderer {
    /// Writes the main display and history line
    fn render(&mut self, current: &str, history: &str);
}

/// Renderer that keeps the last frame in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    frames: Vec<Snapshot>,
}

impl RecordingRenderer {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame rendered so far
    #[must_use]
    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }

    /// The most recent frame
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, current: &str, history: &str) {
        self.frames.push(Snapshot {
            current: current.to_string(),
            history: history.to_string(),
        });
    }
}

/// Engine plus renderer for one application session
#[derive(Debug)]
pub struct Session<R> {
    engine: CalculatorEngine,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Creates a session and draws the initial state
    pub fn new(renderer: R) -> Self {
        Self::with_engine(CalculatorEngine::new(), renderer)
    }

    /// Creates a session with a configured engine
    pub fn with_config(config: EngineConfig, renderer: R) -> Self {
        Self::with_engine(CalculatorEngine::with_config(config), renderer)
    }

    /// Creates a session around an existing engine
    pub fn with_engine(engine: CalculatorEngine, renderer: R) -> Self {
        let mut session = Self { engine, renderer };
        session.render();
        session
    }

    /// Applies a command and re-renders
    pub fn dispatch(&mut self, command: Command) {
        command.apply(&mut self.engine);
        self.render();
    }

    /// Applies the command bound to a keyboard key
    ///
    /// Returns false when the key has no binding.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.dispatch(command);
                true
            }
            None => {
                tracing::trace!(key, "unbound key");
                false
            }
        }
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a reference to the renderer
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns a mutable reference to the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the session, returning the renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn render(&mut self) {
        self.renderer
            .render(self.engine.current_input(), self.engine.history_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorEntryPolicy;
    use crate::core::Operator;

    #[test]
    fn test_initial_render() {
        let session = Session::new(RecordingRenderer::new());
        assert_eq!(session.renderer().frames().len(), 1);
        assert_eq!(session.renderer().last().unwrap().current, "0");
        assert_eq!(session.renderer().last().unwrap().history, "");
    }

    #[test]
    fn test_render_after_every_command() {
        let mut session = Session::new(RecordingRenderer::new());
        for key in ["6", "*", "7", "="] {
            assert!(session.handle_key(key));
        }
        let frames = session.renderer().frames();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[2].history, "6 ×");
        assert_eq!(frames[4].current, "42");
        assert_eq!(frames[4].history, "6 × 7 =");
    }

    #[test]
    fn test_unbound_key_does_not_render() {
        let mut session = Session::new(RecordingRenderer::new());
        assert!(!session.handle_key("Shift"));
        assert_eq!(session.renderer().frames().len(), 1);
    }

    #[test]
    fn test_dispatch_operator() {
        let mut session = Session::new(RecordingRenderer::new());
        session.dispatch(Command::Operator(Operator::Add));
        assert_eq!(session.engine().pending_operator(), Some(Operator::Add));
        assert_eq!(session.renderer().last().unwrap().history, "0 +");
    }

    #[test]
    fn test_with_config() {
        let config = EngineConfig::new().with_error_entry(ErrorEntryPolicy::Blocked);
        let session = Session::with_config(config.clone(), RecordingRenderer::new());
        assert_eq!(session.engine().config(), &config);
    }

    #[test]
    fn test_into_renderer() {
        let mut session = Session::new(RecordingRenderer::new());
        session.handle_key("Escape");
        let renderer = session.into_renderer();
        assert_eq!(renderer.frames().len(), 2);
    }
}
