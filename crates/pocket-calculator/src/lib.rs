//! Pocket Calculator - four-function calculator with two front ends
//!
//! The engine is a small state machine driven by discrete key presses:
//! digits and the decimal point build the current entry, binary operators
//! chain strictly left to right (no precedence), and `=` completes the
//! pending operation. Square root acts on the current entry immediately.
//!
//! Front ends:
//!
//! - **Browser**: [`wasm::BrowserCalculator`] behind the `wasm` feature, with
//!   a mock DOM ([`wasm::MockDom`]) that is always compiled for tests.
//! - **Terminal**: [`tui`] behind the default `tui` feature, plus the
//!   `pocket-calc` binary.
//!
//! # Example
//!
//! ```rust
//! use pocket_calculator::prelude::*;
//!
//! let mut session = Session::new(RecordingRenderer::new());
//! for key in ["6", "*", "7", "Enter"] {
//!     session.handle_key(key);
//! }
//! assert_eq!(session.engine().current_input(), "42");
//! assert_eq!(session.engine().history_text(), "6 × 7 =");
//! let frame = session.renderer().last().unwrap();
//! assert_eq!((frame.current.as_str(), frame.history.as_str()), ("42", "6 × 7 ="));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod command;
pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::command::Command;
    pub use crate::config::{EngineConfig, ErrorEntryPolicy};
    pub use crate::core::{
        format_result, CalcError, CalcResult, CalculatorEngine, DisplayValue, InputSymbol,
        Operator, Phase, Snapshot, UnaryFunction,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::session::{RecordingRenderer, Renderer, Session};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
