//! TUI Frontend for Calculator

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{button_at, button_rect, layout, render, Areas, CalculatorUI};
