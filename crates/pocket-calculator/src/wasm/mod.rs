//! Browser front end
//!
//! The mock DOM and its driver are always built so the page behavior can be
//! tested natively; the wasm-bindgen bindings need the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID};
pub use driver::WasmDriver;
