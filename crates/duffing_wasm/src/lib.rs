//! WASM bridge between the Duffing core and the browser UI.
//!
//! The UI owns presentation (tabs, inputs, charts); this crate turns its
//! parameter set into core calls and ships the resulting series back as plain
//! JS objects.

mod series;
mod system;

pub use system::WasmDuffing;
