//! tinta-web - browser upload form for the ink consumption calculator.
//!
//! Collects RIP files and an adjustment percentage from the host page,
//! posts them as multipart form data to the consumption endpoint and
//! renders the per-color breakdown the backend returns. Compiled to
//! WebAssembly; all browser glue is gated behind `wasm32`, the form
//! logic itself is target-independent and unit-tested natively.

mod constants;
mod error;
mod message;
mod model;
mod palette;
mod protocol;
mod render;
mod state;

pub use error::UploadError;
pub use message::Message;
pub use model::{SelectedFile, SelectedFiles, StepDirection};
pub use protocol::{ConsumptionItem, ConsumptionReport};
pub use state::FormState;

// Browser-facing glue
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod net;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
