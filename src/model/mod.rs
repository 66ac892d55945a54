//! Data models for the upload form.

pub mod percent;
mod selection;

pub use percent::StepDirection;
pub use selection::{SelectedFile, SelectedFiles};
