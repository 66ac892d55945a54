//! Messages driving the upload form, in the Elm architecture style.
//!
//! Every DOM event the controller cares about becomes one of these;
//! [`crate::FormState::update`] applies them synchronously.

use crate::model::StepDirection;

/// Events the form reacts to.
///
/// Generic over the file handle so the state machine can be exercised
/// without a browser (`F = web_sys::File` in the wasm build).
#[derive(Debug, Clone)]
pub enum Message<F> {
    // File selection
    /// A batch of (name, handle) pairs from a drop or picker event
    FilesAdded(Vec<(String, F)>),

    // Percentage field
    /// Field text changed by typing; re-validates, never rewrites
    PercentTyped(String),
    /// One stepper click; clamps and rewrites the display text
    PercentStepped(StepDirection),

    // Line selector
    /// The production line choice changed
    LineChanged(String),

    // Submission
    /// The upload request went out
    UploadStarted,
    /// The upload request finished, successfully or not
    UploadFinished,
}
