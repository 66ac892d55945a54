//! Form state and synchronous update logic.
//!
//! Single-threaded by construction: the only suspension point in the
//! whole workflow is the upload future, and every mutation happens in
//! an event handler on the main thread.

use crate::message::Message;
use crate::model::{SelectedFiles, percent};

/// Whole state of the upload form.
#[derive(Debug)]
pub struct FormState<F> {
    /// Accumulated file selection
    pub files: SelectedFiles<F>,
    /// Raw text of the percentage field
    pub percent_text: String,
    /// Value of the line selector; `None` when the page has none
    pub line: Option<String>,
    /// An upload is in flight
    pub busy: bool,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FormState<F> {
    /// Fresh state for a page without a line selector.
    pub fn new() -> Self {
        Self {
            files: SelectedFiles::default(),
            percent_text: String::from("0%"),
            line: None,
            busy: false,
        }
    }

    /// Fresh state for a page that carries the line selector.
    pub fn with_line_selector(initial: impl Into<String>) -> Self {
        Self {
            line: Some(initial.into()),
            ..Self::new()
        }
    }

    /// Apply one message.
    pub fn update(&mut self, message: Message<F>) {
        match message {
            Message::FilesAdded(batch) => self.files.insert_all(batch),
            Message::PercentTyped(text) => self.percent_text = text,
            Message::PercentStepped(direction) => {
                self.percent_text = percent::display(percent::step(&self.percent_text, direction));
            }
            Message::LineChanged(value) => self.line = Some(value),
            Message::UploadStarted => self.busy = true,
            Message::UploadFinished => self.busy = false,
        }
    }

    /// Enablement rule for the submit action.
    ///
    /// At least one file, a percentage inside `[0, 100]`, and a
    /// non-empty line choice where the selector exists. Checked
    /// synchronously after every message; any violation disables
    /// submit immediately.
    pub fn can_submit(&self) -> bool {
        !self.files.is_empty()
            && percent::is_valid(&self.percent_text)
            && self.line.as_ref().map(|line| !line.is_empty()).unwrap_or(true)
    }

    /// Whether the submit control is clickable right now.
    ///
    /// Same as [`Self::can_submit`] but also held down while an upload
    /// is in flight, so a double-click cannot start two requests.
    pub fn submit_enabled(&self) -> bool {
        self.can_submit() && !self.busy
    }

    /// Bare number string for the `porcentagem` form field.
    pub fn percent_payload(&self) -> Option<String> {
        percent::payload(&self.percent_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StepDirection;

    fn batch(names: &[&str]) -> Message<()> {
        Message::FilesAdded(names.iter().map(|name| ((*name).to_string(), ())).collect())
    }

    fn valid_state() -> FormState<()> {
        let mut state = FormState::new();
        state.update(batch(&["a.rip"]));
        state.update(Message::PercentTyped("10%".to_string()));
        state
    }

    #[test]
    fn drop_then_picker_accumulates_all_distinct_names() {
        let mut state = FormState::new();
        state.update(batch(&["a.rip", "b.rip", "c.rip"]));
        state.update(batch(&["d.rip", "e.rip"]));
        assert_eq!(state.files.len(), 5);
    }

    #[test]
    fn stepping_clamps_and_rewrites_the_display_text() {
        let mut state = FormState::<()>::new();
        state.update(Message::PercentTyped("98".to_string()));
        state.update(Message::PercentStepped(StepDirection::Up));
        assert_eq!(state.percent_text, "100%");

        state.update(Message::PercentTyped("2".to_string()));
        state.update(Message::PercentStepped(StepDirection::Down));
        assert_eq!(state.percent_text, "0%");
    }

    #[test]
    fn submit_disabled_without_files_regardless_of_percent() {
        let mut state = FormState::<()>::new();
        state.update(Message::PercentTyped("50%".to_string()));
        assert!(!state.can_submit());
    }

    #[test]
    fn submit_disabled_for_out_of_range_or_garbage_percent() {
        let mut state = valid_state();
        state.update(Message::PercentTyped("150".to_string()));
        assert!(!state.can_submit());
        state.update(Message::PercentTyped("abc".to_string()));
        assert!(!state.can_submit());
        state.update(Message::PercentTyped("100".to_string()));
        assert!(state.can_submit());
    }

    #[test]
    fn submit_requires_a_line_choice_when_the_selector_exists() {
        let mut state = FormState::with_line_selector("");
        state.update(batch(&["a.rip"]));
        state.update(Message::PercentTyped("10".to_string()));
        assert!(!state.can_submit());
        state.update(Message::LineChanged("linha-2".to_string()));
        assert!(state.can_submit());
    }

    #[test]
    fn in_flight_upload_holds_the_button_down() {
        let mut state = valid_state();
        assert!(state.submit_enabled());
        state.update(Message::UploadStarted);
        assert!(state.can_submit());
        assert!(!state.submit_enabled());
        state.update(Message::UploadFinished);
        assert!(state.submit_enabled());
    }

    #[test]
    fn percent_payload_has_no_glyph() {
        let state = valid_state();
        assert_eq!(state.percent_payload(), Some("10".to_string()));
    }
}
