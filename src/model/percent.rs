//! Bounded percentage field with fixed-step adjustment.
//!
//! The field holds raw text (the user can type anything); parsing
//! tolerates the trailing `%` glyph the steppers write back.

use crate::constants::{PERCENT_MAX, PERCENT_MIN, PERCENT_STEP};

/// Direction of one stepper click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Increment button
    Up,
    /// Decrement button
    Down,
}

/// Parse the field text into a finite number, ignoring a trailing `%`.
pub fn parse(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_suffix('%')
        .map(str::trim_end)
        .unwrap_or(trimmed);
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Whether the field text holds a percentage inside the accepted range.
pub fn is_valid(text: &str) -> bool {
    parse(text).is_some_and(|value| (PERCENT_MIN..=PERCENT_MAX).contains(&value))
}

/// Apply one stepper click to the current text, clamped to the range.
///
/// Unparseable text steps from the lower bound.
pub fn step(text: &str, direction: StepDirection) -> f64 {
    let current = parse(text).unwrap_or(PERCENT_MIN);
    let next = match direction {
        StepDirection::Up => current + PERCENT_STEP,
        StepDirection::Down => current - PERCENT_STEP,
    };
    next.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Format a stepped value back into field text with the `%` glyph.
pub fn display(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value}%")
    }
}

/// Bare number string for the form payload, without the `%` glyph.
pub fn payload(text: &str) -> Option<String> {
    let value = parse(text)?;
    if value.fract() == 0.0 {
        Some(format!("{value:.0}"))
    } else {
        Some(format!("{value}"))
    }
}
