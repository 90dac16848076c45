//! Formatting utilities for terminal output

use crate::core::{FeedbackRecord, Outcome};

/// Format a feedback record as an emoji row
#[must_use]
pub fn feedback_to_emoji(record: &FeedbackRecord) -> String {
    record
        .iter()
        .map(|component| match component.outcome {
            Outcome::Correct => '🟩',
            Outcome::Misplaced => '🟨',
            Outcome::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
