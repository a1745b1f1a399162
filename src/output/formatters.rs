//! Formatting utilities for terminal output

use crate::core::Mark;

/// Render a guess with bracketed feedback: `[x]` hit, `(x)` present, ` x ` miss
///
/// Letters without a matching mark are dropped.
#[must_use]
pub fn feedback_line(guess: &str, marks: &[Mark]) -> String {
    let mut line = String::with_capacity(marks.len() * 3);

    for (letter, mark) in guess.chars().zip(marks) {
        let (open, close) = match mark {
            Mark::Hit => ('[', ']'),
            Mark::Present => ('(', ')'),
            Mark::Miss => (' ', ' '),
        };
        line.push(open);
        line.push(letter);
        line.push(close);
    }

    line
}

/// Legend explaining [`feedback_line`] output
pub const FEEDBACK_LEGEND: &str =
    "Feedback legend: [x] right letter and position, (x) elsewhere in the word, ' x ' not in the word";

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
