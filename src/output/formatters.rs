//! Formatting utilities for terminal output

use crate::core::Word;
use crate::search::SearchPath;

/// Render `to` with the letters that differ from `from` uppercased
///
/// Words of different lengths are returned unchanged.
#[must_use]
pub fn highlight_change(from: &Word, to: &Word) -> String {
    if from.len() != to.len() {
        return to.text().to_owned();
    }

    from.as_bytes()
        .iter()
        .zip(to.as_bytes())
        .map(|(&a, &b)| {
            if a == b {
                char::from(b)
            } else {
                char::from(b.to_ascii_uppercase())
            }
        })
        .collect()
}

/// Format a path as numbered rungs, one per line, with each change highlighted
#[must_use]
pub fn format_rungs(path: &SearchPath) -> String {
    let mut lines = Vec::with_capacity(path.len());
    let mut previous: Option<&Word> = None;

    for (i, word) in path.iter().enumerate() {
        let shown = previous.map_or_else(|| word.text().to_owned(), |p| highlight_change(p, word));
        lines.push(format!("  {i:>2}. {shown}"));
        previous = Some(word);
    }

    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
