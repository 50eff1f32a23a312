//! Session title derivation.

/// Number of leading words of the first question kept in the title.
pub const TITLE_WORDS: usize = 5;

/// Maximum title length in characters before truncation.
pub const TITLE_MAX_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// Derive a session title from the first user message.
///
/// Takes the first [`TITLE_WORDS`] whitespace-separated words joined by single
/// spaces. Anything longer than [`TITLE_MAX_CHARS`] characters is cut there
/// and marked with `...`.
pub fn derive_title(content: &str) -> String {
    let words = content
        .split_whitespace()
        .take(TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    match words.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &words[..cut]),
        None => words,
    }
}
