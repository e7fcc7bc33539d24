use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_TOKEN_LEN;

// Letters, numbers and underscore. Combining marks are separators, so
// decomposed "cafe\u{301}" yields "cafe".
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word-run pattern is valid"));

/// Splits `text` into lowercase word tokens.
///
/// A token is a maximal run of letters, numbers or underscores at least
/// [`MIN_TOKEN_LEN`] characters long. Everything else, including punctuation,
/// combining marks and single letters such as `a`, is ignored.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RUN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
