use super::types::TermCounts;

/// Cosine similarity between the bag-of-words vectors of `text_a` and `text_b`.
pub fn score(text_a: &str, text_b: &str) -> f64 {
    TermCounts::from_text(text_a).cosine(&TermCounts::from_text(text_b))
}
