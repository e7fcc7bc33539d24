use std::collections::HashMap;

use super::tokenizer::tokenize;

/// Raw term-frequency vector of a single text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts {
    counts: HashMap<String, u32>,
    squared_norm: u64,
}

impl TermCounts {
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }

        let squared_norm = counts.values().map(|&c| u64::from(c) * u64::from(c)).sum();

        Self {
            counts,
            squared_norm,
        }
    }

    /// Occurrences of `token` (already lowercased).
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn total_tokens(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn squared_norm(&self) -> u64 {
        self.squared_norm
    }

    /// Sum of count products over shared tokens.
    pub fn dot(&self, other: &TermCounts) -> u64 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .counts
            .iter()
            .map(|(token, &count)| u64::from(count) * u64::from(large.count(token)))
            .sum()
    }

    /// Cosine similarity in `[0.0, 1.0]`; `0.0` if either vector is empty.
    pub fn cosine(&self, other: &TermCounts) -> f64 {
        if self.squared_norm == 0 || other.squared_norm == 0 {
            return 0.0;
        }

        let dot = self.dot(other);
        if dot == 0 {
            return 0.0;
        }

        let norm_product = u128::from(self.squared_norm) * u128::from(other.squared_norm);
        let denominator = (norm_product as f64).sqrt();
        dot as f64 / denominator
    }
}
