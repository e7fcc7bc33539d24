//! Bag-of-words cosine similarity.
//!
//! Text is tokenized by [`tokenize`], counted into a [`TermCounts`] vector,
//! and two vectors are compared with cosine similarity. Scores lie in
//! `[0.0, 1.0]`: `1.0` for identical term-frequency profiles, `0.0` when the
//! texts share no token or either side has none.
//!
//! # Precomputed profiles
//!
//! Comparing two `TermCounts` only touches the tokens they share, so item
//! descriptions can be counted once and reused for every query. The dot
//! product and squared norms are kept as integers and converted to `f64` only
//! in the final division, which makes [`score`] exactly symmetric and
//! `score(t, t) == 1.0` whenever `t` has a token.

pub mod scorer;
pub mod tokenizer;
pub mod types;


pub use scorer::score;
pub use tokenizer::tokenize;
pub use types::TermCounts;
