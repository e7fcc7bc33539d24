use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, Item};
use crate::scoring::TermCounts;

use super::types::ScoredItem;

/// Ranks a fixed catalog against free-text queries.
///
/// Item descriptions are counted once at construction; each query is
/// tokenized once and compared against every stored profile.
pub struct Recommender {
    catalog: Arc<Catalog>,
    profiles: Vec<TermCounts>,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("catalog_items", &self.catalog.len())
            .finish()
    }
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let profiles = catalog
            .iter()
            .map(|item| TermCounts::from_text(&item.description))
            .collect();

        Self { catalog, profiles }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every item with a positive score, best first.
    pub fn rank(&self, query: &str) -> Vec<ScoredItem<'_>> {
        let query_counts = TermCounts::from_text(query);
        if query_counts.is_empty() {
            debug!("Query has no tokens, nothing to rank");
            return Vec::new();
        }

        let mut scored: Vec<ScoredItem<'_>> = self
            .catalog
            .iter()
            .zip(&self.profiles)
            .map(|(item, profile)| ScoredItem::new(item, profile.cosine(&query_counts)))
            .filter(|scored| scored.is_relevant())
            .collect();

        // Vec::sort_by is stable, so ties keep catalog order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            query_tokens = query_counts.total_tokens(),
            catalog_items = self.catalog.len(),
            matches = scored.len(),
            "Ranked catalog"
        );

        scored
    }

    /// At most `top_n` positively scored items with their scores, best first.
    pub fn recommend_scored(&self, query: &str, top_n: usize) -> Vec<ScoredItem<'_>> {
        if top_n == 0 {
            return Vec::new();
        }

        let mut scored = self.rank(query);
        scored.truncate(top_n);
        scored
    }

    /// At most `top_n` positively scored items, best first.
    pub fn recommend(&self, query: &str, top_n: usize) -> Vec<&Item> {
        self.recommend_scored(query, top_n)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }
}
