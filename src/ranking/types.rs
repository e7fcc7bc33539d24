use crate::catalog::Item;

/// A catalog item paired with its similarity to one query.
///
/// Lives only for the duration of a single request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItem<'a> {
    pub item: &'a Item,
    pub score: f64,
}

impl<'a> ScoredItem<'a> {
    pub fn new(item: &'a Item, score: f64) -> Self {
        Self { item, score }
    }

    pub fn is_relevant(&self) -> bool {
        self.score > 0.0
    }
}
