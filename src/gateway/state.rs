use std::sync::Arc;

use crate::catalog::Catalog;
use crate::constants::DEFAULT_TOP_N;
use crate::ranking::Recommender;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct HandlerState {
    pub recommender: Arc<Recommender>,

    /// Used when a request omits `top_n`.
    pub default_top_n: usize,
}

impl HandlerState {
    pub fn new(recommender: Arc<Recommender>) -> Self {
        Self {
            recommender,
            default_top_n: DEFAULT_TOP_N,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(Arc::new(Recommender::new(Arc::new(catalog))))
    }

    pub fn with_default_top_n(mut self, default_top_n: usize) -> Self {
        self.default_top_n = default_top_n;
        self
    }
}
