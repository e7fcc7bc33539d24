//! Catalog validation errors.

use thiserror::Error;

/// Errors raised while assembling a [`Catalog`](super::Catalog).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An item at `index` has a blank title.
    #[error("catalog item at index {index} has an empty title")]
    EmptyTitle { index: usize },

    /// An item declares a zero-minute duration.
    #[error("catalog item '{title}' must have a positive duration")]
    ZeroDuration { title: String },
}
