//! Immutable, in-memory catalog of recommendable assessments.
//!
//! The catalog is built once at startup (see [`Catalog::builtin`]) and shared
//! read-only as an `Arc<Catalog>`. There is no mutation API: concurrent
//! requests read it without locking.

pub mod builtin;
pub mod error;
pub mod types;


pub use error::CatalogError;
pub use types::{Availability, Item};

/// Ordered, validated sequence of [`Item`]s.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Validates `items` and wraps them, preserving order.
    ///
    /// Titles must be non-empty and durations positive. Title uniqueness is
    /// not checked.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        for (index, item) in items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { index });
            }
            if item.duration_minutes == 0 {
                return Err(CatalogError::ZeroDuration {
                    title: item.title.clone(),
                });
            }
        }

        Ok(Self { items })
    }

    /// The catalog shipped with the service.
    pub fn builtin() -> Self {
        Self {
            items: builtin::items(),
        }
    }

    pub fn all_items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
