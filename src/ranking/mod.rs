//! Query-to-catalog ranking.
//!
//! [`Recommender`] scores every catalog item against a query, drops
//! non-positive scores, sorts descending and truncates to `top_n`. Equal
//! scores keep catalog order.

pub mod recommender;
pub mod types;


pub use recommender::Recommender;
pub use types::ScoredItem;
