//! Assessment recommender library crate (used by the server binary and integration tests).
//!
//! A fixed catalog of assessment products is ranked against a free-text query
//! by bag-of-words cosine similarity between the query and each item's
//! description.
//!
//! # Layout
//!
//! - [`catalog`] - the immutable [`Catalog`] of [`Item`]s
//! - [`scoring`] - tokenizer, [`TermCounts`] and the pairwise [`score`]
//! - [`ranking`] - the [`Recommender`] pipeline (score, filter, sort, truncate)
//! - [`gateway`] - Axum router exposing `GET /recommend`
//! - [`config`] - `RECOMMENDER_*` environment configuration

pub mod catalog;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod ranking;
pub mod scoring;

pub use catalog::{Availability, Catalog, CatalogError, Item};
pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_TOP_N, MIN_TOKEN_LEN};
pub use gateway::{GatewayError, HandlerState, Recommendation, create_router_with_state};
pub use ranking::{Recommender, ScoredItem};
pub use scoring::{TermCounts, score, tokenize};
