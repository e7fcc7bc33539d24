//! Cross-cutting, shared constants.

/// Number of recommendations returned when the caller does not pass `top_n`.
pub const DEFAULT_TOP_N: usize = 10;

/// Shortest run of word characters counted as a token.
pub const MIN_TOKEN_LEN: usize = 2;

pub const SERVICE_NAME: &str = "assessment-recommender";

pub const STATUS_OK: &str = "ok";
pub const STATUS_PENDING: &str = "pending";
