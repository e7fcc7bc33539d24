use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::Recommendation;
use crate::gateway::state::HandlerState;

/// Recognized query parameters. A repeated parameter keeps its last value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecommendParams {
    pub query: Option<String>,
    pub top_n: Option<String>,
}

impl RecommendParams {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "query" => params.query = Some(value),
                "top_n" => params.top_n = Some(value),
                _ => {}
            }
        }
        params
    }
}

#[instrument(
    skip(state, pairs),
    fields(top_n = tracing::field::Empty, results = tracing::field::Empty)
)]
pub async fn recommend_handler(
    State(state): State<HandlerState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Recommendation>>, GatewayError> {
    let Query(pairs) = pairs.map_err(|e| GatewayError::MalformedQuery(e.body_text()))?;
    let params = RecommendParams::from_pairs(pairs);

    let query = params.query.ok_or(GatewayError::MissingQuery)?;
    let top_n = resolve_top_n(params.top_n.as_deref(), state.default_top_n)?;

    let span = tracing::Span::current();
    span.record("top_n", top_n);

    let recommendations: Vec<Recommendation> = state
        .recommender
        .recommend(&query, top_n)
        .into_iter()
        .map(Recommendation::from)
        .collect();

    span.record("results", recommendations.len());
    info!(
        query_len = query.len(),
        results = recommendations.len(),
        "Served recommendations"
    );

    Ok(Json(recommendations))
}

/// Parses the optional `top_n` parameter.
///
/// Missing means `default`. Any integer literal is accepted, however large:
/// values `<= 0` become `0` (empty result) and values past `usize::MAX`
/// saturate. Anything else is rejected.
pub(crate) fn resolve_top_n(raw: Option<&str>, default: usize) -> Result<usize, GatewayError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GatewayError::InvalidTopN {
            value: raw.to_string(),
        });
    }

    if negative {
        return Ok(0);
    }

    // All ASCII digits, so the only possible failure is overflow.
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}
