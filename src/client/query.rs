use crate::models::{Category, Query};

use super::{ClientError, EMPTY_QUERY_MESSAGE};

/// Renders the filled queries as the upstream's `category:term` list.
///
/// Each trimmed term is percent-encoded; empty terms contribute nothing. An
/// all-empty input yields an empty string.
pub fn format_query_string(queries: &[Query]) -> String {
    queries
        .iter()
        .filter(|query| query.is_filled())
        .map(|query| format!("{}:{}", query.category, urlencoding::encode(query.trimmed_term())))
        .collect::<Vec<_>>()
        .join(",")
}

/// The category of the first query, used as the single upstream `type`
pub fn primary_category(queries: &[Query]) -> Option<Category> {
    queries.first().map(|query| query.category)
}

/// Parameters of one `GET /api/recommendations` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationParams {
    pub q: String,
    pub category: Category,
}

impl RecommendationParams {
    pub fn from_queries(queries: &[Query]) -> Result<Self, ClientError> {
        let q = format_query_string(queries);
        let category = match primary_category(queries) {
            Some(category) if !q.is_empty() => category,
            _ => return Err(ClientError::Validation(EMPTY_QUERY_MESSAGE.to_string())),
        };

        Ok(Self { q, category })
    }
}
