//! Similarity data provider abstraction
//!
//! The proxy talks to the upstream recommendation API through this trait so
//! the classification logic can be exercised without a network.

pub mod tastedive;

pub use tastedive::TasteDiveProvider;

/// Number of items requested from the upstream per call
pub const RESULT_LIMIT: u32 = 20;

/// Parameters of a single outbound similarity lookup
#[derive(Clone, PartialEq, Eq)]
pub struct SimilarRequest {
    /// Comma-joined `category:term` list, already percent-encoded per term
    pub q: String,
    /// The single category the upstream should return
    pub category: String,
    pub api_key: String,
}

impl std::fmt::Debug for SimilarRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarRequest")
            .field("q", &self.q)
            .field("category", &self.category)
            .field("api_key", &crate::config::redact_key(&self.api_key))
            .finish()
    }
}

/// Raw upstream reply that came back with a 2xx status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub body: String,
}

/// Failure talking to the upstream
///
/// `status` is set when the upstream answered with a non-2xx status, and is
/// `None` for connection, DNS, timeout, or body-read failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UpstreamFailure {
    pub status: Option<u16>,
    pub message: String,
    pub body: Option<String>,
}

impl UpstreamFailure {
    pub fn from_status(status: u16, body: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: format!("Request failed with status code {}", status),
            body,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }
}

/// Trait for similarity recommendation providers
///
/// Implementations perform exactly one outbound call per invocation: no
/// retries, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SimilarityProvider: Send + Sync {
    /// Fetch items similar to the query
    async fn fetch_similar(&self, request: &SimilarRequest)
        -> Result<UpstreamReply, UpstreamFailure>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
