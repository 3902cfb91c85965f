//! TasteDive similarity API provider
//!
//! API Flow:
//! GET {api_url}/api/similar?q=..&type=..&k=..&info=1&limit=20 → `{ "similar": { info, results } }`
use reqwest::{header::ACCEPT, Client as HttpClient};

use super::{SimilarRequest, SimilarityProvider, UpstreamFailure, UpstreamReply, RESULT_LIMIT};

const SIMILAR_PATH: &str = "/api/similar";

#[derive(Clone)]
pub struct TasteDiveProvider {
    http_client: HttpClient,
    api_url: String,
}

impl TasteDiveProvider {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(HttpClient::new(), api_url)
    }

    pub fn with_client(http_client: HttpClient, api_url: impl Into<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.api_url, SIMILAR_PATH)
    }
}

#[async_trait::async_trait]
impl SimilarityProvider for TasteDiveProvider {
    // The request is skipped whole: it carries the API key
    #[tracing::instrument(
        skip(self, request),
        fields(provider = self.name(), q = %request.q, category = %request.category)
    )]
    async fn fetch_similar(
        &self,
        request: &SimilarRequest,
    ) -> Result<UpstreamReply, UpstreamFailure> {
        let limit = RESULT_LIMIT.to_string();
        let response = self
            .http_client
            .get(self.endpoint())
            .header(ACCEPT, "application/json")
            .query(&[
                ("q", request.q.as_str()),
                ("type", request.category.as_str()),
                ("k", request.api_key.as_str()),
                ("info", "1"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            // The request URL carries the key; strip it before the message escapes
            .map_err(|e| UpstreamFailure::transport(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamFailure::transport(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Upstream returned error status");
            let body = (!body.is_empty()).then_some(body);
            return Err(UpstreamFailure::from_status(status.as_u16(), body));
        }

        tracing::debug!(status = status.as_u16(), body_len = body.len(), "Upstream responded");

        Ok(UpstreamReply { body })
    }

    fn name(&self) -> &'static str {
        "tastedive"
    }
}
