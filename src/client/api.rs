use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::models::RecommendationResponse;

use super::{query::RecommendationParams, ClientError, FETCH_FAILED_MESSAGE};

const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

/// HTTP client for the recommendation proxy
#[derive(Clone)]
pub struct ProxyClient {
    http_client: HttpClient,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches recommendations for already-validated parameters
    ///
    /// Any non-2xx answer becomes [`ClientError::Proxy`] carrying the proxy's
    /// `error` text, or a generic message when it has none.
    pub async fn fetch_recommendations(
        &self,
        params: &RecommendationParams,
    ) -> Result<RecommendationResponse, ClientError> {
        let url = format!("{}{}", self.base_url, RECOMMENDATIONS_PATH);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", params.q.as_str()), ("type", params.category.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error)
                .filter(|error| !error.is_empty())
                .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string());

            return Err(ClientError::Proxy {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
