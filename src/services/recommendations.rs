use serde_json::Value;
use std::sync::Arc;

use crate::{
    config::{redact_key, ProxyConfig},
    error::{ProxyError, ProxyResult},
    services::providers::{SimilarRequest, SimilarityProvider, UpstreamFailure, RESULT_LIMIT},
};

const NOT_JSON_OBJECT: &str = "Response is not a valid JSON object";
const MISSING_SIMILAR: &str = "Response is missing Similar property";

/// Relays recommendation lookups to the upstream similarity API
///
/// Holds no per-request state: every call resolves the credential, makes one
/// outbound request and classifies the outcome independently.
#[derive(Clone)]
pub struct RecommendationProxy {
    config: ProxyConfig,
    provider: Arc<dyn SimilarityProvider>,
}

impl RecommendationProxy {
    pub fn new(config: ProxyConfig, provider: Arc<dyn SimilarityProvider>) -> Self {
        Self { config, provider }
    }

    /// Looks up items similar to `q`, returning the upstream body unchanged on success
    pub async fn recommend(&self, q: &str, category: &str) -> ProxyResult<Value> {
        let api_key = self.config.api_key().ok_or_else(|| {
            tracing::error!("TasteDive API key is not configured");
            ProxyError::Configuration
        })?;

        tracing::info!(
            q = %q,
            category = %category,
            k = %redact_key(api_key),
            info = 1,
            limit = RESULT_LIMIT,
            "Making request with params"
        );

        let request = SimilarRequest {
            q: q.to_string(),
            category: category.to_string(),
            api_key: api_key.to_string(),
        };

        match self.provider.fetch_similar(&request).await {
            Ok(reply) => validate_body(&reply.body),
            Err(failure) => Err(classify_failure(failure)),
        }
    }
}

/// Accepts only a JSON object carrying a truthy `similar` property
fn validate_body(body: &str) -> ProxyResult<Value> {
    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => {
            tracing::error!(body_len = body.len(), "Upstream body is not a JSON object");
            return Err(ProxyError::UpstreamShape {
                details: NOT_JSON_OBJECT.to_string(),
                response: None,
            });
        }
    };

    if !parsed.get("similar").is_some_and(is_truthy) {
        tracing::error!("Upstream body is missing the similar property");
        return Err(ProxyError::UpstreamShape {
            details: MISSING_SIMILAR.to_string(),
            response: Some(parsed),
        });
    }

    Ok(parsed)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn classify_failure(failure: UpstreamFailure) -> ProxyError {
    tracing::error!(
        message = %failure.message,
        status = ?failure.status,
        has_body = failure.body.is_some(),
        "Upstream request failed"
    );

    match failure.status {
        Some(401) => ProxyError::UpstreamAuth,
        Some(403) => ProxyError::UpstreamQuota,
        _ => ProxyError::UpstreamTransport {
            details: failure.message,
            api_response: failure.body.map(|body| {
                serde_json::from_str(&body).unwrap_or(Value::String(body))
            }),
        },
    }
}
