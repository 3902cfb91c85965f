use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;

use crate::{
    config::Config,
    services::{providers::TasteDiveProvider, RecommendationProxy},
};

/// Shared application state
///
/// Everything in here is immutable after startup, so concurrent requests
/// never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<RecommendationProxy>,
    /// The single browser origin allowed to call the API
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(proxy: RecommendationProxy, allowed_origin: HeaderValue) -> Self {
        Self {
            proxy: Arc::new(proxy),
            allowed_origin,
        }
    }

    /// Wires the TasteDive provider and proxy from configuration
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = TasteDiveProvider::new(config.tastedive_api_url.clone());
        let proxy = RecommendationProxy::new(config.proxy_config(), Arc::new(provider));
        let allowed_origin = HeaderValue::from_str(&config.allowed_origin)
            .with_context(|| format!("Invalid ALLOWED_ORIGIN: {}", config.allowed_origin))?;

        Ok(Self::new(proxy, allowed_origin))
    }
}
