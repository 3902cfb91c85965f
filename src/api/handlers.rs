use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{error::ProxyResult, middleware::request_id::RequestId};

use super::AppState;

/// Query string of `GET /api/recommendations`
///
/// Missing parameters are forwarded as empty strings and left for the
/// upstream to judge.
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type", default)]
    pub category: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Relay a recommendation lookup to the upstream similarity API
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> ProxyResult<Json<Value>> {
    tracing::info!(
        request_id = %request_id,
        q = %params.q,
        category = %params.category,
        "Processing recommendation request"
    );

    let body = state
        .proxy
        .recommend(&params.q, &params.category)
        .await
        .inspect_err(|e| {
            tracing::warn!(
                request_id = %request_id,
                status = e.status_code().as_u16(),
                error = %e,
                "Recommendation request failed"
            );
        })?;

    tracing::info!(request_id = %request_id, "Recommendations relayed");

    Ok(Json(body))
}
