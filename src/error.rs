use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Errors the recommendation proxy reports to its callers.
///
/// Every variant maps to a fixed status code and a stable `error` string;
/// none of them carry the upstream credential.
#[derive(thiserror::Error, Debug)]
pub enum ProxyError {
    #[error("API key not configured on server")]
    Configuration,

    #[error("Invalid API key")]
    UpstreamAuth,

    #[error("API key quota exceeded or access denied")]
    UpstreamQuota,

    #[error("Invalid API response format")]
    UpstreamShape {
        details: String,
        response: Option<Value>,
    },

    #[error("Failed to fetch recommendations")]
    UpstreamTransport {
        details: String,
        api_response: Option<Value>,
    },
}

/// JSON body returned on every non-2xx response
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(rename = "apiResponse", skip_serializing_if = "Option::is_none")]
    pub api_response: Option<Value>,
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::UpstreamAuth => StatusCode::UNAUTHORIZED,
            ProxyError::UpstreamQuota => StatusCode::FORBIDDEN,
            ProxyError::Configuration
            | ProxyError::UpstreamShape { .. }
            | ProxyError::UpstreamTransport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ProxyErrorBody {
        let error = self.to_string();
        match self {
            ProxyError::Configuration | ProxyError::UpstreamAuth | ProxyError::UpstreamQuota => {
                ProxyErrorBody {
                    error,
                    details: None,
                    response: None,
                    api_response: None,
                }
            }
            ProxyError::UpstreamShape { details, response } => ProxyErrorBody {
                error,
                details: Some(details.clone()),
                response: response.clone(),
                api_response: None,
            },
            ProxyError::UpstreamTransport {
                details,
                api_response,
            } => ProxyErrorBody {
                error,
                details: Some(details.clone()),
                response: None,
                api_response: api_response.clone(),
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
