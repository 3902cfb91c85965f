//! Client-side half of the recommender: turning typed search terms into a
//! proxy request, calling the proxy, and shaping its answer for display.

pub mod api;
pub mod query;
pub mod render;
pub mod session;
pub mod video;

pub use api::ProxyClient;
pub use query::{format_query_string, primary_category, RecommendationParams};
pub use render::{render, ResultsView};
pub use session::RecommenderSession;
pub use video::youtube_video_id;

/// Message shown when no query row has a term
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter at least one search term.";

/// Fallback message when the proxy fails without saying why
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations";

/// Message shown when the upstream found nothing similar
pub const NO_RECOMMENDATIONS_MESSAGE: &str =
    "No recommendations found. Try different search terms.";

/// Errors surfaced to the user by the client
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// The proxy answered with a non-2xx status
    #[error("{message}")]
    Proxy { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
