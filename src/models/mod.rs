pub mod query;
pub mod recommendation;

pub use query::{Category, ParseCategoryError, Query};
pub use recommendation::{InfoItem, RecommendationResponse, ResultItem, Similar};
