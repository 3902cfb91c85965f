use crate::models::{Category, Query, RecommendationResponse};

use super::{query::RecommendationParams, ClientError, NO_RECOMMENDATIONS_MESSAGE};

/// Maximum number of query rows a session holds
pub const MAX_QUERIES: usize = 5;

/// UI state of one recommender screen
///
/// All mutation goes through the transition methods below; there is no
/// other shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderSession {
    queries: Vec<Query>,
    results: Option<RecommendationResponse>,
    loading: bool,
    error: Option<String>,
    active_video: Option<usize>,
}

impl Default for RecommenderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommenderSession {
    /// Starts with a single empty movie row
    pub fn new() -> Self {
        Self {
            queries: vec![Query::default()],
            results: None,
            loading: false,
            error: None,
            active_video: None,
        }
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn results(&self) -> Option<&RecommendationResponse> {
        self.results.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn active_video(&self) -> Option<usize> {
        self.active_video
    }

    pub fn can_add_query(&self) -> bool {
        self.queries.len() < MAX_QUERIES
    }

    /// Rows can be removed only while more than one exists
    pub fn can_remove_query(&self) -> bool {
        self.queries.len() > 1
    }

    /// Appends an empty movie row; returns false once the limit is reached
    pub fn add_query(&mut self) -> bool {
        if !self.can_add_query() {
            return false;
        }
        self.queries.push(Query::default());
        true
    }

    pub fn remove_query(&mut self, index: usize) -> bool {
        if !self.can_remove_query() || index >= self.queries.len() {
            return false;
        }
        self.queries.remove(index);
        true
    }

    pub fn update_term(&mut self, index: usize, term: impl Into<String>) {
        if let Some(query) = self.queries.get_mut(index) {
            query.term = term.into();
            self.error = None;
        }
    }

    pub fn update_category(&mut self, index: usize, category: Category) {
        if let Some(query) = self.queries.get_mut(index) {
            query.category = category;
            self.error = None;
        }
    }

    /// The search trigger is enabled only when idle and some row has a term
    pub fn can_search(&self) -> bool {
        !self.loading && self.queries.iter().any(Query::is_filled)
    }

    /// Enters the loading state and returns the request to send.
    ///
    /// Validation failures are recorded as the session error and nothing is
    /// returned, so no request goes out. While a request is in flight this
    /// returns `None` and leaves the session untouched.
    pub fn begin_search(&mut self) -> Option<RecommendationParams> {
        if self.loading {
            return None;
        }

        self.error = None;
        self.active_video = None;

        match RecommendationParams::from_queries(&self.queries) {
            Ok(params) => {
                self.loading = true;
                Some(params)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.results = None;
                None
            }
        }
    }

    /// Applies the outcome of a request started by [`Self::begin_search`]
    pub fn finish_search(&mut self, outcome: Result<RecommendationResponse, ClientError>) {
        self.loading = false;

        match outcome {
            Ok(response) if response.has_results() => {
                self.error = None;
                self.results = Some(response);
            }
            Ok(_) => {
                self.error = Some(NO_RECOMMENDATIONS_MESSAGE.to_string());
                self.results = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                self.error = Some(e.to_string());
                self.results = None;
            }
        }
    }

    /// Makes `index` the only expanded player, or collapses all with `None`
    pub fn set_active_video(&mut self, index: Option<usize>) {
        self.active_video = index;
    }

    pub fn toggle_video(&mut self, index: usize) {
        self.active_video = match self.active_video {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(results: serde_json::Value) -> RecommendationResponse {
        serde_json::from_value(json!({ "similar": { "info": [], "results": results } })).unwrap()
    }

    #[test]
    fn test_new_session_has_one_empty_movie_row() {
        let session = RecommenderSession::new();
        assert_eq!(session.queries(), &[Query::new("", Category::Movie)]);
        assert!(!session.can_search());
        assert!(!session.can_remove_query());
    }

    #[test]
    fn test_query_rows_are_capped_at_five() {
        let mut session = RecommenderSession::new();
        for _ in 1..MAX_QUERIES {
            assert!(session.add_query());
        }
        assert!(!session.add_query());
        assert_eq!(session.queries().len(), MAX_QUERIES);
    }

    #[test]
    fn test_last_row_cannot_be_removed() {
        let mut session = RecommenderSession::new();
        assert!(!session.remove_query(0));

        session.add_query();
        session.update_term(1, "Dune");
        assert!(session.remove_query(0));
        assert_eq!(session.queries()[0].term, "Dune");
        assert!(!session.remove_query(3));
    }

    #[test]
    fn test_editing_clears_error() {
        let mut session = RecommenderSession::new();
        assert!(session.begin_search().is_none());
        assert_eq!(session.error(), Some(crate::client::EMPTY_QUERY_MESSAGE));
        assert!(!session.is_loading());

        session.update_category(0, Category::Book);
        assert_eq!(session.error(), None);
        assert_eq!(session.queries()[0].category, Category::Book);
    }

    #[test]
    fn test_search_lifecycle_with_results() {
        let mut session = RecommenderSession::new();
        session.update_term(0, "Inception");
        session.set_active_video(Some(2));

        let params = session.begin_search().unwrap();
        assert_eq!(params.q, "movie:Inception");
        assert!(session.is_loading());
        assert!(!session.can_search());
        assert_eq!(session.active_video(), None);

        session.finish_search(Ok(response(json!([{ "name": "Tenet", "type": "movie" }]))));
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(session.results().unwrap().results()[0].name, "Tenet");
    }

    #[test]
    fn test_only_one_search_in_flight() {
        let mut session = RecommenderSession::new();
        session.update_term(0, "Inception");
        session.begin_search().unwrap();
        let in_flight = session.clone();

        assert!(session.begin_search().is_none());
        assert_eq!(session, in_flight);
        assert!(session.is_loading());

        session.finish_search(Ok(response(json!([{ "name": "Tenet", "type": "movie" }]))));
        assert!(session.begin_search().is_some());
    }

    #[test]
    fn test_zero_results_is_notice_not_results() {
        let mut session = RecommenderSession::new();
        session.update_term(0, "Inception");
        session.begin_search().unwrap();

        session.finish_search(Ok(response(json!([]))));
        assert_eq!(session.error(), Some(NO_RECOMMENDATIONS_MESSAGE));
        assert!(session.results().is_none());
    }

    #[test]
    fn test_failure_shows_proxy_message() {
        let mut session = RecommenderSession::new();
        session.update_term(0, "Inception");
        session.begin_search().unwrap();

        session.finish_search(Err(ClientError::Proxy {
            status: 401,
            message: "Invalid API key".to_string(),
        }));
        assert_eq!(session.error(), Some("Invalid API key"));
        assert!(session.results().is_none());
        assert!(session.can_search());
    }

    #[test]
    fn test_single_active_video() {
        let mut session = RecommenderSession::new();
        session.toggle_video(1);
        assert_eq!(session.active_video(), Some(1));
        session.toggle_video(3);
        assert_eq!(session.active_video(), Some(3));
        session.toggle_video(3);
        assert_eq!(session.active_video(), None);
    }
}
