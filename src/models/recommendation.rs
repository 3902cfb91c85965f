use serde::{Deserialize, Deserializer, Serialize};

// Upstream sends explicit nulls for fields it has no value for
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful payload relayed by the proxy
///
/// The proxy passes the upstream body through untouched; this typed view is
/// what the client decodes it into. Missing or null arrays decode as empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub similar: Option<Similar>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Similar {
    /// The seed items the upstream resolved the query to
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: Vec<InfoItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub item_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub item_type: String,
    /// Wikipedia article URL
    #[serde(rename = "wUrl", default)]
    pub w_url: Option<String>,
    /// Wikipedia teaser text
    #[serde(rename = "wTeaser", default)]
    pub w_teaser: Option<String>,
    /// YouTube URL
    #[serde(rename = "yUrl", default)]
    pub y_url: Option<String>,
    #[serde(rename = "yID", default)]
    pub y_id: Option<String>,
}

impl RecommendationResponse {
    pub fn results(&self) -> &[ResultItem] {
        self.similar
            .as_ref()
            .map(|similar| similar.results.as_slice())
            .unwrap_or_default()
    }

    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_upstream_payload() {
        let body = json!({
            "similar": {
                "info": [{ "name": "Inception", "type": "movie" }],
                "results": [{
                    "name": "Interstellar",
                    "type": "movie",
                    "wTeaser": "A 2014 film.",
                    "wUrl": "https://en.wikipedia.org/wiki/Interstellar_(film)",
                    "yUrl": "https://www.youtube-nocookie.com/embed/zSWdZVtXT7E",
                    "yID": "zSWdZVtXT7E",
                    "extra": true
                }]
            }
        });

        let response: RecommendationResponse = serde_json::from_value(body).unwrap();
        let similar = response.similar.as_ref().unwrap();
        assert_eq!(similar.info[0].item_type, "movie");
        assert_eq!(response.results()[0].name, "Interstellar");
        assert_eq!(response.results()[0].y_id.as_deref(), Some("zSWdZVtXT7E"));
        assert!(response.has_results());
    }

    #[test]
    fn test_missing_arrays_default_to_empty() {
        let response: RecommendationResponse =
            serde_json::from_value(json!({ "similar": {} })).unwrap();
        assert!(response.results().is_empty());
        assert!(!response.has_results());

        let response: RecommendationResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.similar.is_none());
        assert!(!response.has_results());
    }

    #[test]
    fn test_null_arrays_default_to_empty() {
        let response: RecommendationResponse =
            serde_json::from_value(json!({ "similar": { "info": null, "results": null } }))
                .unwrap();
        let similar = response.similar.as_ref().unwrap();
        assert!(similar.info.is_empty());
        assert!(!response.has_results());
    }

    #[test]
    fn test_items_without_name_or_type() {
        let response: RecommendationResponse = serde_json::from_value(json!({
            "similar": {
                "info": [{ "type": null }],
                "results": [{ "type": "movie", "wTeaser": null }, { "name": null }]
            }
        }))
        .unwrap();

        let similar = response.similar.as_ref().unwrap();
        assert_eq!(similar.info[0].name, "");
        assert_eq!(similar.info[0].item_type, "");
        assert_eq!(response.results().len(), 2);
        assert_eq!(response.results()[0].name, "");
        assert_eq!(response.results()[0].item_type, "movie");
        assert!(response.results()[0].w_teaser.is_none());
        assert_eq!(response.results()[1].item_type, "");
    }
}
