use crate::models::{RecommendationResponse, ResultItem};

use super::video::{embed_url, youtube_video_id};

/// What the results area should show for a proxy response
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// The upstream found nothing; a user-facing notice, not a failure
    NoRecommendations,
    Recommendations {
        /// What the query resolved to, e.g. "Inception (movie)"
        seeds: Vec<String>,
        cards: Vec<ResultCard>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub name: String,
    pub item_type: String,
    pub teaser: Option<String>,
    pub wikipedia_url: Option<String>,
    /// Present only when the item's video URL yields a valid identifier
    pub video: Option<VideoEmbed>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    pub id: String,
    pub embed_url: String,
}

impl From<&ResultItem> for ResultCard {
    fn from(item: &ResultItem) -> Self {
        let video = item
            .y_url
            .as_deref()
            .and_then(youtube_video_id)
            .map(|id| VideoEmbed {
                embed_url: embed_url(&id),
                id,
            });

        Self {
            name: item.name.clone(),
            item_type: item.item_type.clone(),
            teaser: item.w_teaser.clone().filter(|t| !t.is_empty()),
            wikipedia_url: item.w_url.clone().filter(|u| !u.is_empty()),
            video,
        }
    }
}

pub fn render(response: &RecommendationResponse) -> ResultsView {
    let Some(similar) = response.similar.as_ref().filter(|s| !s.results.is_empty()) else {
        return ResultsView::NoRecommendations;
    };

    ResultsView::Recommendations {
        seeds: similar
            .info
            .iter()
            .map(|seed| format!("{} ({})", seed.name, seed.item_type))
            .collect(),
        cards: similar.results.iter().map(ResultCard::from).collect(),
    }
}
