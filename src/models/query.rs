use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Kind of content the similarity API understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Music,
    #[default]
    Movie,
    Show,
    Podcast,
    Book,
    Game,
    Person,
    Place,
    Brand,
}

impl Category {
    /// Every category, in the order a picker offers them
    pub const ALL: [Category; 9] = [
        Category::Music,
        Category::Movie,
        Category::Show,
        Category::Podcast,
        Category::Book,
        Category::Game,
        Category::Person,
        Category::Place,
        Category::Brand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Movie => "movie",
            Category::Show => "show",
            Category::Podcast => "podcast",
            Category::Book => "book",
            Category::Game => "game",
            Category::Person => "person",
            Category::Place => "place",
            Category::Brand => "brand",
        }
    }

    /// Human-facing label, e.g. "Movie"
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// One typed search term entered by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Query {
    pub term: String,
    pub category: Category,
}

impl Query {
    pub fn new(term: impl Into<String>, category: Category) -> Self {
        Self {
            term: term.into(),
            category,
        }
    }

    /// The term with surrounding whitespace removed
    pub fn trimmed_term(&self) -> &str {
        self.term.trim()
    }

    /// A query takes part in a search only when its trimmed term is non-empty
    pub fn is_filled(&self) -> bool {
        !self.trimmed_term().is_empty()
    }
}
