use serde::{Deserialize, Serialize};

/// One article as delivered by a news source. Every field is optional;
/// a missing field is treated as an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

impl RawArticle {
    /// Title, description and content joined with single spaces, in that
    /// order. `None` when the article carries no non-empty text field.
    pub fn combined_text(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.title, &self.description, &self.content]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|text| !text.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Title and description joined for segmentation. Content is left out;
    /// token extraction works on headline material only.
    pub fn tokenizable_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }

    pub fn metadata(&self) -> ArticleMetadata {
        ArticleMetadata {
            published_date: self.published_date.clone(),
            category: self.category.clone(),
            source: self.source.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub published_date: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
}

/// Output record for one article that survived cleaning. The record carries
/// metadata about the original text only; the cleaned text itself is not
/// part of the persisted shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedArticle {
    pub original_id: String,
    pub original_title: String,
    /// Character count of the combined raw text.
    pub original_length: usize,
    pub metadata: ArticleMetadata,
}
