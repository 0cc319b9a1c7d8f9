use std::time::Duration;

use khabar_core::article::RawArticle;

/// Article feed interface
#[async_trait::async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the current batch of raw articles
    async fn fetch(&self) -> Result<Vec<RawArticle>, FetchError>;

    /// Source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response shape: expected a JSON array of articles")]
    UnexpectedShape,

    #[error("invalid article record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

/// News API client. The endpoint is expected to return a JSON array of
/// article objects; anything else is a shape error. Records are validated
/// into [`RawArticle`] here, at the boundary, so nothing downstream has to
/// re-check the input structure.
pub struct HttpArticleSource {
    client: reqwest::Client,
    base_url: String,
    endpoint: String,
}

impl HttpArticleSource {
    pub fn new(
        base_url: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            endpoint: endpoint.into(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

/// Validate a fetched JSON body into article records.
fn parse_articles(body: serde_json::Value) -> Result<Vec<RawArticle>, FetchError> {
    let Some(items) = body.as_array() else {
        return Err(FetchError::UnexpectedShape);
    };

    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(FetchError::from))
        .collect()
}

#[async_trait::async_trait]
impl ArticleSource for HttpArticleSource {
    async fn fetch(&self) -> Result<Vec<RawArticle>, FetchError> {
        let url = self.url();
        tracing::info!("fetching articles from {url}");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        let articles = parse_articles(body)?;
        tracing::info!("fetched {} articles", articles.len());
        Ok(articles)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "http".to_string(),
            endpoint: self.url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_joins_base_and_endpoint() {
        let source =
            HttpArticleSource::new("https://apinp.com", "/news/api.php", Duration::from_secs(10))
                .unwrap();
        assert_eq!(source.url(), "https://apinp.com/news/api.php");
        assert_eq!(source.metadata().endpoint, "https://apinp.com/news/api.php");
    }

    #[test]
    fn array_bodies_parse_into_articles() {
        let body = json!([
            {"id": "a1", "title": "शीर्षक", "description": "विवरण"},
            {"title": "अर्को"}
        ]);
        let articles = parse_articles(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id.as_deref(), Some("a1"));
        assert!(articles[1].id.is_none());
    }

    #[test]
    fn non_array_bodies_are_shape_errors() {
        let body = json!({"articles": []});
        assert!(matches!(
            parse_articles(body),
            Err(FetchError::UnexpectedShape)
        ));
    }

    #[test]
    fn non_object_elements_are_invalid_records() {
        let body = json!(["not-an-object"]);
        assert!(matches!(
            parse_articles(body),
            Err(FetchError::InvalidRecord(_))
        ));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = json!([{"title": "शीर्षक", "views": 120}]);
        let articles = parse_articles(body).unwrap();
        assert_eq!(articles[0].title.as_deref(), Some("शीर्षक"));
    }
}
