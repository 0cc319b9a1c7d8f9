use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use khabar_core::batch::{CleanedBatch, TokenBatch};
use khabar_core::config::{CleaningConfig, TokenConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no `tokens` field: {0}")]
    MissingTokens(PathBuf),
}

/// Envelope written for a cleaned-article batch.
#[derive(Debug, Serialize)]
pub struct CleanedArticlesDocument {
    pub timestamp: DateTime<Local>,
    pub processing_type: &'static str,
    pub system_version: &'static str,
    pub cleaning_config: CleaningConfig,
    pub total_articles: usize,
    pub retention_rate: f64,
    pub articles: Vec<khabar_core::article::CleanedArticle>,
}

/// Envelope written for a preprocessed token batch.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenDocument {
    pub timestamp: DateTime<Local>,
    pub preprocessing_config: TokenConfig,
    pub original_token_count: usize,
    pub processed_token_count: usize,
    pub removed_token_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub tokens: Vec<String>,
}

/// Envelope written for raw tokens straight out of the segmenter.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawTokensDocument {
    pub timestamp: DateTime<Local>,
    pub token_count: usize,
    pub tokens: Vec<String>,
}

/// Filesystem sink for pipeline outputs. Documents are pretty-printed JSON
/// under timestamped filenames.
pub struct OutputStore {
    output_dir: PathBuf,
}

impl OutputStore {
    /// Create the store, ensuring the output directory exists.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<prefix>_<YYYYMMDD_HHMMSS>.json` inside the output directory.
    pub fn timestamped_path(&self, prefix: &str) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        self.output_dir.join(format!("{prefix}_{stamp}.json"))
    }

    pub fn save_cleaned_articles(
        &self,
        batch: &CleanedBatch,
        config: &CleaningConfig,
    ) -> Result<PathBuf, StoreError> {
        let document = CleanedArticlesDocument {
            timestamp: Local::now(),
            processing_type: "raw_text_cleaning",
            system_version: env!("CARGO_PKG_VERSION"),
            cleaning_config: config.clone(),
            total_articles: batch.cleaned_count,
            retention_rate: batch.retention_rate,
            articles: batch.articles.clone(),
        };

        let path = self.timestamped_path("cleaned_articles");
        self.write_json(&path, &document)?;
        Ok(path)
    }

    pub fn save_token_batch(
        &self,
        batch: &TokenBatch,
        config: &TokenConfig,
        source_file: Option<String>,
        prefix: &str,
    ) -> Result<PathBuf, StoreError> {
        let document = TokenDocument {
            timestamp: Local::now(),
            preprocessing_config: config.clone(),
            original_token_count: batch.original_count,
            processed_token_count: batch.processed_count,
            removed_token_count: batch.original_count - batch.processed_count,
            source_file,
            tokens: batch.tokens.clone(),
        };

        let path = self.timestamped_path(prefix);
        self.write_json(&path, &document)?;
        Ok(path)
    }

    pub fn save_raw_tokens(&self, tokens: &[String]) -> Result<PathBuf, StoreError> {
        let document = RawTokensDocument {
            timestamp: Local::now(),
            token_count: tokens.len(),
            tokens: tokens.to_vec(),
        };

        let path = self.timestamped_path("article_tokens");
        self.write_json(&path, &document)?;
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        tracing::info!("data saved to {}", path.display());
        Ok(())
    }
}

/// Read the `tokens` array out of a tokenized-data document.
pub fn load_tokens(path: &Path) -> Result<Vec<String>, StoreError> {
    let data = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&data)?;

    let Some(tokens) = value.get("tokens") else {
        return Err(StoreError::MissingTokens(path.to_path_buf()));
    };
    Ok(serde_json::from_value(tokens.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use khabar_core::batch::retention_rate;

    fn temp_store(tag: &str) -> OutputStore {
        let dir = std::env::temp_dir().join(format!("khabar-store-{tag}-{}", std::process::id()));
        OutputStore::new(dir).unwrap()
    }

    fn token_batch(tokens: &[&str], original: usize) -> TokenBatch {
        TokenBatch {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            original_count: original,
            processed_count: tokens.len(),
            removed_count: original - tokens.len(),
        }
    }

    #[test]
    fn timestamped_paths_carry_prefix_and_extension() {
        let store = temp_store("paths");
        let path = store.timestamped_path("cleaned_articles");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cleaned_articles_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn cleaned_articles_round_trip_through_disk() {
        let store = temp_store("articles");
        let batch = CleanedBatch {
            articles: vec![],
            original_count: 4,
            cleaned_count: 3,
            retention_rate: retention_rate(4, 3),
        };

        let path = store
            .save_cleaned_articles(&batch, &CleaningConfig::default())
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(value["processing_type"], "raw_text_cleaning");
        assert_eq!(value["total_articles"], 3);
        assert!(value["timestamp"].is_string());
        assert!(value["cleaning_config"]["preserve_numbers"].as_bool().unwrap());
    }

    #[test]
    fn token_documents_load_back() {
        let store = temp_store("tokens");
        let batch = token_batch(&["नेपाल", "२०२४"], 5);

        let path = store
            .save_token_batch(&batch, &TokenConfig::default(), None, "cleaned_tokens")
            .unwrap();
        let tokens = load_tokens(&path).unwrap();
        assert_eq!(tokens, vec!["नेपाल", "२०२४"]);
    }

    #[test]
    fn raw_token_documents_count_tokens() {
        let store = temp_store("raw");
        let tokens: Vec<String> = ["ताजा", "खबर"].iter().map(|t| t.to_string()).collect();

        let path = store.save_raw_tokens(&tokens).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["token_count"], 2);
    }

    #[test]
    fn documents_without_tokens_are_errors() {
        let dir = std::env::temp_dir().join(format!("khabar-store-miss-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("no_tokens.json");
        fs::write(&path, r#"{"articles": []}"#).unwrap();

        assert!(matches!(
            load_tokens(&path),
            Err(StoreError::MissingTokens(_))
        ));
    }
}
