use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use khabar_config::AppConfig;
use khabar_core::batch::{ArticlePipeline, TokenPipeline, retention_rate};
use khabar_core::language::TokenPreprocessor;
use khabar_fetch::{ArticleSource, HttpArticleSource};
use khabar_lang_nepali::{NepaliSegmenter, NepaliTextCleaner, NepaliTokenPreprocessor};
use khabar_store::OutputStore;

/// Wires fetch, cleaning and persistence together. The pipelines hold no
/// mutable state, so one runner serves every monitoring cycle.
pub struct Runner {
    config: AppConfig,
    store: OutputStore,
    articles: ArticlePipeline<NepaliTextCleaner>,
    tokens: TokenPipeline<NepaliSegmenter, NepaliTokenPreprocessor>,
}

impl Runner {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let store = OutputStore::new(&config.output_dir)
            .with_context(|| format!("failed to create output directory {}", config.output_dir))?;

        let articles = ArticlePipeline::new(NepaliTextCleaner::new(config.cleaning.clone()));
        let tokens = TokenPipeline::new(
            NepaliSegmenter::new(),
            NepaliTokenPreprocessor::new(config.preprocessing.clone()),
        );

        Ok(Self {
            config,
            store,
            articles,
            tokens,
        })
    }

    fn source(&self) -> anyhow::Result<HttpArticleSource> {
        let source = HttpArticleSource::new(
            &self.config.server_url,
            &self.config.api_endpoint,
            Duration::from_secs(self.config.timeout_seconds),
        )?;
        Ok(source)
    }

    /// Fetch one article batch, clean it and persist the result.
    pub async fn run_single(&self) -> anyhow::Result<()> {
        let articles = self.source()?.fetch().await?;

        let batch = self.articles.process_batch(&articles)?;
        let path = self.store.save_cleaned_articles(&batch, &self.config.cleaning)?;

        tracing::info!(
            "cleaned {} of {} articles ({:.2}% retention), saved to {}",
            batch.cleaned_count,
            batch.original_count,
            batch.retention_rate,
            path.display()
        );
        Ok(())
    }

    /// Fetch one article batch and save the raw token stream.
    pub async fn run_tokenize(&self) -> anyhow::Result<()> {
        let articles = self.source()?.fetch().await?;

        let tokens = self.tokens.tokenize_batch(&articles)?;
        let path = self.store.save_raw_tokens(&tokens)?;

        tracing::info!("saved {} tokens to {}", tokens.len(), path.display());
        Ok(())
    }

    /// Run the single-shot pipeline on a fixed interval. Failed cycles are
    /// logged and skipped; the loop itself keeps going.
    pub async fn run_monitor(&self) -> anyhow::Result<()> {
        let interval = Duration::from_secs(self.config.monitoring_interval);
        tracing::info!(
            "starting continuous monitoring (interval: {}s)",
            self.config.monitoring_interval
        );

        let mut iteration: u64 = 0;
        loop {
            if let Some(max) = self.config.max_iterations {
                if iteration >= max {
                    tracing::info!("reached maximum iterations, stopping");
                    break;
                }
            }

            tracing::info!("monitoring iteration {}", iteration + 1);
            if let Err(e) = self.run_single().await {
                tracing::warn!("processing failed: {e}");
            }

            iteration += 1;
            if self.config.max_iterations.is_none_or(|max| iteration < max) {
                tracing::info!("waiting {}s for next check", self.config.monitoring_interval);
                tokio::time::sleep(interval).await;
            }
        }

        Ok(())
    }

    /// Preprocess every tokenized JSON document in `input_dir`.
    pub fn run_batch(&self, input_dir: &Path) -> anyhow::Result<()> {
        let mut files: Vec<_> = std::fs::read_dir(input_dir)
            .with_context(|| format!("failed to read input directory {}", input_dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
            .collect();
        files.sort();

        if files.is_empty() {
            anyhow::bail!("no JSON files found in {}", input_dir.display());
        }
        tracing::info!("found {} files to process", files.len());

        let mut processed_files = 0usize;
        let mut total_original = 0usize;
        let mut total_processed = 0usize;

        for file in &files {
            tracing::info!("processing {}", file.display());

            let tokens = match khabar_store::load_tokens(file) {
                Ok(tokens) => tokens,
                Err(e) => {
                    tracing::warn!("skipping {}: {e}", file.display());
                    continue;
                }
            };

            let batch = self.tokens.preprocessor().preprocess_all(&tokens);
            let source_file = file.display().to_string();
            self.store.save_token_batch(
                &batch,
                &self.config.preprocessing,
                Some(source_file),
                "cleaned_tokens",
            )?;

            processed_files += 1;
            total_original += batch.original_count;
            total_processed += batch.processed_count;
        }

        tracing::info!(
            "batch complete: {}/{} files, {} -> {} tokens ({:.2}% retention)",
            processed_files,
            files.len(),
            total_original,
            total_processed,
            retention_rate(total_original, total_processed)
        );
        Ok(())
    }
}
