use serde::Serialize;

use crate::article::{CleanedArticle, RawArticle};
use crate::error::PipelineError;
use crate::language::{Segmenter, TextCleaner, TokenPreprocessor};

/// Percentage of items surviving a filter pass. Zero when nothing came in.
pub fn retention_rate(original: usize, kept: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        kept as f64 / original as f64 * 100.0
    }
}

/// Aggregate result of cleaning one batch of articles.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedBatch {
    pub articles: Vec<CleanedArticle>,
    pub original_count: usize,
    pub cleaned_count: usize,
    pub retention_rate: f64,
}

/// Aggregate result of preprocessing one token sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TokenBatch {
    pub tokens: Vec<String>,
    pub original_count: usize,
    pub processed_count: usize,
    pub removed_count: usize,
}

/// Maps article batches through a text cleaner and keeps retention counts.
/// Holds no mutable state, so one pipeline can serve any number of batches.
pub struct ArticlePipeline<C> {
    cleaner: C,
}

impl<C: TextCleaner> ArticlePipeline<C> {
    pub fn new(cleaner: C) -> Self {
        Self { cleaner }
    }

    pub fn cleaner(&self) -> &C {
        &self.cleaner
    }

    /// Clean every article with at least one text field. Articles rejected
    /// by the cleaner are excluded from the output but counted in
    /// `original_count`; articles with no text at all are not counted.
    pub fn process_batch(&self, articles: &[RawArticle]) -> Result<CleanedBatch, PipelineError> {
        let mut cleaned = Vec::new();
        let mut original_count = 0usize;

        for article in articles {
            let Some(combined) = article.combined_text() else {
                continue;
            };
            original_count += 1;

            // the record keeps original-text metadata only; the cleaned
            // text itself is not carried forward
            if self.cleaner.clean(&combined).is_none() {
                continue;
            }

            cleaned.push(CleanedArticle {
                original_id: article
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("article_{original_count}")),
                original_title: article.title.clone().unwrap_or_default(),
                original_length: combined.chars().count(),
                metadata: article.metadata(),
            });
        }

        let cleaned_count = cleaned.len();
        tracing::info!("processed {original_count} articles, {cleaned_count} successfully cleaned");

        Ok(CleanedBatch {
            retention_rate: retention_rate(original_count, cleaned_count),
            articles: cleaned,
            original_count,
            cleaned_count,
        })
    }
}

/// Segments article headlines into tokens and runs each through a token
/// preprocessor.
pub struct TokenPipeline<S, P> {
    segmenter: S,
    preprocessor: P,
}

impl<S: Segmenter, P: TokenPreprocessor> TokenPipeline<S, P> {
    pub fn new(segmenter: S, preprocessor: P) -> Self {
        Self {
            segmenter,
            preprocessor,
        }
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    /// Segment every article's title and description into one flat token
    /// stream. A batch yielding no tokens at all is the one distinguished
    /// error of the tokenization path.
    pub fn tokenize_batch(&self, articles: &[RawArticle]) -> Result<Vec<String>, PipelineError> {
        let mut all_tokens = Vec::new();
        for article in articles {
            all_tokens.extend(self.segmenter.segment(&article.tokenizable_text()));
        }

        if all_tokens.is_empty() {
            return Err(PipelineError::NoTokens);
        }
        Ok(all_tokens)
    }

    /// Tokenize a batch and preprocess the resulting stream. Zero survivors
    /// from a non-empty token stream is still a successful, empty batch.
    pub fn process_batch(&self, articles: &[RawArticle]) -> Result<TokenBatch, PipelineError> {
        let tokens = self.tokenize_batch(articles)?;
        Ok(self.preprocessor.preprocess_all(&tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps any text at least five characters long, unchanged.
    struct MinLenCleaner;

    impl TextCleaner for MinLenCleaner {
        fn language_code(&self) -> &str {
            "xx"
        }

        fn clean(&self, text: &str) -> Option<String> {
            let trimmed = text.trim();
            (trimmed.chars().count() >= 5).then(|| trimmed.to_string())
        }
    }

    struct WhitespaceSegmenter;

    impl Segmenter for WhitespaceSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    struct KeepAll;

    impl TokenPreprocessor for KeepAll {
        fn language_code(&self) -> &str {
            "xx"
        }

        fn preprocess(&self, token: &str) -> Option<String> {
            Some(token.to_string())
        }
    }

    fn article(title: Option<&str>, description: Option<&str>) -> RawArticle {
        RawArticle {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn retention_rate_is_zero_for_empty_input() {
        assert_eq!(retention_rate(0, 0), 0.0);
    }

    #[test]
    fn retention_rate_stays_within_bounds() {
        assert_eq!(retention_rate(4, 4), 100.0);
        assert_eq!(retention_rate(4, 1), 25.0);
        assert_eq!(retention_rate(4, 0), 0.0);
    }

    #[test]
    fn textless_articles_are_not_counted() {
        let pipeline = ArticlePipeline::new(MinLenCleaner);
        let articles = vec![
            article(Some("लामो समाचार शीर्षक"), None),
            article(None, None),
            article(Some("छ"), None),
        ];

        let batch = pipeline.process_batch(&articles).unwrap();
        assert_eq!(batch.original_count, 2);
        assert_eq!(batch.cleaned_count, 1);
        assert_eq!(batch.retention_rate, 50.0);
    }

    #[test]
    fn missing_id_falls_back_to_positional_name() {
        let pipeline = ArticlePipeline::new(MinLenCleaner);
        let articles = vec![article(Some("पहिलो लामो शीर्षक"), None)];

        let batch = pipeline.process_batch(&articles).unwrap();
        assert_eq!(batch.articles[0].original_id, "article_1");
        assert_eq!(batch.articles[0].original_title, "पहिलो लामो शीर्षक");
    }

    #[test]
    fn original_length_counts_characters_of_combined_text() {
        let pipeline = ArticlePipeline::new(MinLenCleaner);
        let articles = vec![article(Some("नेपाल"), Some("समाचार"))];

        let batch = pipeline.process_batch(&articles).unwrap();
        // "नेपाल समाचार" is 12 chars, far fewer bytes than len() would say
        assert_eq!(batch.articles[0].original_length, 12);
    }

    #[test]
    fn empty_batch_is_success_with_zero_rate() {
        let pipeline = ArticlePipeline::new(MinLenCleaner);
        let batch = pipeline.process_batch(&[]).unwrap();
        assert_eq!(batch.original_count, 0);
        assert_eq!(batch.retention_rate, 0.0);
        assert!(batch.articles.is_empty());
    }

    #[test]
    fn zero_tokens_is_the_distinguished_error() {
        let pipeline = TokenPipeline::new(WhitespaceSegmenter, KeepAll);
        let articles = vec![article(None, None), article(Some("   "), None)];

        let result = pipeline.process_batch(&articles);
        assert!(matches!(result, Err(PipelineError::NoTokens)));
    }

    #[test]
    fn token_batch_flattens_across_articles() {
        let pipeline = TokenPipeline::new(WhitespaceSegmenter, KeepAll);
        let articles = vec![
            article(Some("नेपाल समाचार"), None),
            article(Some("ताजा खबर"), None),
        ];

        let batch = pipeline.process_batch(&articles).unwrap();
        assert_eq!(batch.tokens, vec!["नेपाल", "समाचार", "ताजा", "खबर"]);
        assert_eq!(batch.original_count, 4);
    }
}
