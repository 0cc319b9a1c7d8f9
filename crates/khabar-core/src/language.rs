use std::collections::HashSet;

use crate::batch::TokenBatch;

/// Whole-article cleaning interface for language implementations
pub trait TextCleaner: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ne", "hi", etc.)
    fn language_code(&self) -> &str;

    /// Clean a full article text. `None` means the text was rejected,
    /// either because it was empty or because it fell outside the
    /// configured length bounds after cleaning.
    fn clean(&self, text: &str) -> Option<String>;
}

/// Token-level cleaning interface for language implementations
pub trait TokenPreprocessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ne", "hi", etc.)
    fn language_code(&self) -> &str;

    /// Clean a single token. `None` means the token was filtered out.
    fn preprocess(&self, token: &str) -> Option<String>;

    /// Whether the batch pass drops repeated tokens.
    fn remove_duplicates(&self) -> bool {
        false
    }

    /// Run the per-token pipeline over a whole sequence, then deduplicate
    /// while keeping the first occurrence of each surviving token.
    fn preprocess_all(&self, tokens: &[String]) -> TokenBatch {
        let mut processed = Vec::new();
        let mut removed = 0usize;

        for token in tokens {
            match self.preprocess(token) {
                Some(kept) => processed.push(kept),
                None => removed += 1,
            }
        }

        if self.remove_duplicates() {
            let before = processed.len();
            let mut seen = HashSet::new();
            processed.retain(|token| seen.insert(token.clone()));
            tracing::debug!("removed {} duplicate tokens", before - processed.len());
        }

        TokenBatch {
            original_count: tokens.len(),
            processed_count: processed.len(),
            removed_count: removed,
            tokens: processed,
        }
    }
}

/// Break text into processable tokens
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercaser {
        dedupe: bool,
    }

    impl TokenPreprocessor for Uppercaser {
        fn language_code(&self) -> &str {
            "xx"
        }

        fn preprocess(&self, token: &str) -> Option<String> {
            if token.starts_with('#') {
                None
            } else {
                Some(token.to_uppercase())
            }
        }

        fn remove_duplicates(&self) -> bool {
            self.dedupe
        }
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn preprocess_all_counts_rejections() {
        let pre = Uppercaser { dedupe: false };
        let batch = pre.preprocess_all(&tokens(&["a", "#drop", "b"]));
        assert_eq!(batch.tokens, vec!["A", "B"]);
        assert_eq!(batch.original_count, 3);
        assert_eq!(batch.processed_count, 2);
        assert_eq!(batch.removed_count, 1);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let pre = Uppercaser { dedupe: true };
        let batch = pre.preprocess_all(&tokens(&["क", "ख", "क", "ग"]));
        assert_eq!(batch.tokens, vec!["क", "ख", "ग"]);
        assert_eq!(batch.original_count, 4);
        assert_eq!(batch.processed_count, 3);
        // duplicates are not counted as removals
        assert_eq!(batch.removed_count, 0);
    }
}
