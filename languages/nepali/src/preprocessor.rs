//! Token-level preprocessing for segmented Nepali text.
//!
//! Three phases: basic cleaning (normalization), content filtering (noise,
//! language, length), semantic cleaning (stopwords, numeral mapping).
//! Numeric tokens short-circuit every filter.

use khabar_core::config::TokenConfig;
use khabar_core::language::TokenPreprocessor;
use unicode_normalization::UnicodeNormalization;

use crate::numbers::{self, NumberMatcher};
use crate::patterns;
use crate::stopwords;

pub struct NepaliTokenPreprocessor {
    config: TokenConfig,
    numbers: NumberMatcher,
}

impl NepaliTokenPreprocessor {
    pub fn new(config: TokenConfig) -> Self {
        let numbers = NumberMatcher::token_level(config.preserve_numbers);
        Self { config, numbers }
    }

    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Whole-token numeric classification, including the plain-integer
    /// catch-all rule.
    pub fn is_numeric(&self, token: &str) -> bool {
        self.numbers.is_numeric(token)
    }

    fn normalize_unicode(&self, token: &str) -> String {
        if !self.config.normalize_unicode {
            return token.to_string();
        }
        token.nfc().collect()
    }

    fn normalize_whitespace(&self, token: &str) -> String {
        if !self.config.remove_whitespace {
            return token.to_string();
        }
        patterns::WHITESPACE
            .replace_all(token, " ")
            .trim()
            .to_string()
    }

    fn standardize_punctuation(&self, token: &str) -> String {
        if !self.config.standardize_punctuation || self.numbers.is_numeric(token) {
            return token.to_string();
        }
        token.replace('।', ".").replace('॥', ".")
    }

    fn is_noise(&self, token: &str) -> bool {
        if self.numbers.is_numeric(token) {
            return false;
        }

        if self.config.remove_urls && patterns::URL.is_match(token) {
            tracing::debug!("removed url token: {token}");
            return true;
        }

        if self.config.remove_emails && patterns::EMAIL.is_match(token) {
            tracing::debug!("removed email token: {token}");
            return true;
        }

        if self.config.remove_excessive_special_chars && patterns::EXCESSIVE_SYMBOLS.is_match(token)
        {
            tracing::debug!("removed symbol-run token: {token}");
            return true;
        }

        false
    }

    /// Nepali and numeric tokens are always admissible; Latin-only tokens
    /// must be longer than two characters to survive. Mixed-script tokens
    /// are admitted by the Devanagari check.
    fn admissible_language(&self, token: &str) -> bool {
        if !self.config.language_filtering {
            return true;
        }

        if self.numbers.is_numeric(token) {
            return true;
        }

        if patterns::DEVANAGARI.is_match(token) {
            return true;
        }

        patterns::LATIN_WORD.is_match(token) && token.chars().count() > 2
    }

    fn within_length_bounds(&self, token: &str) -> bool {
        if !self.config.length_filtering {
            return true;
        }

        // numeric tokens are kept regardless of length
        if self.numbers.is_numeric(token) {
            return true;
        }

        let length = token.chars().count();
        self.config.min_token_length <= length && length <= self.config.max_token_length
    }

    fn passes_stopword_filter(&self, token: &str) -> bool {
        if !self.config.remove_stopwords {
            return true;
        }

        if self.numbers.is_numeric(token) {
            return true;
        }

        !stopwords::is_stopword(&token.to_lowercase())
    }

    fn normalize_numerals(&self, token: &str) -> String {
        if !self.config.normalize_devanagari_numerals {
            return token.to_string();
        }
        numbers::map_devanagari_digits(token)
    }
}

impl TokenPreprocessor for NepaliTokenPreprocessor {
    fn language_code(&self) -> &str {
        "ne"
    }

    fn preprocess(&self, token: &str) -> Option<String> {
        // Phase 1: basic cleaning
        let token = self.normalize_unicode(token);
        let token = self.normalize_whitespace(&token);
        let token = self.standardize_punctuation(&token);

        // Phase 2: content filtering
        if self.is_noise(&token) {
            return None;
        }
        if !self.admissible_language(&token) {
            tracing::debug!("filtered by language: {token}");
            return None;
        }
        if !self.within_length_bounds(&token) {
            tracing::debug!("filtered by length: {token}");
            return None;
        }

        // Phase 3: semantic cleaning
        if !self.passes_stopword_filter(&token) {
            tracing::debug!("removed stopword: {token}");
            return None;
        }
        let token = self.normalize_numerals(&token);

        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn remove_duplicates(&self) -> bool {
        self.config.remove_duplicates
    }
}
