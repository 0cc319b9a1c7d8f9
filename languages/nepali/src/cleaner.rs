//! Whole-article cleaning for Nepali news text.

use khabar_core::config::CleaningConfig;
use khabar_core::language::TextCleaner;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::numbers::{self, NumberMatcher};
use crate::patterns;

/// Three or more repeated sentence terminators.
static REPEATED_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([।.!?]){3,}").expect("terminator pattern"));

static DANDA_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*।\s*").expect("danda spacing pattern"));

static QUESTION_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\?\s*").expect("question spacing pattern"));

static EXCLAMATION_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*!\s*").expect("exclamation spacing pattern"));

static COMMA_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*").expect("comma spacing pattern"));

/// Cleans whole article texts through a fixed step order: Unicode
/// normalization, markup/URL/email stripping, punctuation standardization,
/// whitespace normalization, optional numeral mapping, then length
/// filtering. Each step can be toggled off through [`CleaningConfig`].
pub struct NepaliTextCleaner {
    config: CleaningConfig,
    numbers: NumberMatcher,
}

impl NepaliTextCleaner {
    pub fn new(config: CleaningConfig) -> Self {
        let numbers = NumberMatcher::text_level(config.preserve_numbers);
        Self { config, numbers }
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Whether a text segment sits in a numeric context such as a
    /// percentage, currency amount or measurement. Always false when
    /// number preservation is disabled.
    pub fn is_number_context(&self, segment: &str) -> bool {
        self.numbers.contains_numeric(segment.trim())
    }

    fn normalize_unicode(&self, text: &str) -> String {
        if !self.config.normalize_unicode {
            return text.to_string();
        }
        text.nfc().collect()
    }

    fn strip_markup(&self, text: &str) -> String {
        if !self.config.remove_html_tags {
            return text.to_string();
        }
        patterns::HTML_TAG.replace_all(text, " ").into_owned()
    }

    fn strip_urls(&self, text: &str) -> String {
        if !self.config.remove_urls {
            return text.to_string();
        }
        patterns::URL.replace_all(text, " ").into_owned()
    }

    fn strip_emails(&self, text: &str) -> String {
        if !self.config.remove_emails {
            return text.to_string();
        }
        patterns::EMAIL.replace_all(text, " ").into_owned()
    }

    fn standardize_punctuation(&self, text: &str) -> String {
        if !self.config.standardize_punctuation {
            return text.to_string();
        }

        let mut text = text.replace('॥', "।");

        if self.config.remove_excessive_punctuation {
            text = REPEATED_TERMINATORS
                .replace_all(&text, "${1}${1}")
                .into_owned();
            text = patterns::EXCESSIVE_SYMBOLS
                .replace_all(&text, "")
                .into_owned();
        }

        text
    }

    fn normalize_whitespace(&self, text: &str) -> String {
        if !self.config.remove_extra_whitespace {
            return text.to_string();
        }

        let mut text = patterns::WHITESPACE.replace_all(text, " ").into_owned();

        if self.config.preserve_sentence_structure {
            text = DANDA_SPACING.replace_all(&text, "। ").into_owned();
            text = QUESTION_SPACING.replace_all(&text, "? ").into_owned();
            text = EXCLAMATION_SPACING.replace_all(&text, "! ").into_owned();
            text = COMMA_SPACING.replace_all(&text, ", ").into_owned();
        }

        text.trim().to_string()
    }

    fn normalize_numerals(&self, text: &str) -> String {
        if !self.config.normalize_devanagari_numerals {
            return text.to_string();
        }
        numbers::map_devanagari_digits(text)
    }

    fn within_length_bounds(&self, text: &str) -> bool {
        let length = text.trim().chars().count();
        self.config.min_text_length <= length && length <= self.config.max_text_length
    }
}

impl TextCleaner for NepaliTextCleaner {
    fn language_code(&self) -> &str {
        "ne"
    }

    fn clean(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let mut text = self.normalize_unicode(text);
        text = self.strip_markup(&text);
        text = self.strip_urls(&text);
        text = self.strip_emails(&text);

        text = self.standardize_punctuation(&text);
        text = self.normalize_whitespace(&text);

        text = self.normalize_numerals(&text);

        if !self.within_length_bounds(&text) {
            tracing::debug!(
                "text rejected by length filter: {} chars",
                text.trim().chars().count()
            );
            return None;
        }

        let cleaned = text.trim();
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned.to_string())
        }
    }
}
