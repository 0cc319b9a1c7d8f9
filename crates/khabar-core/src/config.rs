use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_min_text_length() -> usize {
    10
}

fn default_max_text_length() -> usize {
    10_000
}

fn default_min_token_length() -> usize {
    1
}

fn default_max_token_length() -> usize {
    50
}

/// Knobs for whole-article text cleaning. Every step of the pipeline is
/// individually toggleable; the step order itself is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    #[serde(default = "default_true")]
    pub preserve_numbers: bool,
    #[serde(default = "default_true")]
    pub normalize_unicode: bool,
    #[serde(default = "default_true")]
    pub remove_extra_whitespace: bool,
    #[serde(default = "default_true")]
    pub standardize_punctuation: bool,
    #[serde(default = "default_true")]
    pub remove_urls: bool,
    #[serde(default = "default_true")]
    pub remove_emails: bool,
    /// Map Devanagari digits to their Arabic equivalents.
    #[serde(default)]
    pub normalize_devanagari_numerals: bool,
    #[serde(default = "default_true")]
    pub remove_html_tags: bool,
    /// Limit runs of repeated punctuation and strip symbol noise.
    #[serde(default = "default_true")]
    pub remove_excessive_punctuation: bool,
    /// Keep exactly one space after sentence punctuation.
    #[serde(default = "default_true")]
    pub preserve_sentence_structure: bool,
    /// Minimum character count to keep an article.
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    /// Maximum character count to keep an article.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            preserve_numbers: true,
            normalize_unicode: true,
            remove_extra_whitespace: true,
            standardize_punctuation: true,
            remove_urls: true,
            remove_emails: true,
            normalize_devanagari_numerals: false,
            remove_html_tags: true,
            remove_excessive_punctuation: true,
            preserve_sentence_structure: true,
            min_text_length: default_min_text_length(),
            max_text_length: default_max_text_length(),
        }
    }
}

/// Knobs for token-level preprocessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    #[serde(default = "default_true")]
    pub preserve_numbers: bool,
    #[serde(default = "default_true")]
    pub normalize_unicode: bool,
    #[serde(default = "default_true")]
    pub remove_whitespace: bool,
    #[serde(default = "default_true")]
    pub standardize_punctuation: bool,
    #[serde(default = "default_true")]
    pub remove_urls: bool,
    #[serde(default = "default_true")]
    pub remove_emails: bool,
    /// Keep only Nepali, numeric and plausible English tokens.
    #[serde(default = "default_true")]
    pub language_filtering: bool,
    #[serde(default = "default_true")]
    pub length_filtering: bool,
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,
    #[serde(default)]
    pub remove_stopwords: bool,
    #[serde(default)]
    pub normalize_devanagari_numerals: bool,
    /// Drop repeated tokens, keeping the first occurrence.
    #[serde(default = "default_true")]
    pub remove_duplicates: bool,
    #[serde(default = "default_true")]
    pub remove_excessive_special_chars: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            preserve_numbers: true,
            normalize_unicode: true,
            remove_whitespace: true,
            standardize_punctuation: true,
            remove_urls: true,
            remove_emails: true,
            language_filtering: true,
            length_filtering: true,
            min_token_length: default_min_token_length(),
            max_token_length: default_max_token_length(),
            remove_stopwords: false,
            normalize_devanagari_numerals: false,
            remove_duplicates: true,
            remove_excessive_special_chars: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaning_defaults_match_documented_values() {
        let config = CleaningConfig::default();
        assert!(config.preserve_numbers);
        assert!(!config.normalize_devanagari_numerals);
        assert_eq!(config.min_text_length, 10);
        assert_eq!(config.max_text_length, 10_000);
    }

    #[test]
    fn token_defaults_match_documented_values() {
        let config = TokenConfig::default();
        assert!(config.remove_duplicates);
        assert!(!config.remove_stopwords);
        assert_eq!(config.min_token_length, 1);
        assert_eq!(config.max_token_length, 50);
    }
}
