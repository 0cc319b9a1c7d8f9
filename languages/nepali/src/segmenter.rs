use khabar_core::language::Segmenter;

use crate::numbers::NumberMatcher;

/// Whitespace segmentation with punctuation peeled off token edges.
///
/// Chunks that classify as numeric pass through whole, so `रु.५००` or
/// `45.6` keep their internal punctuation. Edge characters inside the
/// Devanagari block stay attached (vowel signs are not alphanumeric but
/// belong to their word); danda and double danda always split off.
pub struct NepaliSegmenter {
    numbers: NumberMatcher,
}

impl NepaliSegmenter {
    pub fn new() -> Self {
        Self {
            numbers: NumberMatcher::token_level(true),
        }
    }
}

impl Default for NepaliSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    if c == '।' || c == '॥' {
        return false;
    }
    c.is_alphanumeric() || ('\u{0900}'..='\u{097F}').contains(&c)
}

impl Segmenter for NepaliSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            if self.numbers.is_numeric(chunk) {
                tokens.push(chunk.to_string());
                continue;
            }

            let chars: Vec<char> = chunk.chars().collect();
            let mut start = 0;
            let mut end = chars.len();

            while start < end && !is_word_char(chars[start]) {
                start += 1;
            }
            while end > start && !is_word_char(chars[end - 1]) {
                end -= 1;
            }

            for &c in &chars[..start] {
                tokens.push(c.to_string());
            }
            if start < end {
                tokens.push(chars[start..end].iter().collect());
            }
            for &c in &chars[end..] {
                tokens.push(c.to_string());
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        NepaliSegmenter::new().segment(text)
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_tokens() {
        assert!(segment("").is_empty());
        assert!(segment("   \n ").is_empty());
    }

    #[test]
    fn danda_splits_off_the_word() {
        assert_eq!(segment("नेपाल। भारत"), vec!["नेपाल", "।", "भारत"]);
    }

    #[test]
    fn trailing_matras_stay_attached() {
        assert_eq!(segment("नेपाली खबर"), vec!["नेपाली", "खबर"]);
    }

    #[test]
    fn numeric_chunks_pass_through_whole() {
        assert_eq!(segment("५०% बढ्यो।"), vec!["५०%", "बढ्यो", "।"]);
        assert_eq!(segment("रु.५०० तिर्नुहोस्"), vec!["रु.५००", "तिर्नुहोस्"]);
        assert_eq!(segment("45.6 डिग्री"), vec!["45.6", "डिग्री"]);
    }

    #[test]
    fn quotes_and_brackets_peel_off_edges() {
        assert_eq!(
            segment("\"नेपाल\" (काठमाडौं)"),
            vec!["\"", "नेपाल", "\"", "(", "काठमाडौं", ")"]
        );
    }

    #[test]
    fn interior_punctuation_stays_attached() {
        assert_eq!(segment("काठमाडौं-पोखरा"), vec!["काठमाडौं-पोखरा"]);
    }
}
