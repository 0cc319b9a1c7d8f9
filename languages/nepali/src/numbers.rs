//! Numeric-context recognition for Nepali text.
//!
//! Percentages, currency amounts, measurements, years and plain numbers are
//! recognized in both numeral scripts. A numeric classification is a veto:
//! a token the matcher accepts is exempt from punctuation standardization,
//! noise stripping, language filtering, length filtering and stopword
//! removal.

use once_cell::sync::Lazy;
use regex::Regex;

/// One recognizer rule, compiled in a whole-token and a substring form.
pub struct NumberRule {
    name: &'static str,
    whole: Regex,
    partial: Regex,
}

/// Recognizer sources in evaluation order. Order carries no precedence
/// beyond naming the first match; any single match classifies a token as
/// numeric. Digits of either script are accepted everywhere a digit may
/// appear.
const RECOGNIZER_SOURCES: &[(&str, &str)] = &[
    // 50%, ५०.५ %
    ("percentage", r"[\d०-९]+\.?[\d०-९]*\s*%"),
    // रु. १,५००, Rs 100.50
    ("currency", r"(?:रु\.?|Rs\.?)\s*[\d०-९,]+\.?[\d०-९]*"),
    // 5 km, ५ किमी
    (
        "measurement",
        r"[\d०-९]+\.?[\d०-९]*\s*(?:किमी|मिटर|लिटर|kg|km|m|l|cm|mm)",
    ),
    // 1984, 2024, २०८१
    ("year", r"(?:19|20|२०)[\d०-९]{2}"),
    // 45.6, ४५.६
    ("decimal", r"[\d०-९]+\.[\d०-९]+"),
    // 1,234,567
    ("grouped-integer", r"[\d०-९]{1,3}(?:,[\d०-९]{3})*"),
    // bare digits; only meaningful at token granularity
    ("integer", r"[\d०-९]+"),
];

static RULES: Lazy<Vec<NumberRule>> = Lazy::new(|| {
    RECOGNIZER_SOURCES
        .iter()
        .map(|&(name, source)| NumberRule {
            name,
            whole: Regex::new(&format!("^(?:{source})$")).expect("recognizer source"),
            partial: Regex::new(source).expect("recognizer source"),
        })
        .collect()
});

/// Recognizes numeric-context strings in Devanagari or Arabic numerals.
pub struct NumberMatcher {
    rules: &'static [NumberRule],
    preserve_numbers: bool,
}

impl NumberMatcher {
    /// Matcher for whole-token classification, carrying the plain-integer
    /// catch-all rule.
    pub fn token_level(preserve_numbers: bool) -> Self {
        Self {
            rules: &RULES[..],
            preserve_numbers,
        }
    }

    /// Matcher for article-level text. One rule short of the token-level
    /// set: bare integers are not recognized at phrase granularity.
    pub fn text_level(preserve_numbers: bool) -> Self {
        Self {
            rules: &RULES[..RULES.len() - 1],
            preserve_numbers,
        }
    }

    /// True when the trimmed token fully matches any recognizer. Always
    /// false when number preservation is disabled.
    pub fn is_numeric(&self, token: &str) -> bool {
        if !self.preserve_numbers {
            return false;
        }
        let token = token.trim();
        self.rules.iter().any(|rule| rule.whole.is_match(token))
    }

    /// True when any recognizer matches somewhere inside the segment.
    pub fn contains_numeric(&self, segment: &str) -> bool {
        if !self.preserve_numbers {
            return false;
        }
        self.rules.iter().any(|rule| rule.partial.is_match(segment))
    }

    /// Name of the first recognizer the trimmed token fully matches.
    pub fn classify(&self, token: &str) -> Option<&'static str> {
        if !self.preserve_numbers {
            return None;
        }
        let token = token.trim();
        self.rules
            .iter()
            .find(|rule| rule.whole.is_match(token))
            .map(|rule| rule.name)
    }
}

/// Map Devanagari digits to their Arabic equivalents, leaving every other
/// character untouched.
pub fn map_devanagari_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '०' => '0',
            '१' => '1',
            '२' => '2',
            '३' => '3',
            '४' => '4',
            '५' => '5',
            '६' => '6',
            '७' => '7',
            '८' => '8',
            '९' => '9',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_match_in_both_scripts() {
        let matcher = NumberMatcher::token_level(true);
        assert!(matcher.is_numeric("50%"));
        assert!(matcher.is_numeric("५०%"));
        assert!(matcher.is_numeric("45.5 %"));
        assert_eq!(matcher.classify("५०%"), Some("percentage"));
    }

    #[test]
    fn currency_accepts_both_prefixes() {
        let matcher = NumberMatcher::token_level(true);
        assert!(matcher.is_numeric("रु.१००"));
        assert!(matcher.is_numeric("रु १,५००"));
        assert!(matcher.is_numeric("Rs. 100.50"));
        assert_eq!(matcher.classify("Rs.100"), Some("currency"));
    }

    #[test]
    fn measurements_need_a_known_unit() {
        let matcher = NumberMatcher::token_level(true);
        assert!(matcher.is_numeric("5 km"));
        assert!(matcher.is_numeric("५ किमी"));
        assert!(!matcher.is_numeric("5 miles"));
    }

    #[test]
    fn years_require_a_century_prefix() {
        let matcher = NumberMatcher::token_level(true);
        assert_eq!(matcher.classify("2024"), Some("year"));
        assert_eq!(matcher.classify("२०८१"), Some("year"));
        assert_eq!(matcher.classify("1999"), Some("year"));
        // no century prefix, caught by the grouped-integer rule instead
        assert_eq!(matcher.classify("184"), Some("grouped-integer"));
    }

    #[test]
    fn decimals_and_grouped_integers_match() {
        let matcher = NumberMatcher::token_level(true);
        assert!(matcher.is_numeric("45.6"));
        assert!(matcher.is_numeric("४५.६"));
        assert!(matcher.is_numeric("1,234"));
        assert!(matcher.is_numeric("१,२३४"));
        assert!(matcher.is_numeric("1,234,567"));
    }

    #[test]
    fn text_level_has_no_integer_catch_all() {
        let token_level = NumberMatcher::token_level(true);
        let text_level = NumberMatcher::text_level(true);

        // four bare digits with no century prefix
        assert!(token_level.is_numeric("१२३४"));
        assert!(!text_level.is_numeric("१२३४"));
    }

    #[test]
    fn disabled_preservation_rejects_everything() {
        let matcher = NumberMatcher::token_level(false);
        assert!(!matcher.is_numeric("50%"));
        assert!(!matcher.contains_numeric("रु. 100"));
        assert_eq!(matcher.classify("2024"), None);
    }

    #[test]
    fn contains_numeric_finds_embedded_contexts() {
        let matcher = NumberMatcher::text_level(true);
        assert!(matcher.contains_numeric("मूल्य रु. १०० पुग्यो"));
        assert!(!matcher.contains_numeric("कुनै अंक छैन"));
    }

    #[test]
    fn non_numeric_tokens_are_rejected() {
        let matcher = NumberMatcher::token_level(true);
        assert!(!matcher.is_numeric("नेपाल"));
        assert!(!matcher.is_numeric("abc"));
        assert!(!matcher.is_numeric(""));
    }

    #[test]
    fn digit_mapping_covers_all_ten_digits() {
        assert_eq!(map_devanagari_digits("०१२३४५६७८९"), "0123456789");
        assert_eq!(map_devanagari_digits("सन् २०२४ मा"), "सन् 2024 मा");
    }
}
