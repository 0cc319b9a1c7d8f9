//! Noise-shape patterns shared by the text cleaner and the token
//! preprocessor. Each is an independent, named rule so the filters built
//! on top of them can be tested in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http`/`https` URLs: scheme, then URL-safe characters and percent
/// escapes.
pub(crate) static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|%[0-9a-fA-F]{2})+")
        .expect("url pattern")
});

/// `local@domain.tld` mail addresses, TLD of two or more letters.
pub(crate) static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email pattern")
});

/// Tag-delimited markup.
pub(crate) static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("html tag pattern"));

/// Runs of three or more symbols that are neither word characters nor
/// Devanagari code points.
pub(crate) static EXCESSIVE_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\u0900-\u097F]{3,}").expect("symbol run pattern"));

/// Any run of whitespace.
pub(crate) static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// At least one Devanagari code point.
pub(crate) static DEVANAGARI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u0900-\u097F]").expect("devanagari pattern"));

/// A token made of Latin letters only.
pub(crate) static LATIN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").expect("latin word pattern"));
