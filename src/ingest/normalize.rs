//! Text Normalizer and cleaning transform
//!
//! Both are total over arbitrary text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading whitespace plus any run of `[...]` tags, each with trailing whitespace
static LEADING_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:\[[^\]]*\]\s*)*").expect("leading tag pattern is valid"));

/// Split pasted or recognized text into candidate titles.
///
/// Accepts `\n` and `\r\n` line endings, trims every line and drops blank
/// ones. Order is preserved.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip chat-export prefixes such as `[WA] [10:02] `.
///
/// Only the leading run of tags goes; brackets after the first other
/// character stay. Idempotent.
pub fn clean_title(title: &str) -> String {
    LEADING_TAGS.replace(title, "").into_owned()
}
