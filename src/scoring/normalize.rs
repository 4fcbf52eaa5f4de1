//! Free-text normalization and accepted answer variants

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

use crate::dataset::Country;

/// Accepted spellings after normalization; a handful per target
pub type Variants = SmallVec<[String; 5]>;

static NON_ALPHANUMERIC_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9 ]").expect("valid regex"));
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").expect("valid regex"));
static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").expect("valid regex"));
static COMMA_OR_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\-]").expect("valid regex"));
static COMMA_OR_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,(]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[inline]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Trim, lowercase, strip diacritics and drop everything outside `[a-z0-9]`.
///
/// Returns `None` when nothing is left, so blank input never matches.
pub fn normalize_text(value: &str) -> Option<String> {
    let normalized: String = value
        .trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Normalize each value, dropping empties and duplicates while keeping order
pub fn unique_normalized<I, S>(values: I) -> Variants
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = Variants::new();
    for value in values {
        if let Some(normalized) = normalize_text(value.as_ref()) {
            if !seen.contains(&normalized) {
                seen.push(normalized);
            }
        }
    }
    seen
}

/// Code, full name, and the name with punctuation spaced out or removed
pub fn country_variants(target: &Country) -> Variants {
    let spaced = NON_ALPHANUMERIC_OR_SPACE.replace_all(&target.name, " ");
    let stripped = NON_ALPHANUMERIC.replace_all(&target.name, "");
    unique_normalized([
        target.code.as_str(),
        target.name.as_str(),
        spaced.as_ref(),
        stripped.as_ref(),
    ])
}

/// Raw capital, the capital with parenthesized notes removed, its first
/// comma/parenthesis segment, the whitespace-collapsed form and its first word
pub fn capital_variants(capital: &str) -> Variants {
    let without_notes = PARENTHESIZED.replace_all(capital, " ");
    let sanitized = COMMA_OR_HYPHEN.replace_all(&without_notes, " ");
    let first_segment = COMMA_OR_PAREN.split(capital).next().unwrap_or("");
    let collapsed = WHITESPACE.replace_all(&sanitized, " ");
    let first_word = WHITESPACE.split(capital).next().unwrap_or("");

    unique_normalized([
        capital,
        sanitized.as_ref(),
        first_segment,
        collapsed.as_ref(),
        first_word,
    ])
}
