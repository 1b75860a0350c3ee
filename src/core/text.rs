use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Normalize an optional free-text field for matching
///
/// Returns `None` when the field is absent or blank, otherwise a trimmed,
/// lower-cased copy. Every scoring rule reads its inputs through this so
/// that a missing field never contributes.
#[inline]
pub fn normalized(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Substring test on a normalized field; absent text never matches
#[inline]
pub fn contains(text: Option<&str>, needle: &str) -> bool {
    text.is_some_and(|t| t.contains(needle))
}

/// First keyword (in slice order) that occurs in any of the given fields
#[inline]
pub fn first_hit<'a>(keywords: &[&'a str], fields: &[Option<&str>]) -> Option<&'a str> {
    keywords
        .iter()
        .copied()
        .find(|kw| fields.iter().any(|field| contains(*field, kw)))
}

/// Years of experience embedded in free text, e.g. "5+ years" -> 5
///
/// Reads the first run of ASCII digits; no digits means 0. A number too
/// large for `u32` saturates.
pub fn extract_years(text: &str) -> u32 {
    FIRST_NUMBER
        .find(text)
        .map(|m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}
