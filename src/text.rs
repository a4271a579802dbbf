// src/text.rs
//! Small string helpers
//!
//! Lengths are counted in `char`s, never bytes, so multi-byte text is never
//! split inside a code point.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern is a valid regex"));

/// Ideographic (full-width) space
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Trimmed copy of `value`; `None` becomes an empty string
pub fn to_trim(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

/// `None` for empty or whitespace-only input, otherwise the input unchanged
pub fn empty_to_none(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

pub fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Strip HTML tags, then line breaks, `&nbsp;` and every space
///
/// Meant for producing plain-text previews; all ASCII and ideographic spaces
/// are removed, not collapsed.
pub fn strip_html(content: Option<&str>) -> String {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    HTML_TAG
        .replace_all(content, "")
        .replace("\r\n", "")
        .replace("&nbsp;", "")
        .replace(&[IDEOGRAPHIC_SPACE, ' '][..], "")
        .trim()
        .to_owned()
}

/// Remove control characters that are illegal in XML 1.0, plus `&`
pub fn remove_xml_invalid_chars(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            !matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}' | '&')
        })
        .collect()
}

/// Replace the final character with `replacement`
///
/// Empty input yields just `replacement`.
pub fn replace_last(value: &str, replacement: &str) -> String {
    let mut chars = value.chars();
    chars.next_back();
    let mut out = String::with_capacity(value.len() + replacement.len());
    out.push_str(chars.as_str());
    out.push_str(replacement);
    out
}

/// Limit `original` to `maximum` chars, marking the cut with the configured
/// ellipsis (counted inside the limit)
pub fn constraint_length(original: &str, maximum: usize) -> String {
    let ellipsis = &crate::config::load().text.ellipsis;
    constraint_length_full(original, maximum, true, ellipsis)
}

/// Limit `original` to `maximum` chars and append `replacement` after the cut
pub fn constraint_length_with(original: &str, maximum: usize, replacement: &str) -> String {
    constraint_length_full(original, maximum, false, replacement)
}

/// Length constraint with explicit control over whether `replacement` counts
/// toward `maximum`
///
/// Input that is empty, already short enough, or paired with a replacement
/// that cannot fit is returned unchanged. The kept prefix is one char shorter
/// than the arithmetic suggests; existing stored previews depend on it.
pub fn constraint_length_full(
    original: &str,
    maximum: usize,
    include_replacement: bool,
    replacement: &str,
) -> String {
    if original.is_empty() || maximum == 0 {
        return original.to_owned();
    }

    let replacement_len = replacement.chars().count();
    if include_replacement && replacement_len > maximum {
        return original.to_owned();
    }

    if original.chars().count() <= maximum {
        return original.to_owned();
    }

    let budget = if include_replacement {
        maximum - replacement_len
    } else {
        maximum
    };
    let keep = budget.saturating_sub(1);

    let mut out: String = original.chars().take(keep).collect();
    out.push_str(replacement);
    out
}
