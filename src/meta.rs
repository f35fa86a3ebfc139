//! Metadata extraction and the structured document record.
//!
//! Documents embed metadata through inline markers of the form
//! `[meta:title]: <> (Some Title)`. Extraction is total: a missing or
//! malformed marker degrades to an empty string, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::search::tags;

/// Number of tags derived per document.
const TAG_COUNT: usize = 10;

/// Head of a title marker, up to and including the opening paren.
static TITLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[meta:title\]:\s<>\s\(").unwrap());

/// Head of a description marker, up to and including the opening paren.
static DESCRIPTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[meta:description\]:\s<>\s\(").unwrap());

/// Leading block of one to three two-line groups, used as a description
/// fallback when no marker is present. Lines must be newline-terminated.
static FIRST_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:.*\n.*\n){1,3}").unwrap());

/// A parsed document: raw content plus extracted metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    /// The raw document text, verbatim.
    pub content: String,
    /// Extracted `[meta:title]` marker text, or empty.
    pub title: String,
    /// Extracted `[meta:description]` marker text, first-lines fallback, or empty.
    pub description: String,
    /// Top-scoring terms of the content, at most ten, best first.
    pub tags: Vec<String>,
}

/// Builds a [`DocumentRecord`] from raw content. Total; never fails.
pub fn build(content: &str) -> DocumentRecord {
    DocumentRecord {
        content: content.to_string(),
        description: description(content),
        title: marker(content, &TITLE_MARKER).unwrap_or_default(),
        tags: tags(content, TAG_COUNT),
    }
}

/// Extracts the text of the first marker whose head matches `head`.
///
/// The capture runs from the opening paren to the first `)` that is not
/// immediately followed by another `)`, so a value like `(uses (nested))`
/// captures `uses (nested)` instead of stopping at the inner paren. The
/// capture must be non-empty, stay on one line, and is returned trimmed.
fn marker(content: &str, head: &Regex) -> Option<String> {
    let open = head.find(content)?.end();
    let rest = &content[open..];

    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' => return None,
            ')' if chars.peek().is_none_or(|&(_, next)| next != ')') => {
                let text = rest[..i].trim();
                return (!text.is_empty()).then(|| text.to_string());
            }
            _ => {}
        }
    }

    None
}

/// Description marker text, falling back to the first 2-6 lines of content.
fn description(content: &str) -> String {
    if let Some(text) = marker(content, &DESCRIPTION_MARKER) {
        return text;
    }

    FIRST_LINES
        .find(content)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_title_extraction() {
        let content = "[meta:title]: <> (Hello World)\n\nBody text.\n";
        check!(build(content).title == "Hello World");
    }

    #[test]
    fn test_title_absent() {
        check!(build("just some text\n").title == "");
    }

    #[rstest]
    #[case("[meta:title]: <> (uses (nested))\n", "uses (nested)")]
    #[case("[meta:title]: <> (plain) (ignored)\n", "plain")]
    #[case("[meta:title]: <> (  padded  )\n", "padded")]
    fn test_title_paren_handling(#[case] content: &str, #[case] expected: &str) {
        check!(build(content).title == expected);
    }

    #[test]
    fn test_title_must_stay_on_one_line() {
        let content = "[meta:title]: <> (broken\nacross lines)\n";
        check!(build(content).title == "");
    }

    #[test]
    fn test_description_marker() {
        let content = "intro\n\n[meta:description]: <> (A handy guide)\n";
        check!(build(content).description == "A handy guide");
    }

    #[test]
    fn test_description_fallback_to_first_lines() {
        let content = "First line.\nSecond line.\nThird line.\nFourth line.\n";
        let record = build(content);
        check!(record.description.starts_with("First line."));
        check!(!record.description.is_empty());
    }

    #[test]
    fn test_description_fallback_caps_at_six_lines() {
        let content = "1\n2\n3\n4\n5\n6\n7\n8\n";
        check!(build(content).description == "1\n2\n3\n4\n5\n6");
    }

    #[test]
    fn test_description_empty_when_nothing_matches() {
        // A single unterminated line matches neither marker nor fallback.
        check!(build("lonely line without newline").description == "");
    }

    #[test]
    fn test_tags_capped_at_ten() {
        let content = "one two three four five six seven eight nine ten eleven twelve";
        let record = build(content);
        check!(record.tags.len() <= 10);
    }

    #[test]
    fn test_content_passed_through_verbatim() {
        let content = "[meta:title]: <> (T)\nbody\n";
        check!(build(content).content == content);
    }

    #[test]
    fn test_empty_content() {
        let record = build("");
        check!(record.content == "");
        check!(record.title == "");
        check!(record.description == "");
        check!(record.tags.is_empty());
    }
}
