//! Comma-separated tag field tokenizer
//!
//! All offsets in this module are character offsets, not byte offsets, so
//! they line up with what the user sees in the input field.

use std::collections::HashSet;

/// Separator written between tags when a suggestion is committed
pub const SEPARATOR: &str = ", ";

/// Number of characters the cursor advances past [`SEPARATOR`] after a commit
pub const SEPARATOR_LEN: usize = SEPARATOR.len();

const DELIMITER: char = ',';

/// Character span of the token containing the cursor
///
/// `start` is just after the previous `,` (or 0) and `end` is the next `,`
/// (or the end of the value). The delimiter itself is never part of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    /// Raw text of the span, surrounding whitespace included
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        &value[byte_offset(value, self.start)..byte_offset(value, self.end)]
    }

    /// Trimmed token text, the tag the user perceives as "current"
    pub fn token<'a>(&self, value: &'a str) -> &'a str {
        self.slice(value).trim()
    }

    /// Whether this span runs to the end of the value
    pub fn is_last(&self, value: &str) -> bool {
        self.end >= char_len(value)
    }
}

/// Result of committing a tag into a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub value: String,
    pub cursor: usize,
}

/// Number of characters in `value`
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Convert a character offset into a byte offset, clamping to the end
pub fn byte_offset(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(byte, _)| byte)
}

/// Compute the span of the token containing `cursor`
///
/// A cursor past the end of the value is clamped to the end.
pub fn token_span(value: &str, cursor: usize) -> TokenSpan {
    let chars: Vec<char> = value.chars().collect();
    let cursor = cursor.min(chars.len());

    let start = chars[..cursor]
        .iter()
        .rposition(|&c| c == DELIMITER)
        .map_or(0, |idx| idx + 1);
    let end = chars[cursor..]
        .iter()
        .position(|&c| c == DELIMITER)
        .map_or(chars.len(), |idx| cursor + idx);

    TokenSpan { start, end }
}

/// Trimmed token under the cursor
pub fn current_token(value: &str, cursor: usize) -> &str {
    token_span(value, cursor).token(value)
}

/// Lowercased, trimmed, non-empty tokens of `value`
pub fn existing_tags(value: &str) -> HashSet<String> {
    value
        .split(DELIMITER)
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Split a tag string into trimmed, non-empty tag names
///
/// Order is preserved and exact duplicates are dropped.
pub fn parse_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(DELIMITER).map(str::trim) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Replace the token at `span` with `tag` and normalize separators
///
/// A token that follows another one is written with a single leading space.
/// Exactly one [`SEPARATOR`] follows the committed tag: any run of `,` and
/// whitespace after it is folded into it, and the last token gets a
/// trailing separator so the field is ready for the next tag. The cursor
/// lands right after that separator.
pub fn commit_tag(value: &str, span: TokenSpan, tag: &str) -> Committed {
    let before = &value[..byte_offset(value, span.start)];
    let after = &value[byte_offset(value, span.end)..];

    let mut head = String::with_capacity(value.len() + tag.len() + SEPARATOR_LEN);
    head.push_str(before);
    if span.start > 0 {
        head.push(' ');
    }
    head.push_str(tag);
    let cursor = char_len(&head) + SEPARATOR_LEN;

    let rest = if span.is_last(value) {
        ""
    } else {
        after.trim_start_matches(|c: char| c == DELIMITER || c.is_whitespace())
    };

    let mut committed = head;
    committed.push_str(SEPARATOR);
    committed.push_str(rest);

    Committed {
        value: committed,
        cursor,
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tokenizer_tests;
