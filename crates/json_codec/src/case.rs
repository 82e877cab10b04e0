//! Bidirectional field-name case transforms (spec §4.8).
//!
//! Every transform here operates byte-for-byte on ASCII only; non-ASCII
//! `char`s pass through untouched, per spec's "case toggling uses the ASCII
//! rule" note.

use alloc::string::String;

/// Toggles the case of the first `char` only: `A-Z` and `a-z` swap, any
/// other byte passes through. Used for pascal ↔ camel, which this
/// transform is its own inverse for.
pub(crate) fn toggle_first_char_case(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let toggled = if first.is_ascii_uppercase() {
        first.to_ascii_lowercase()
    } else if first.is_ascii_lowercase() {
        first.to_ascii_uppercase()
    } else {
        first
    };
    let mut out = String::with_capacity(s.len());
    out.push(toggled);
    out.push_str(chars.as_str());
    out
}

/// `camelCase` → `snake_case`: prepend `_` + lowercase before every
/// uppercase byte.
pub(crate) fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `snake_case` → `camelCase`: split on `_`, uppercase the first byte of
/// each non-head segment.
pub(crate) fn snake_to_camel(s: &str) -> String {
    join_segments_camel(s, '_')
}

/// `camelCase` → `kebab-case`: prepend `-` + lowercase before every
/// uppercase byte.
pub(crate) fn camel_to_kebab(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `kebab-case` → `camelCase`: split on `-`, uppercase the first byte of
/// each non-head segment.
pub(crate) fn kebab_to_camel(s: &str) -> String {
    join_segments_camel(s, '-')
}

fn join_segments_camel(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, segment) in s.split(separator).enumerate() {
        if i == 0 {
            out.push_str(segment);
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
