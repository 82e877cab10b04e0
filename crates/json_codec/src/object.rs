//! Shared object-framing driver for the `{`/`}`/`,`/`:` state machine
//! (spec §4.5's object scanner states: `BeforeOpeningBrace`,
//! `AfterOpeningBrace`, `ObjectFieldNameStart`, `BeforeColon`, `AfterColon`,
//! `AfterObjectValue`, `AfterComma`, `AfterClosingBrace`, `InvalidObject`).
//!
//! Both the schema-driven record decoder (`crate::record`) and the dynamic
//! `Value::Object` decoder (`crate::value`) need this same framing; the
//! only thing that differs between them is what happens to a field name and
//! value once found, so that's left to the caller's `map_name`/`on_field`
//! callbacks instead of being duplicated per consumer.

use alloc::string::String;

use crate::{DecodeError, codec::skip_whitespace, string_codec::decode_str};

/// Drives the object scanner over `bytes`.
///
/// `map_name` rewrites each decoded external key before it reaches
/// `on_field` — the record decoder passes `Options::external_to_internal`
/// (spec §4.8); the dynamic value decoder passes the identity function,
/// since an untyped map has no "internal name" to rewrite to.
///
/// `on_field` is invoked once per key/value pair, in source order, with the
/// (already-mapped) name and the value's bytes positioned at its first
/// non-whitespace byte (spec §3: "value decoders receive input starting at
/// the first non-whitespace byte of the value"). It must return the
/// unconsumed tail after handling that value, plus a result.
///
/// Returns `Ok(())` and the tail after the closing `}` on success, or
/// `Err(DecodeError::TooShort)` and the *original* `bytes` on any failure
/// (spec §3's "a decoder never advances past bytes it failed to consume").
pub(crate) fn decode_object<'b>(
    bytes: &'b [u8],
    mut map_name: impl FnMut(&str) -> String,
    mut on_field: impl FnMut(&str, &'b [u8]) -> (Result<(), DecodeError>, &'b [u8]),
) -> (Result<(), DecodeError>, &'b [u8]) {
    let original = bytes;
    let mut rest = skip_whitespace(bytes);
    let Some(after_open) = rest.strip_prefix(b"{") else {
        return (Err(DecodeError::TooShort), original);
    };
    rest = skip_whitespace(after_open);
    if let Some(after_close) = rest.strip_prefix(b"}") {
        return (Ok(()), after_close);
    }

    loop {
        rest = skip_whitespace(rest);
        let (key_result, key_rest) = decode_str(rest);
        let Ok(external_name) = key_result else {
            return (Err(DecodeError::TooShort), original);
        };
        rest = skip_whitespace(key_rest);
        let Some(after_colon) = rest.strip_prefix(b":") else {
            return (Err(DecodeError::TooShort), original);
        };
        rest = skip_whitespace(after_colon);

        let internal_name = map_name(&external_name);
        let (field_result, field_rest) = on_field(&internal_name, rest);
        if field_result.is_err() {
            return (Err(DecodeError::TooShort), original);
        }

        rest = skip_whitespace(field_rest);
        match rest.first() {
            Some(b',') => {
                rest = &rest[1..];
            }
            Some(b'}') => {
                return (Ok(()), &rest[1..]);
            }
            _ => return (Err(DecodeError::TooShort), original),
        }
    }
}
