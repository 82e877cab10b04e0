//! Tuple codec (spec §4.4): positional `(A, B, ...)` encode/decode,
//! analogous to the list codec but keyed by index instead of iterated
//! homogeneously.
//!
//! Spec's stepping function returns `Next(elementDecoder)` for position `i`
//! or `TooLong` once arity is exceeded, at which point "the tuple decoder
//! consumes and discards the value at that position". Since each Rust tuple
//! arity fixes its own element types at compile time, the stepping decision
//! collapses to "decode each fixed position in turn, then skip whatever the
//! input still has past the last one" — implemented once per arity below,
//! sharing `skip_extra_elements_and_close` for the common `TooLong` tail via
//! the skip-value scanner (`crate::scanner::skip_value`).

use alloc::vec::Vec;

use crate::{
    Decode, DecodeError, Encode, Options,
    codec::skip_whitespace,
    rewrite::{decode_null_as_empty, encode_empty_as_null},
    scanner::skip_value,
};

/// Consumes any array elements beyond a tuple's own arity (spec §4.4's
/// `TooLong` branch), then the closing `]`. `rest` must already be
/// positioned just after the last decoded element, with whitespace skipped.
fn skip_extra_elements_and_close(mut rest: &[u8]) -> Option<&[u8]> {
    loop {
        match rest.first() {
            Some(b']') => return Some(&rest[1..]),
            Some(b',') => {
                rest = skip_whitespace(&rest[1..]);
                let len = skip_value(rest)?;
                rest = skip_whitespace(&rest[len..]);
            }
            _ => return None,
        }
    }
}

/// Opens a tuple's `[` and skips leading whitespace, or signals `TooShort`.
fn open_tuple(bytes: &[u8]) -> Option<&[u8]> {
    let trimmed = skip_whitespace(bytes);
    let after_open = trimmed.strip_prefix(b"[")?;
    Some(skip_whitespace(after_open))
}

impl<A: Encode> Encode for (A,) {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        out.push(b'[');
        let encoded = encode_empty_as_null(&self.0, options, options.empty_encode_as_null.tuple);
        out.extend_from_slice(&encoded);
        out.push(b']');
    }
}

impl<A: Decode> Decode for (A,) {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let Some(rest) = open_tuple(bytes) else {
            return (Err(DecodeError::TooShort), original);
        };
        let (result, rest) = decode_null_as_empty::<A>(rest, options);
        let Ok(a) = result else {
            return (Err(DecodeError::TooShort), original);
        };
        let rest = skip_whitespace(rest);
        let Some(rest) = skip_extra_elements_and_close(rest) else {
            return (Err(DecodeError::TooShort), original);
        };
        (Ok((a,)), rest)
    }
}

macro_rules! encode_field {
    ($self:expr, $out:expr, $options:expr, $first:expr, $idx:tt) => {{
        let encoded = encode_empty_as_null(&$self.$idx, $options, $options.empty_encode_as_null.tuple);
        if !encoded.is_empty() {
            if !$first {
                $out.push(b',');
            }
            $first = false;
            $out.extend_from_slice(&encoded);
        }
    }};
}

macro_rules! decode_field {
    ($rest:expr, $options:expr, $ty:ident, $original:expr) => {{
        let (result, tail) = decode_null_as_empty::<$ty>($rest, $options);
        let Ok(value) = result else {
            return (Err(DecodeError::TooShort), $original);
        };
        $rest = skip_whitespace(tail);
        value
    }};
}

macro_rules! expect_comma {
    ($rest:expr, $original:expr) => {{
        let Some(after_comma) = $rest.strip_prefix(b",") else {
            return (Err(DecodeError::TooShort), $original);
        };
        $rest = skip_whitespace(after_comma);
    }};
}

impl<A: Encode, B: Encode> Encode for (A, B) {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        out.push(b'[');
        let mut first = true;
        encode_field!(self, out, options, first, 0);
        encode_field!(self, out, options, first, 1);
        out.push(b']');
    }
}

impl<A: Decode, B: Decode> Decode for (A, B) {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let Some(mut rest) = open_tuple(bytes) else {
            return (Err(DecodeError::TooShort), original);
        };
        let a = decode_field!(rest, options, A, original);
        expect_comma!(rest, original);
        let b = decode_field!(rest, options, B, original);
        let Some(rest) = skip_extra_elements_and_close(rest) else {
            return (Err(DecodeError::TooShort), original);
        };
        (Ok((a, b)), rest)
    }
}

impl<A: Encode, B: Encode, C: Encode> Encode for (A, B, C) {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        out.push(b'[');
        let mut first = true;
        encode_field!(self, out, options, first, 0);
        encode_field!(self, out, options, first, 1);
        encode_field!(self, out, options, first, 2);
        out.push(b']');
    }
}

impl<A: Decode, B: Decode, C: Decode> Decode for (A, B, C) {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let Some(mut rest) = open_tuple(bytes) else {
            return (Err(DecodeError::TooShort), original);
        };
        let a = decode_field!(rest, options, A, original);
        expect_comma!(rest, original);
        let b = decode_field!(rest, options, B, original);
        expect_comma!(rest, original);
        let c = decode_field!(rest, options, C, original);
        let Some(rest) = skip_extra_elements_and_close(rest) else {
            return (Err(DecodeError::TooShort), original);
        };
        (Ok((a, b, c)), rest)
    }
}

impl<A: Encode, B: Encode, C: Encode, D: Encode> Encode for (A, B, C, D) {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        out.push(b'[');
        let mut first = true;
        encode_field!(self, out, options, first, 0);
        encode_field!(self, out, options, first, 1);
        encode_field!(self, out, options, first, 2);
        encode_field!(self, out, options, first, 3);
        out.push(b']');
    }
}

impl<A: Decode, B: Decode, C: Decode, D: Decode> Decode for (A, B, C, D) {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let Some(mut rest) = open_tuple(bytes) else {
            return (Err(DecodeError::TooShort), original);
        };
        let a = decode_field!(rest, options, A, original);
        expect_comma!(rest, original);
        let b = decode_field!(rest, options, B, original);
        expect_comma!(rest, original);
        let c = decode_field!(rest, options, C, original);
        expect_comma!(rest, original);
        let d = decode_field!(rest, options, D, original);
        let Some(rest) = skip_extra_elements_and_close(rest) else {
            return (Err(DecodeError::TooShort), original);
        };
        (Ok((a, b, c, d)), rest)
    }
}
