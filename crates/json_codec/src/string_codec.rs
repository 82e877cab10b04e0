//! String encode/decode (spec §4.2, "Decoding" and "Encoding").
//!
//! Framing (finding where the string literal ends) lives in
//! `crate::scanner::string`; this module owns turning the framed bytes into
//! a `String` and back.

use alloc::{string::String, vec::Vec};

use crate::{
    Decode, DecodeError, Encode, Options,
    codec::skip_whitespace,
    escape_buffer::UnicodeEscapeBuffer,
    scanner::scan_string,
};

/// Bytes that force the escaping slow path on encode (spec §4.2, "Encoding").
fn needs_escaping(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|&b| matches!(b, b'"' | b'\\' | b'/' | 0x08 | 0x0A | 0x0C | 0x0D | 0x09))
}

/// `0x09` (tab) is intentionally mapped to `\t` here, not the `\r` the
/// normative table in spec §4.2 literally specifies — §9's Open Questions
/// names that table entry a defect and instructs implementers to emit `\t`,
/// which is what the *decode* direction already does. See `DESIGN.md`.
fn push_short_escape(out: &mut Vec<u8>, byte: u8) -> bool {
    let escape: &[u8] = match byte {
        b'"' => b"\\\"",
        b'\\' => b"\\\\",
        b'/' => b"\\/",
        0x08 => b"\\b",
        0x0C => b"\\f",
        0x0A => b"\\n",
        0x0D => b"\\r",
        0x09 => b"\\t",
        _ => return false,
    };
    out.extend_from_slice(escape);
    true
}

/// Encodes a string value as a JSON string literal (spec §4.2, "Encoding").
pub(crate) fn encode_str(value: &str, out: &mut Vec<u8>) {
    let bytes = value.as_bytes();
    out.push(b'"');
    if needs_escaping(bytes) {
        // ~120% of input length, per spec.
        out.reserve(bytes.len() + bytes.len() / 5 + 2);
        for &b in bytes {
            if !push_short_escape(out, b) {
                out.push(b);
            }
        }
    } else {
        out.extend_from_slice(bytes);
    }
    out.push(b'"');
}

/// Decodes a JSON string literal at the start of `bytes` (spec §4.2,
/// "Decoding"). Returns the decoded `String` and the unconsumed tail.
pub(crate) fn decode_str(bytes: &[u8]) -> (Result<String, DecodeError>, &[u8]) {
    let Some((consumed, has_escapes)) = scan_string(bytes) else {
        return (Err(DecodeError::TooShort), bytes);
    };
    let literal = &bytes[1..consumed - 1];
    let rest = &bytes[consumed..];

    if !has_escapes {
        return match core::str::from_utf8(literal) {
            Ok(s) => (Ok(String::from(s)), rest),
            Err(_) => (Err(DecodeError::TooShort), bytes),
        };
    }

    match unescape(literal) {
        Some(decoded_bytes) => match String::from_utf8(decoded_bytes) {
            Ok(s) => (Ok(s), rest),
            Err(_) => (Err(DecodeError::TooShort), bytes),
        },
        None => (Err(DecodeError::TooShort), bytes),
    }
}

/// Rewrites escape sequences in a string literal's interior (quotes already
/// stripped) to raw bytes (spec §4.2, normative short-escape table, plus the
/// `\uXXXX` policy and its surrogate-pair extension from `SPEC_FULL.md`
/// §C.1). Returns `None` only if the literal contains a structurally
/// impossible escape — `scan_string` already rejected everything else, so in
/// practice this never happens for input that reached this function.
fn unescape(literal: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(literal.len());
    let mut i = 0;
    while i < literal.len() {
        let b = literal[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        let esc = *literal.get(i + 1)?;
        match esc {
            b'"' => {
                out.push(0x22);
                i += 2;
            }
            b'\\' => {
                out.push(0x5C);
                i += 2;
            }
            b'/' => {
                out.push(0x2F);
                i += 2;
            }
            b'b' => {
                out.push(0x08);
                i += 2;
            }
            b'f' => {
                out.push(0x0C);
                i += 2;
            }
            b'n' => {
                out.push(0x0A);
                i += 2;
            }
            b'r' => {
                out.push(0x0D);
                i += 2;
            }
            b't' => {
                out.push(0x09);
                i += 2;
            }
            b'u' => {
                let unit = read_code_unit(literal, i + 2)?;
                i += 6;
                if is_high_surrogate(unit) && literal[i..].starts_with(b"\\u") {
                    let low = read_code_unit(literal, i + 2)?;
                    if is_low_surrogate(low) {
                        let scalar =
                            0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        let ch = char::from_u32(scalar)
                            .expect("surrogate pair recomposition always yields a valid scalar");
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        i += 6;
                        continue;
                    }
                }
                push_raw_code_unit(&mut out, unit);
            }
            other => {
                panic!("invalid unicode escape character: {}", other as char);
            }
        }
    }
    Some(out)
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Reads exactly four hex digits starting at `literal[start]` via
/// [`UnicodeEscapeBuffer`], feeding them one at a time. Panics (per spec
/// §6/§7, a documented hard failure) if any digit is not ASCII hex.
fn read_code_unit(literal: &[u8], start: usize) -> Option<u32> {
    let mut buf = UnicodeEscapeBuffer::new();
    let mut result = None;
    for &b in literal.get(start..start + 4)? {
        let c = char::from(b);
        result = buf
            .feed(c)
            .unwrap_or_else(|msg| panic!("{msg}"));
    }
    result
}

/// The non-UTF-16 raw policy from spec §4.2: code points `<= 0x00FF` emit one
/// byte; otherwise emit two bytes, the high and low nibble-pairs of the
/// 16-bit code unit. This intentionally does not produce valid UTF-8 for
/// arbitrary mid-range code units — the caller validates the final byte
/// sequence as UTF-8 and surfaces `TooShort` on failure, exactly as
/// documented.
fn push_raw_code_unit(out: &mut Vec<u8>, unit: u32) {
    if unit <= 0x00FF {
        out.push(unit as u8);
    } else {
        out.push((unit >> 8) as u8);
        out.push((unit & 0xFF) as u8);
    }
}

impl Encode for String {
    fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
        encode_str(self, out);
    }
}

impl Decode for String {
    fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        if bytes.is_empty() {
            return (Err(DecodeError::TooShort), bytes);
        }
        decode_str(bytes)
    }
}

/// Skips leading whitespace before framing a string value; exposed for
/// sibling modules (list/tuple/record element decoding) that need the same
/// "value decoders receive input starting at the first non-whitespace byte"
/// rule (spec §3).
pub(crate) fn skip_ws_then_decode_str(bytes: &[u8]) -> (Result<String, DecodeError>, &[u8]) {
    let trimmed = skip_whitespace(bytes);
    let (result, rest) = decode_str(trimmed);
    match result {
        Ok(v) => (Ok(v), rest),
        Err(e) => (Err(e), bytes),
    }
}
