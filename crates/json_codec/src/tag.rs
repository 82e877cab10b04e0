//! Tag codec (spec §4.9, decoder added per `SPEC_FULL.md` §C.4): encodes a
//! tag `Name arg1 arg2 ...` as the single-field object
//! `{"Name":[arg1,arg2,...]}`.
//!
//! Decoding the argument list reuses a tuple's own [`Decode`] impl directly
//! (`crate::tuple`) rather than introducing a second stepping-protocol
//! trait: a tuple already knows how to parse its own `[...]` framing, and a
//! tag's arguments are exactly a tuple once the wrapping object is stripped.

use alloc::{string::String, vec::Vec};

use crate::{Decode, DecodeError, Encode, Options, codec::skip_whitespace, string_codec};

/// Encodes `name` (never case-mapped — spec §4.9 treats the tag name as an
/// opaque literal, not a schema field name) and `args` as
/// `{"name":[arg0,arg1,...]}`.
pub fn encode_tag(name: &str, args: &[&dyn Encode], out: &mut Vec<u8>, options: &Options) {
    out.push(b'{');
    string_codec::encode_str(name, out);
    out.push(b':');
    out.push(b'[');
    let mut first = true;
    for arg in args {
        if !first {
            out.push(b',');
        }
        first = false;
        arg.encode(out, options);
    }
    out.push(b']');
    out.push(b'}');
}

/// Decodes a tag's name and its argument tuple `T`, the inverse of
/// [`encode_tag`] (`SPEC_FULL.md` §C.4 — no inverse is specified by the base
/// spec, so this is the natural completion: a single-field object whose key
/// is the tag name and whose value is the argument array).
pub fn decode_tag<'b, T: Decode>(
    bytes: &'b [u8],
    options: &Options,
) -> (Result<(String, T), DecodeError>, &'b [u8]) {
    let original = bytes;
    let trimmed = skip_whitespace(bytes);
    let Some(after_open) = trimmed.strip_prefix(b"{") else {
        return (Err(DecodeError::TooShort), original);
    };
    let rest = skip_whitespace(after_open);
    let (name_result, rest) = string_codec::decode_str(rest);
    let Ok(name) = name_result else {
        return (Err(DecodeError::TooShort), original);
    };
    let rest = skip_whitespace(rest);
    let Some(after_colon) = rest.strip_prefix(b":") else {
        return (Err(DecodeError::TooShort), original);
    };

    let (args_result, args_rest) = T::decode(after_colon, options);
    let Ok(args) = args_result else {
        return (Err(DecodeError::TooShort), original);
    };
    let rest = skip_whitespace(args_rest);
    let Some(after_close) = rest.strip_prefix(b"}") else {
        return (Err(DecodeError::TooShort), original);
    };
    (Ok((name, args)), after_close)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn encodes_name_and_args() {
        let options = Options::default();
        let mut out = Vec::new();
        let a = 1u32;
        let b = true;
        encode_tag("Point", &[&a as &dyn Encode, &b as &dyn Encode], &mut out, &options);
        assert_eq!(out, br#"{"Point":[1,true]}"#.to_vec());
    }

    #[test]
    fn encodes_tag_with_no_args() {
        let options = Options::default();
        let mut out = Vec::new();
        encode_tag("Unit", &[], &mut out, &options);
        assert_eq!(out, br#"{"Unit":[]}"#.to_vec());
    }

    #[test]
    fn decodes_name_and_args() {
        let options = Options::default();
        let (result, rest) = decode_tag::<(u32, bool)>(br#"{"Point":[1,true]}"#, &options);
        assert_eq!(result, Ok(("Point".to_string(), (1, true))));
        assert!(rest.is_empty());
    }

    #[test]
    fn round_trips_through_encode_and_decode() {
        let options = Options::default();
        let mut out = Vec::new();
        let x = 7u32;
        let y = "hi".to_string();
        encode_tag("Msg", &[&x as &dyn Encode, &y as &dyn Encode], &mut out, &options);
        let (result, rest) = decode_tag::<(u32, String)>(&out, &options);
        assert_eq!(result, Ok(("Msg".to_string(), (7, "hi".to_string()))));
        assert!(rest.is_empty());
    }
}
