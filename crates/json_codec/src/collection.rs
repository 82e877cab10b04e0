//! List codec (spec §4.3): `Vec<T>` encode/decode, including whitespace
//! skipping and the `emptyEncodeAsNull.list` policy.

use alloc::vec::Vec;

use crate::{
    Decode, DecodeError, Encode, Options,
    codec::skip_whitespace,
    rewrite::{decode_null_as_empty, encode_empty_as_null},
};

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        out.push(b'[');
        let mut first = true;
        for item in self {
            let encoded = encode_empty_as_null(item, options, options.empty_encode_as_null.list);
            if encoded.is_empty() {
                continue;
            }
            if !first {
                out.push(b',');
            }
            first = false;
            out.extend_from_slice(&encoded);
        }
        out.push(b']');
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let mut rest = skip_whitespace(bytes);
        let Some(after_open) = rest.strip_prefix(b"[") else {
            return (Err(DecodeError::TooShort), original);
        };
        rest = skip_whitespace(after_open);
        if let Some(after_close) = rest.strip_prefix(b"]") {
            return (Ok(Vec::new()), after_close);
        }

        let mut items = Vec::new();
        loop {
            let (result, tail) = decode_null_as_empty::<T>(rest, options);
            let Ok(value) = result else {
                return (Err(DecodeError::TooShort), original);
            };
            items.push(value);
            rest = skip_whitespace(tail);
            match rest.first() {
                Some(b',') => {
                    rest = skip_whitespace(&rest[1..]);
                }
                Some(b']') => {
                    return (Ok(items), &rest[1..]);
                }
                _ => return (Err(DecodeError::TooShort), original),
            }
        }
    }
}
