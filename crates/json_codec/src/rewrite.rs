//! Null-as-empty / empty-as-null rewriting (spec §4.7).

use alloc::vec::Vec;

use crate::{Decode, DecodeError, Options};

/// Applies the decode-side rewrite described in spec §4.7 around a
/// sub-decoder: if `options.null_decode_as_empty` is set and `bytes` begins
/// with the literal `null`, invokes `decode` on an **empty** slice and
/// returns the tail immediately after the four consumed bytes, regardless of
/// what the sub-decoder reports as its own `rest`. Otherwise `decode` sees
/// `bytes` unchanged.
pub(crate) fn decode_null_as_empty<'b, T: Decode>(
    bytes: &'b [u8],
    options: &Options,
) -> (Result<T, DecodeError>, &'b [u8]) {
    if options.null_decode_as_empty && bytes.starts_with(b"null") {
        let (result, _) = T::decode(&[], options);
        (result, &bytes[4..])
    } else {
        T::decode(bytes, options)
    }
}

/// The symmetric encode-side rewrite: encodes `value` into a scratch buffer;
/// if the result is empty, either rewrites it to the literal `null` (when
/// `emit_as_null` is set) or leaves it empty so the caller can omit the
/// element/field entirely (spec §4.3/§4.5/§4.7).
pub(crate) fn encode_empty_as_null<T: crate::Encode>(
    value: &T,
    options: &Options,
    emit_as_null: bool,
) -> Vec<u8> {
    let mut scratch = Vec::new();
    value.encode(&mut scratch, options);
    if scratch.is_empty() && emit_as_null {
        scratch.extend_from_slice(b"null");
    }
    scratch
}

/// The same rewrite as [`encode_empty_as_null`], for callers that only have
/// a trait object (record fields, tag arguments) rather than a single
/// concrete `T`.
pub(crate) fn encode_empty_as_null_dyn(
    value: &dyn crate::Encode,
    options: &Options,
    emit_as_null: bool,
) -> Vec<u8> {
    let mut scratch = Vec::new();
    value.encode(&mut scratch, options);
    if scratch.is_empty() && emit_as_null {
        scratch.extend_from_slice(b"null");
    }
    scratch
}
