//! The `Encode`/`Decode` composition traits (spec §6's "framework
//! collaborators").
//!
//! `spec.md` treats the generic encoder/decoder framework as a host-runtime
//! collaborator and specifies only the interface it exposes. In this crate
//! that interface is these two traits: every encodable type implements
//! [`Encode`], every decodable type implements [`Decode`], and record/tuple
//! types additionally implement the stepping-protocol traits in
//! `crate::record`.

use alloc::vec::Vec;

use crate::{DecodeError, Options};

/// Appends the JSON encoding of `self` to `out`, under `options`.
///
/// Encoding is total (spec §3's invariants): an `Encode` impl never fails
/// and never writes partial output — either it appends a complete,
/// self-contained value, or (for list/tuple/record elements that resolve to
/// "empty", spec §4.7) it appends nothing, leaving the empty-to-null /
/// omit-the-element decision to the parent container.
pub trait Encode {
    /// Appends `self`'s encoding to `out`.
    fn encode(&self, out: &mut Vec<u8>, options: &Options);
}

/// Decodes a value of `Self` from the front of `bytes`, under `options`.
///
/// Returns the parsed value (or [`DecodeError::TooShort`]) paired with the
/// unconsumed suffix of `bytes`. On failure `rest` is exactly `bytes`
/// unchanged (spec §3's invariants: "a decoder never advances past bytes it
/// failed to consume").
pub trait Decode: Sized {
    /// Decodes a prefix of `bytes` into `Self`.
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]);
}

/// Constructs a composable [`Encode`] impl from a plain function, mirroring
/// the `custom-encoder` constructor spec §6 asks the host runtime to supply.
pub struct FnEncoder<F>(pub F)
where
    F: Fn(&mut Vec<u8>, &Options);

impl<F> Encode for FnEncoder<F>
where
    F: Fn(&mut Vec<u8>, &Options),
{
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        (self.0)(out, options);
    }
}

/// Invokes a one-off decoder function directly — the `custom-decoder`
/// constructor spec §6 asks the host runtime to supply, modeled as a plain
/// higher-order function rather than a wrapper type since Rust closures are
/// already composable values.
pub fn decode_fn<'b, T>(
    bytes: &'b [u8],
    options: &Options,
    f: impl Fn(&'b [u8], &Options) -> (Result<T, DecodeError>, &'b [u8]),
) -> (Result<T, DecodeError>, &'b [u8]) {
    f(bytes, options)
}

/// Skips leading JSON insignificant whitespace (spec §3: "whitespace between
/// structural tokens is consumed by the parent scanner").
pub(crate) fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let mut i = 0;
    while let Some(b) = bytes.get(i) {
        if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
            i += 1;
        } else {
            break;
        }
    }
    &bytes[i..]
}
