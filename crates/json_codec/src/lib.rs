//! A configurable, schema-driven JSON encoder/decoder.
//!
//! This crate implements JSON (per [RFC 8259]) encoding and decoding for
//! Rust types via the composable [`Encode`]/[`Decode`] traits, rather than
//! a single monolithic parser: primitives, strings, lists, tuples,
//! records, and tagged unions each own a small codec module, and
//! [`Options`] governs the handful of cross-cutting policies (field-name
//! case mapping, `null`/empty rewriting, unknown-field handling) that apply
//! across all of them.
//!
//! Records have no derive macro here — spec's "code generation from record
//! type definitions" is left to the host, so implement
//! [`RecordDecode`]/[`RecordEncode`] by hand for each record type, or
//! decode into the dynamic [`Value`] when the shape isn't known ahead of
//! time.
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::vec::Vec;

mod case;
mod codec;
mod collection;
mod error;
mod escape_buffer;
mod object;
mod options;
mod primitive;
mod record;
mod rewrite;
mod scanner;
mod string_codec;
mod tag;
mod tuple;
mod value;

pub use codec::{Decode, Encode, FnEncoder, decode_fn};
pub use error::DecodeError;
pub use options::{EmptyEncodeAsNull, FieldNameMapping, Options};
#[cfg(not(feature = "decimal"))]
pub use primitive::fallback_decimal::Decimal;
pub use record::{RecordDecode, RecordEncode, decode_record, encode_record};
#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;
pub use tag::{decode_tag, encode_tag};
pub use value::{Array, Map, Value};

/// Encodes `value` to a fresh byte buffer under `options` (spec §6's
/// `encode` entry point).
pub fn encode<T: Encode>(value: &T, options: &Options) -> Vec<u8> {
    let mut out = Vec::new();
    value.encode(&mut out, options);
    out
}

/// Decodes a `T` from the front of `bytes` under `options` (spec §6's
/// `decode` entry point). Returns the decoded value and the unconsumed
/// tail, or [`DecodeError::TooShort`] and `bytes` unchanged.
pub fn decode<'b, T: Decode>(
    bytes: &'b [u8],
    options: &Options,
) -> (Result<T, DecodeError>, &'b [u8]) {
    T::decode(bytes, options)
}
