//! Record codec (spec §4.5): schema-driven object decode/encode via the
//! caller-supplied stepping protocol.
//!
//! Spec §9's design notes offer two ways to model the stepping function in
//! a systems language: "(a) a small enum `StepResult = Keep(decoderHandle) |
//! Skip` plus an opaque record state, or (b) a trait/interface with
//! `step_field(&mut self, name:&str) -> StepResult` and `finalize(self) ->
//! Result<T, E>`." [`RecordDecode`] follows (b), adapted so `step_field`
//! decodes directly into the accumulated state instead of returning a
//! separate decoder handle — returning `Some` after that decode *is* the
//! `Keep` branch, `None` is `Skip` — since a boxed decoder-per-field adds an
//! allocation and a lifetime knot for no behavioral difference here.

use alloc::vec::Vec;

use crate::{
    DecodeError, Encode, Options,
    object::decode_object,
    rewrite::encode_empty_as_null_dyn,
    scanner::skip_value,
};

/// Implemented by hand (or by generated code — spec §9 leaves "code
/// generation from record type definitions" to the host) for every record
/// type this codec decodes.
pub trait RecordDecode: Sized {
    /// Per-decode mutable state accumulated while stepping through fields.
    type State: Default;

    /// Given the accumulated `state` and an *internal* (already
    /// case-mapped, spec §4.8) field name, decides whether this record
    /// recognizes `name`. `Some` decodes the value at the front of `bytes`
    /// directly into `state` and returns the tail (the `Keep` branch);
    /// `None` lets [`decode_record`] apply `skip_missing_properties` itself
    /// (the `Skip` branch).
    ///
    /// `bytes` has already had the null-as-empty rewrite (spec §4.7)
    /// applied by the caller when recognized, so implementations can
    /// decode their field type directly without re-checking for `null`.
    fn step_field<'b>(
        state: &mut Self::State,
        name: &str,
        bytes: &'b [u8],
        options: &Options,
    ) -> Option<(Result<(), DecodeError>, &'b [u8])>;

    /// Assembles the final record once the closing `}` is reached (spec
    /// §4.5 step 6). Any error here propagates as the overall decode's
    /// failure.
    fn finalize(state: Self::State, options: &Options) -> Result<Self, DecodeError>;
}

/// Generic record decoder: drives any [`RecordDecode`] implementor through
/// the shared object scanner (`crate::object`), spec §4.5.
pub fn decode_record<'b, R: RecordDecode>(
    bytes: &'b [u8],
    options: &Options,
) -> (Result<R, DecodeError>, &'b [u8]) {
    let original = bytes;
    let mut state = R::State::default();

    let (result, rest) = decode_object(
        bytes,
        |name| options.external_to_internal(name),
        |name, value_bytes| {
            let stepped = if options.null_decode_as_empty && value_bytes.starts_with(b"null") {
                R::step_field(&mut state, name, &[], options)
                    .map(|(res, _)| (res, &value_bytes[4..]))
            } else {
                R::step_field(&mut state, name, value_bytes, options)
            };
            match stepped {
                Some(outcome) => outcome,
                None if options.skip_missing_properties => match skip_value(value_bytes) {
                    Some(len) => (Ok(()), &value_bytes[len..]),
                    None => (Err(DecodeError::TooShort), value_bytes),
                },
                None => (Err(DecodeError::TooShort), value_bytes),
            }
        },
    );

    match result {
        Ok(()) => match R::finalize(state, options) {
            Ok(value) => (Ok(value), rest),
            Err(e) => (Err(e), original),
        },
        Err(e) => (Err(e), original),
    }
}

/// Implemented by hand for every record type this codec encodes: yields
/// `(internal_field_name, value)` pairs in caller-presentation order (spec
/// §4.5, "Field order is the caller's order of presentation").
pub trait RecordEncode {
    /// Returns this record's fields in presentation order.
    fn fields(&self) -> Vec<(&str, &dyn Encode)>;
}

/// Generic record encoder for any [`RecordEncode`] implementor (spec §4.5,
/// "Encode").
pub fn encode_record<R: RecordEncode>(value: &R, out: &mut Vec<u8>, options: &Options) {
    out.push(b'{');
    let mut first = true;
    for (name, field_value) in value.fields() {
        let encoded =
            encode_empty_as_null_dyn(field_value, options, options.empty_encode_as_null.record);
        if encoded.is_empty() {
            continue;
        }
        if !first {
            out.push(b',');
        }
        first = false;
        out.push(b'"');
        out.extend_from_slice(options.internal_to_external(name).as_bytes());
        out.extend_from_slice(b"\":");
        out.extend_from_slice(&encoded);
    }
    out.push(b'}');
}
