use thiserror::Error;

/// The sole failure kind a decoder surfaces to its caller (spec §7).
///
/// Two other conditions documented in `SPEC_FULL.md` — invalid `\uXXXX` hex
/// digits and invalid UTF-8 produced by a case-mapping transform — are
/// deliberately *not* variants here: they're treated as programmer error
/// and panic instead of returning a value, the same distinction
/// `escape_buffer` draws between a malformed digit (an `Err`) and an
/// out-of-range scalar value (a panic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The decoder could not make progress on the given bytes: a scanner
    /// reached its `Invalid` state, a numeric parse failed, decoded string
    /// content failed UTF-8 validation, a required structural character was
    /// absent, or an unknown field appeared with `skip_missing_properties`
    /// disabled.
    #[error("too short")]
    TooShort,
}
