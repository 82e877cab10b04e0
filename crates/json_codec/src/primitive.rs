//! Primitive codec (spec §4.1 and spec §2's "Primitive codec" row): bool,
//! null, and every supported integer/float width.
//!
//! Every numeric decoder shares the number scanner (`crate::scanner::number`)
//! for framing and `crate::scanner::number::normalize_number` for stripping
//! the two permissive extensions (`+` in the exponent, uppercase `E`) before
//! handing the normalized ASCII slice to the host's `str -> number`
//! primitive (spec §6, "Primitive parse functions").

use alloc::{string::ToString, vec::Vec};

use crate::{
    Decode, DecodeError, Encode, Options,
    codec::skip_whitespace,
    scanner::{normalize_number, scan_number},
};

impl Encode for bool {
    fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
        out.extend_from_slice(if *self { b"true" } else { b"false" });
    }
}

impl Decode for bool {
    fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let trimmed = skip_whitespace(bytes);
        if trimmed.starts_with(b"true") {
            (Ok(true), &trimmed[4..])
        } else if trimmed.starts_with(b"false") {
            (Ok(false), &trimmed[5..])
        } else {
            (Err(DecodeError::TooShort), bytes)
        }
    }
}

/// The JSON `null` literal, decoded/encoded as `()`. Distinct from
/// "absence": callers who want absence-or-null to collapse to one state use
/// `Option<T>` with `null_decode_as_empty` (spec §4.7), not this type
/// directly.
impl Encode for () {
    fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
        out.extend_from_slice(b"null");
    }
}

impl Decode for () {
    fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let trimmed = skip_whitespace(bytes);
        if trimmed.starts_with(b"null") {
            (Ok(()), &trimmed[4..])
        } else {
            (Err(DecodeError::TooShort), bytes)
        }
    }
}

/// An absent or `null` value decodes to `None`; any other value decodes to
/// `Some` via `T`'s own decoder (spec §4.7's null-as-empty policy, applied
/// generically: `crate::rewrite::decode_null_as_empty` rewrites `null` to an
/// empty slice before reaching here, and `Option<T>::decode` is what turns
/// "empty" into `None`).
impl<T: Decode> Decode for Option<T> {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let trimmed = skip_whitespace(bytes);
        if trimmed.is_empty() {
            return (Ok(None), trimmed);
        }
        let (result, rest) = T::decode(trimmed, options);
        (result.map(Some), rest)
    }
}

/// `None` encodes to nothing (an empty sub-encoder output), which the
/// surrounding list/tuple/record codec then applies its empty-to-null policy
/// to (spec §4.7); `Some` delegates to `T`.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        if let Some(value) = self {
            value.encode(out, options);
        }
    }
}

macro_rules! impl_integer_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
                    out.extend_from_slice(self.to_string().as_bytes());
                }
            }

            impl Decode for $ty {
                fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
                    let trimmed = skip_whitespace(bytes);
                    let Some(len) = scan_number(trimmed) else {
                        return (Err(DecodeError::TooShort), bytes);
                    };
                    let (slice, rest) = trimmed.split_at(len);
                    let Ok(text) = core::str::from_utf8(slice) else {
                        return (Err(DecodeError::TooShort), bytes);
                    };
                    match text.parse::<$ty>() {
                        Ok(v) => (Ok(v), rest),
                        Err(_) => (Err(DecodeError::TooShort), bytes),
                    }
                }
            }
        )+
    };
}

impl_integer_codec!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_float_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Encode for $ty {
                fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
                    // The host's default decimal textual representation,
                    // no localization or thousands separators (spec §4.1,
                    // "Encoders").
                    out.extend_from_slice(self.to_string().as_bytes());
                }
            }

            impl Decode for $ty {
                fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
                    let trimmed = skip_whitespace(bytes);
                    let Some(len) = scan_number(trimmed) else {
                        return (Err(DecodeError::TooShort), bytes);
                    };
                    let (slice, rest) = trimmed.split_at(len);
                    let Ok(text) = core::str::from_utf8(slice) else {
                        return (Err(DecodeError::TooShort), bytes);
                    };
                    let normalized = normalize_number(text);
                    match normalized.parse::<$ty>() {
                        Ok(v) => (Ok(v), rest),
                        Err(_) => (Err(DecodeError::TooShort), bytes),
                    }
                }
            }
        )+
    };
}

impl_float_codec!(f32, f64);

#[cfg(feature = "decimal")]
mod decimal {
    use alloc::string::ToString;

    use rust_decimal::Decimal;

    use super::{
        Decode, DecodeError, Encode, Options, normalize_number, scan_number, skip_whitespace,
    };
    use alloc::vec::Vec;

    impl Encode for Decimal {
        fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
            out.extend_from_slice(self.to_string().as_bytes());
        }
    }

    impl Decode for Decimal {
        fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
            let trimmed = skip_whitespace(bytes);
            let Some(len) = scan_number(trimmed) else {
                return (Err(DecodeError::TooShort), bytes);
            };
            let (slice, rest) = trimmed.split_at(len);
            let Ok(text) = core::str::from_utf8(slice) else {
                return (Err(DecodeError::TooShort), bytes);
            };
            let normalized = normalize_number(text);
            match normalized.parse::<Decimal>() {
                Ok(v) => (Ok(v), rest),
                Err(_) => (Err(DecodeError::TooShort), bytes),
            }
        }
    }
}

#[cfg(not(feature = "decimal"))]
pub mod fallback_decimal {
    //! A crate-local low-precision fallback used in place of `rust_decimal`
    //! when the `decimal` feature is disabled (spec's "fixed-point decimal
    //! primitive", `SPEC_FULL.md` §A). Stores the value as a scaled `i64`
    //! (`mantissa * 10^-scale`), which covers the common case (money-like
    //! values) without pulling in the full `rust_decimal` dependency.
    use alloc::{format, string::ToString, vec::Vec};

    use super::{Decode, DecodeError, Encode, Options, normalize_number, scan_number, skip_whitespace};

    /// A low-precision fixed-point decimal: `mantissa * 10^-scale`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Decimal {
        /// The unscaled integer value.
        pub mantissa: i64,
        /// Number of digits after the decimal point.
        pub scale: u8,
    }

    impl Encode for Decimal {
        fn encode(&self, out: &mut Vec<u8>, _options: &Options) {
            if self.scale == 0 {
                out.extend_from_slice(self.mantissa.to_string().as_bytes());
                return;
            }
            let negative = self.mantissa < 0;
            let digits = self.mantissa.unsigned_abs().to_string();
            let scale = usize::from(self.scale);
            let padded = if digits.len() <= scale {
                let mut s = "0".repeat(scale - digits.len() + 1);
                s.push_str(&digits);
                s
            } else {
                digits
            };
            let split_at = padded.len() - scale;
            if negative {
                out.push(b'-');
            }
            out.extend_from_slice(padded[..split_at].as_bytes());
            out.push(b'.');
            out.extend_from_slice(padded[split_at..].as_bytes());
        }
    }

    impl Decode for Decimal {
        fn decode<'b>(bytes: &'b [u8], _options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
            let trimmed = skip_whitespace(bytes);
            let Some(len) = scan_number(trimmed) else {
                return (Err(DecodeError::TooShort), bytes);
            };
            let (slice, rest) = trimmed.split_at(len);
            let Ok(text) = core::str::from_utf8(slice) else {
                return (Err(DecodeError::TooShort), bytes);
            };
            let normalized = normalize_number(text);
            if normalized.contains(['e', 'E']) {
                // Exponents are out of scope for the low-precision fallback.
                return (Err(DecodeError::TooShort), bytes);
            }
            let negative = normalized.starts_with('-');
            let unsigned = normalized.strip_prefix('-').unwrap_or(&normalized);
            let (int_part, frac_part) = match unsigned.split_once('.') {
                Some((i, f)) => (i, f),
                None => (unsigned, ""),
            };
            let Ok(mut mantissa) = format!("{int_part}{frac_part}").parse::<i64>() else {
                return (Err(DecodeError::TooShort), bytes);
            };
            if negative {
                mantissa = -mantissa;
            }
            let Ok(scale) = u8::try_from(frac_part.len()) else {
                return (Err(DecodeError::TooShort), bytes);
            };
            (Ok(Decimal { mantissa, scale }), rest)
        }
    }
}
