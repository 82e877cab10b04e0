//! Utilities for buffering and decoding four-digit `\uXXXX` escape sequences.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates up to four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) and yields the 16-bit code unit they spell out
//! once exactly four digits have been provided. After a successful
//! conversion, the buffer resets automatically to begin a new escape
//! sequence.
//!
//! A code unit here is *not* necessarily a valid Unicode scalar value on its
//! own — it may be one half of a surrogate pair. `crate::string_codec`
//! decides how to turn one or two code units into bytes (spec §4.2, with the
//! surrogate-pair extension documented in `SPEC_FULL.md` §C.1).
use alloc::{format, string::String};

#[derive(Debug)]
/// Buffer for accumulating up to four hexadecimal digits (`0-9`, `A-F`,
/// `a-f`) and decoding them into a raw UTF-16 code unit.
pub(crate) struct UnicodeEscapeBuffer {
    buffer: [u8; 4],
    len: u8,
}

impl UnicodeEscapeBuffer {
    /// Creates a new, empty `UnicodeEscapeBuffer`.
    pub fn new() -> Self {
        Self {
            buffer: [0; 4],
            len: 0,
        }
    }

    /// Clears any accumulated digits, returning the buffer to its initial
    /// state.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Feeds a single ASCII hexadecimal digit into the buffer.
    ///
    /// Returns `Ok(None)` until four digits have accumulated, then
    /// `Ok(Some(code_unit))` and resets. Per spec §6/§7, a non-hex digit is a
    /// hard failure in the host, not a recoverable `TooShort` — callers are
    /// expected to `.expect()` or panic on `Err`.
    pub fn feed(&mut self, c: char) -> Result<Option<u32>, String> {
        if !c.is_ascii_hexdigit() {
            return Err(format!("invalid unicode escape digit: {c}"));
        }

        debug_assert!(self.len < 4, "UnicodeEscapeBuffer fed past 4 digits");
        self.buffer[self.len as usize] = c as u8;
        self.len += 1;

        if self.len == 4 {
            let hex_str =
                core::str::from_utf8(&self.buffer).expect("buffer only ever holds ASCII hex");
            let code = u32::from_str_radix(hex_str, 16)
                .expect("four ASCII hex digits always parse as u32");
            self.reset();
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }
}
