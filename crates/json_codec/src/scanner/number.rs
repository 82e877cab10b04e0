//! Number scanner (spec §4.1): a state machine walking
//! `[-]? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`, with two
//! permissive extensions: a literal `+` in the exponent sign position, and
//! an uppercase `E`, both of which are normalized away before the numeric
//! parse.

use alloc::{borrow::Cow, string::String};

/// 21 bytes is sufficient for a 64-bit float; 128-bit integers near the
/// ~39-digit boundary are out of scope (spec §4.1), a deliberate design
/// choice rather than an oversight.
const MAX_NUMBER_LEN: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Minus,
    Zero,
    Integer,
    FractionA,
    FractionB,
    ExponentA,
    ExponentB,
    ExponentC,
}

fn is_terminator(b: u8) -> bool {
    matches!(b, b']' | b',' | b' ' | b'\n' | b'\r' | b'\t' | b'}')
}

fn is_accepting(state: State) -> bool {
    matches!(
        state,
        State::Zero | State::Integer | State::FractionB | State::ExponentC
    )
}

/// Scans a JSON number prefix. Returns the scanned byte length on success,
/// or `None` on `Invalid` (the caller surfaces `TooShort`).
pub(crate) fn scan_number(bytes: &[u8]) -> Option<usize> {
    use State::{ExponentA, ExponentB, ExponentC, FractionA, FractionB, Integer, Minus, Start, Zero};

    let mut state = Start;
    let mut i = 0usize;

    while i < bytes.len() && i < MAX_NUMBER_LEN {
        let b = bytes[i];
        state = match (state, b) {
            (Start, b'-') => Minus,
            (Start, b'0') | (Minus, b'0') => Zero,
            (Start, b'1'..=b'9') | (Minus, b'1'..=b'9') => Integer,
            (Integer, b'0'..=b'9') => Integer,
            (Zero | Integer, b'.') => FractionA,
            (FractionA, b'0'..=b'9') | (FractionB, b'0'..=b'9') => FractionB,
            (Zero | Integer | FractionB, b'e' | b'E') => ExponentA,
            (ExponentA, b'+' | b'-') => ExponentB,
            (ExponentA, b'0'..=b'9') | (ExponentB, b'0'..=b'9') | (ExponentC, b'0'..=b'9') => {
                ExponentC
            }
            (Zero | Integer | FractionB | ExponentC, _) if is_terminator(b) => {
                return is_accepting(state).then_some(i);
            }
            _ => return None,
        };
        i += 1;
    }

    is_accepting(state).then_some(i)
}

/// Strips the permissive `+` exponent sign and normalizes `E` to `e`,
/// borrowing the input unchanged when neither is present.
pub(crate) fn normalize_number(raw: &str) -> Cow<'_, str> {
    if raw.bytes().any(|b| b == b'+' || b == b'E') {
        let mut out = String::with_capacity(raw.len());
        for b in raw.bytes() {
            match b {
                b'+' => {}
                b'E' => out.push('e'),
                _ => out.push(b as char),
            }
        }
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}
