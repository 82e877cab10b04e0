//! String scanner (spec §4.2, "Scanning"): frames a JSON string literal,
//! validating escape syntax without decoding it. Decoding (escape rewriting,
//! `\uXXXX` recomposition) is a separate concern, in `crate::string_codec`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Chars,
    Escaped,
    UnicodeA,
    UnicodeB,
    UnicodeC,
    UnicodeD,
}

/// Scans a JSON string literal starting at `bytes[0]`. Returns
/// `(consumed_len, has_escapes)` on success, including both quotes in
/// `consumed_len`. Returns `None` on `Invalid` (the caller surfaces
/// `TooShort`).
pub(crate) fn scan_string(bytes: &[u8]) -> Option<(usize, bool)> {
    use State::{Chars, Escaped, Start, UnicodeA, UnicodeB, UnicodeC, UnicodeD};

    let mut state = Start;
    let mut i = 0usize;
    let mut has_escapes = false;

    loop {
        let b = *bytes.get(i)?;
        match state {
            Start => {
                if b != b'"' {
                    return None;
                }
                state = Chars;
                i += 1;
            }
            Chars => match b {
                b'"' => return Some((i + 1, has_escapes)),
                b'\\' => {
                    has_escapes = true;
                    state = Escaped;
                    i += 1;
                }
                _ => i += 1,
            },
            Escaped => match b {
                b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                    state = Chars;
                    i += 1;
                }
                b'u' => {
                    state = UnicodeA;
                    i += 1;
                }
                _ => return None,
            },
            UnicodeA | UnicodeB | UnicodeC | UnicodeD => {
                if !b.is_ascii_hexdigit() {
                    return None;
                }
                state = match state {
                    UnicodeA => UnicodeB,
                    UnicodeB => UnicodeC,
                    UnicodeC => UnicodeD,
                    UnicodeD => Chars,
                    _ => unreachable!(),
                };
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_plain_string() {
        assert_eq!(scan_string(br#""hello""#), Some((7, false)));
    }

    #[test]
    fn scans_escapes() {
        assert_eq!(scan_string(br#""h\"llo""#), Some((8, true)));
        assert_eq!(scan_string(br#""h\u0065llo""#), Some((12, true)));
    }

    #[test]
    fn rejects_bad_escape() {
        assert_eq!(scan_string(br#""h\qllo""#), None);
    }

    #[test]
    fn rejects_bad_unicode_hex() {
        assert_eq!(scan_string(br#""h\u00zzllo""#), None);
    }

    #[test]
    fn rejects_unterminated_string() {
        assert_eq!(scan_string(br#""hello"#), None);
    }

    #[test]
    fn rejects_non_string_input() {
        assert_eq!(scan_string(b"123"), None);
    }
}
