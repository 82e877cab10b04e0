//! Dynamic value AST (`SPEC_FULL.md` §C.5 supplement): a schemaless `Value`
//! for callers that want to decode arbitrary JSON without writing a
//! [`crate::record::RecordDecode`] implementation first.
//!
//! Objects are backed by a [`BTreeMap`] so that key order is deterministic
//! (alphabetical) rather than insertion order — the simplest ordering that
//! still makes encode output reproducible, at the cost of not preserving the
//! source's original key order. Decoding ignores no options at the
//! top-level `Value` boundary: field-name case mapping and the
//! null/empty rewrites are schema concerns (spec §4.8, §4.7) that only apply
//! once a field has a known target type, so a dynamic object decodes and
//! encodes its keys verbatim.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{Decode, DecodeError, Encode, Options, codec::skip_whitespace, object::decode_object, string_codec};

/// An object's field map, keyed by its external (on-the-wire) name.
pub type Map = BTreeMap<String, Value>;
/// An array of values.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259], with no attached schema.
///
/// # Examples
///
/// ```
/// use json_codec::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".into(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The JSON `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A JSON number, decoded to the widest float this codec supports.
    Number(f64),
    /// A JSON string, already unescaped.
    String(String),
    /// A JSON array.
    Array(Array),
    /// A JSON object, keyed by its unmapped external field names.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`](Value::Null).
    ///
    /// ```
    /// use json_codec::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`](Value::Boolean).
    ///
    /// ```
    /// use json_codec::Value;
    ///
    /// assert!(Value::Boolean(true).is_bool());
    /// assert!(!Value::Null.is_bool());
    /// ```
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    ///
    /// ```
    /// use json_codec::Value;
    ///
    /// assert!(Value::Number(42.0).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    ///
    /// ```
    /// use json_codec::Value;
    ///
    /// assert!(Value::String("foo".into()).is_string());
    /// assert!(!Value::Null.is_string());
    /// ```
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    ///
    /// ```
    /// use json_codec::Value;
    ///
    /// assert!(Value::Array(vec![Value::Null]).is_array());
    /// assert!(!Value::Null.is_array());
    /// ```
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    ///
    /// ```
    /// use json_codec::{Map, Value};
    ///
    /// let map = Map::new();
    /// let v = Value::Object(map);
    /// assert!(v.is_object());
    /// assert!(!Value::Null.is_object());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}

impl Encode for Value {
    fn encode(&self, out: &mut Vec<u8>, options: &Options) {
        match self {
            Value::Null => out.extend_from_slice(b"null"),
            Value::Boolean(b) => b.encode(out, options),
            Value::Number(n) => n.encode(out, options),
            Value::String(s) => string_codec::encode_str(s, out),
            Value::Array(items) => items.encode(out, options),
            Value::Object(map) => {
                out.push(b'{');
                let mut first = true;
                for (key, value) in map {
                    if !first {
                        out.push(b',');
                    }
                    first = false;
                    string_codec::encode_str(key, out);
                    out.push(b':');
                    value.encode(out, options);
                }
                out.push(b'}');
            }
        }
    }
}

impl Decode for Value {
    fn decode<'b>(bytes: &'b [u8], options: &Options) -> (Result<Self, DecodeError>, &'b [u8]) {
        let original = bytes;
        let trimmed = skip_whitespace(bytes);
        match trimmed.first() {
            Some(b'"') => {
                let (result, rest) = string_codec::decode_str(trimmed);
                match result {
                    Ok(s) => (Ok(Value::String(s)), rest),
                    Err(e) => (Err(e), original),
                }
            }
            Some(b'[') => {
                let (result, rest) = <Vec<Value>>::decode(trimmed, options);
                match result {
                    Ok(items) => (Ok(Value::Array(items)), rest),
                    Err(e) => (Err(e), original),
                }
            }
            Some(b'{') => {
                let mut map = Map::new();
                let (result, rest) = decode_object(
                    trimmed,
                    |name| name.into(),
                    |name, value_bytes| {
                        let (value_result, value_rest) = Value::decode(value_bytes, options);
                        match value_result {
                            Ok(value) => {
                                map.insert(name.into(), value);
                                (Ok(()), value_rest)
                            }
                            Err(e) => (Err(e), value_bytes),
                        }
                    },
                );
                match result {
                    Ok(()) => (Ok(Value::Object(map)), rest),
                    Err(e) => (Err(e), original),
                }
            }
            Some(b't' | b'f') => {
                let (result, rest) = bool::decode(trimmed, options);
                match result {
                    Ok(b) => (Ok(Value::Boolean(b)), rest),
                    Err(e) => (Err(e), original),
                }
            }
            Some(b'n') => {
                let (result, rest) = <()>::decode(trimmed, options);
                match result {
                    Ok(()) => (Ok(Value::Null), rest),
                    Err(e) => (Err(e), original),
                }
            }
            Some(b'-' | b'0'..=b'9') => {
                let (result, rest) = f64::decode(trimmed, options);
                match result {
                    Ok(n) => (Ok(Value::Number(n)), rest),
                    Err(e) => (Err(e), original),
                }
            }
            _ => (Err(DecodeError::TooShort), original),
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut out = Vec::new();
        self.encode(&mut out, &Options::default());
        // `Encode` only ever writes ASCII structural bytes, escaped string
        // content, and UTF-8 string bytes passed through verbatim, so the
        // buffer is always valid UTF-8.
        f.write_str(core::str::from_utf8(&out).unwrap_or_default())
    }
}
