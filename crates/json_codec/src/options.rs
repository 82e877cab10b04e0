#![allow(clippy::struct_excessive_bools)]

use alloc::string::{String, ToString};

use crate::case;

/// How external object keys are rewritten to/from internal (assumed
/// camelCase) field names (spec §3, §4.8).
///
/// `Custom` carries a pair of function pointers, `(internal_to_external,
/// external_to_internal)`, rather than a boxed closure, so that [`Options`]
/// stays `Copy` and can be threaded through every encode/decode call by
/// value, matching the "immutable, freely shareable" guarantee of §3's
/// invariants and §5's concurrency model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNameMapping {
    /// Field names are used verbatim; equivalent to [`FieldNameMapping::CamelCase`]
    /// since internal names are assumed to already be camelCase.
    Default,
    /// `snake_case` external names.
    SnakeCase,
    /// `PascalCase` external names.
    PascalCase,
    /// `kebab-case` external names.
    KebabCase,
    /// `camelCase` external names (the identity mapping).
    CamelCase,
    /// A caller-supplied pair of transforms.
    Custom(fn(&str) -> String, fn(&str) -> String),
}

impl Default for FieldNameMapping {
    fn default() -> Self {
        Self::Default
    }
}

/// Per-container policy for rewriting an empty sub-encoder output to the
/// literal `null` (spec §3, §4.7).
///
/// # Default
///
/// `{ list: false, tuple: true, record: true }`, per spec §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyEncodeAsNull {
    /// Applies to list elements.
    pub list: bool,
    /// Applies to tuple elements.
    pub tuple: bool,
    /// Applies to record fields.
    pub record: bool,
}

impl Default for EmptyEncodeAsNull {
    fn default() -> Self {
        Self {
            list: false,
            tuple: true,
            record: true,
        }
    }
}

/// The immutable configuration handle threaded through every encode and
/// decode call (spec §3).
///
/// # Examples
///
/// ```rust
/// use json_codec::{FieldNameMapping, Options};
///
/// let options = Options {
///     field_name_mapping: FieldNameMapping::PascalCase,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Bidirectional rewriting between external object keys and internal
    /// field names.
    pub field_name_mapping: FieldNameMapping,
    /// When `true`, unknown object fields are scanned and discarded via the
    /// skip-value scanner; when `false`, an unknown field fails the whole
    /// record decode.
    ///
    /// # Default
    ///
    /// `true`
    pub skip_missing_properties: bool,
    /// When `true`, a literal `null` where a value is expected is rewritten
    /// to an empty byte sequence before being handed to the sub-decoder.
    ///
    /// # Default
    ///
    /// `true`
    pub null_decode_as_empty: bool,
    /// Per-container policy for rewriting an empty sub-encoder output to
    /// `null` on encode.
    pub empty_encode_as_null: EmptyEncodeAsNull,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            field_name_mapping: FieldNameMapping::default(),
            skip_missing_properties: true,
            null_decode_as_empty: true,
            empty_encode_as_null: EmptyEncodeAsNull::default(),
        }
    }
}

impl Options {
    /// Rewrites an internal (camelCase) field name to its external
    /// representation for encoding (spec §4.8).
    #[must_use]
    pub fn internal_to_external(&self, name: &str) -> String {
        match self.field_name_mapping {
            FieldNameMapping::Default | FieldNameMapping::CamelCase => name.to_string(),
            FieldNameMapping::SnakeCase => case::camel_to_snake(name),
            FieldNameMapping::PascalCase => case::toggle_first_char_case(name),
            FieldNameMapping::KebabCase => case::camel_to_kebab(name),
            FieldNameMapping::Custom(encode, _decode) => encode(name),
        }
    }

    /// Rewrites an external field name back to its internal (camelCase)
    /// representation for decoding (spec §4.8).
    #[must_use]
    pub fn external_to_internal(&self, name: &str) -> String {
        match self.field_name_mapping {
            FieldNameMapping::Default | FieldNameMapping::CamelCase => name.to_string(),
            FieldNameMapping::SnakeCase => case::snake_to_camel(name),
            FieldNameMapping::PascalCase => case::toggle_first_char_case(name),
            FieldNameMapping::KebabCase => case::kebab_to_camel(name),
            FieldNameMapping::Custom(_encode, decode) => decode(name),
        }
    }
}
