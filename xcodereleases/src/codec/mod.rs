//! Encoding and decoding of records to and from JSON.
//!
//! Every type of the data model implements [`Record`] and can be decoded from, or
//! encoded to, its own JSON document. This allows decoding a single [`Link`] embedded
//! in a larger document defined elsewhere just like decoding a whole
//! [`XcodeReleases`] document.
//!
//! Decoding is strict on required fields and on the shape of values, it reports the
//! first error found along with the path of the faulty field, such as
//! `links[0].kind.name`. Optional fields may be absent or null, unknown fields are
//! ignored. Encoding omits absent optional fields entirely and never fails.
//!
//! [`Link`]: crate::Link

mod de;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};

use crate::sealed::Sealed;
use crate::tag::{Tag, TagKind};
use crate::version::{Version, VersionRange};
use crate::release::{ReleaseDate, ReleaseKind};
use crate::toolchain::{Compiler, Sdk};
use crate::link::{Checksums, Link, LinkKind};
use crate::xcode::{Xcode, XcodeReleases};

use de::{FieldError, ValueDeserializer};


/// A type of the data model that has its own JSON representation. This trait is
/// sealed and implemented by all records and tags of this crate.
pub trait Record: Serialize + DeserializeOwned + Sealed {

    #[doc(hidden)]
    fn decode_json_value(value: &Value) -> Result<Self> {
        let deserializer = ValueDeserializer::new(value);
        serde_path_to_error::deserialize(deserializer)
            .map_err(DecodeError::from_path_error)
    }

}

macro_rules! impl_record {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl Sealed for $ty { }
            impl Record for $ty { }
        )*
    };
}

impl_record![
    Version,
    VersionRange,
    ReleaseDate,
    ReleaseKind,
    Compiler,
    Sdk,
    Checksums,
    LinkKind,
    Link,
    Xcode,
];

impl<K: TagKind> Sealed for Tag<K> { }
impl<K: TagKind> Record for Tag<K> { }

impl Sealed for XcodeReleases { }
impl Record for XcodeReleases {

    fn decode_json_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(elements) => XcodeReleases::from_elements(elements),
            _ => Err(DecodeError::MalformedDocument {
                reason: "expected an array of releases".to_string(),
                source: None,
            }),
        }
    }

}

/// Decode a record from a JSON document.
///
/// The bytes must be a valid UTF-8 JSON document, otherwise a
/// [`DecodeError::MalformedDocument`] is returned. Decoding a [`XcodeReleases`]
/// requires the document to be an array, each element is decoded in order and the
/// first failing one is returned as a [`DecodeError::IndexedElement`].
pub fn decode<T: Record>(bytes: &[u8]) -> Result<T> {
    let value = serde_json::from_slice::<Value>(bytes)
        .map_err(DecodeError::new_malformed)?;
    T::decode_json_value(&value)
}

/// Decode a record from a JSON string, see [`decode`].
#[inline]
pub fn decode_str<T: Record>(s: &str) -> Result<T> {
    decode(s.as_bytes())
}

/// Decode a record from an already parsed JSON value.
#[inline]
pub fn decode_value<T: Record>(value: &Value) -> Result<T> {
    T::decode_json_value(value)
}

/// Encode a record to a compact JSON document.
pub fn encode<T: Record>(record: &T) -> Vec<u8> {
    // Records only contain string-keyed maps and none of their serialize
    // implementations return an error.
    serde_json::to_vec(record).unwrap()
}

/// Encode a record to an indented JSON document.
pub fn encode_pretty<T: Record>(record: &T) -> Vec<u8> {
    serde_json::to_vec_pretty(record).unwrap()
}

/// Encode a record to a compact JSON string.
pub fn encode_string<T: Record>(record: &T) -> String {
    serde_json::to_string(record).unwrap()
}

/// Encode a record to a JSON value.
pub fn encode_value<T: Record>(record: &T) -> Value {
    serde_json::to_value(record).unwrap()
}

/// Return true if the value is equal to the default value of its type. This is used
/// with `#[serde(default)]` fields so that they are omitted when encoded with their
/// default value, keeping documents readable by consumers of older schemas.
#[inline]
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// The error type of all decoding functions.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The value at the given path doesn't have the expected shape, for example a
    /// number where a string is expected.
    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch {
        path: String,
        expected: String,
    },
    /// A required field is absent from an object, the path includes the field.
    #[error("missing field {path}")]
    MissingField {
        path: String,
    },
    /// The document isn't valid JSON, or the release collection is not an array.
    #[error("malformed document: {reason}")]
    MalformedDocument {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },
    /// An element of the release collection failed to decode.
    #[error("release #{index}: {cause}")]
    IndexedElement {
        index: usize,
        #[source]
        cause: Box<DecodeError>,
    },
}

/// Type alias for a result with the decode error type.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {

    #[inline]
    fn new_malformed(error: serde_json::Error) -> Self {
        Self::MalformedDocument { reason: error.to_string(), source: Some(error) }
    }

    fn from_path_error(error: serde_path_to_error::Error<FieldError>) -> Self {
        let path = error.path().clone();
        match error.into_inner() {
            FieldError::TypeMismatch { expected } =>
                Self::TypeMismatch { path: format_path(&path, None), expected },
            FieldError::MissingField { field } =>
                Self::MissingField { path: format_path(&path, Some(field)) },
        }
    }

    /// The path of the faulty field, if relevant, relative to the element for errors
    /// wrapped in [`DecodeError::IndexedElement`].
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { path, .. } |
            Self::MissingField { path } => Some(path),
            Self::MalformedDocument { .. } => None,
            Self::IndexedElement { cause, .. } => cause.path(),
        }
    }

    /// The index of the faulty element in the release collection, if relevant.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::IndexedElement { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The error without any [`DecodeError::IndexedElement`] wrapping.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            Self::IndexedElement { cause, .. } => cause.root_cause(),
            _ => self,
        }
    }

}

/// Format a path with dots between keys and brackets around indices, the empty path
/// is formatted as a single dot.
fn format_path(path: &Path, field: Option<&str>) -> String {

    let mut buf = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => {
                buf.push('[');
                buf.push_str(&index.to_string());
                buf.push(']');
            }
            Segment::Map { key } => {
                if !buf.is_empty() {
                    buf.push('.');
                }
                buf.push_str(key);
            }
            _ => {
                if !buf.is_empty() {
                    buf.push('.');
                }
                buf.push('?');
            }
        }
    }

    if let Some(field) = field {
        if !buf.is_empty() {
            buf.push('.');
        }
        buf.push_str(field);
    }

    if buf.is_empty() {
        buf.push('.');
    }

    buf

}

#[cfg(test)]
mod tests {

    use super::is_default;

    #[test]
    fn default_detection() {
        assert!(is_default(&false));
        assert!(!is_default(&true));
        assert!(is_default(&0u32));
        assert!(is_default(&None::<String>));
        assert!(!is_default(&Some(String::new())));
    }

}
