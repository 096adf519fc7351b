//! Deserializer walking a parsed JSON tree.
//!
//! Its error type distinguishes missing fields from values of the wrong shape, which
//! the error type of `serde_json` doesn't allow to do reliably. The path of the error
//! is tracked on top of it with `serde_path_to_error`.

use std::fmt;

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, IntoDeserializer, Unexpected, Visitor};
use serde_json::{Number, Value};


/// An error raised while deserializing a JSON value, without its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldError {
    /// The value doesn't have the expected shape.
    TypeMismatch {
        expected: String,
    },
    /// A required field of an object is missing.
    MissingField {
        field: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::TypeMismatch { expected } => write!(f, "expected {expected}"),
            FieldError::MissingField { field } => write!(f, "missing field `{field}`"),
        }
    }
}

impl std::error::Error for FieldError { }

impl de::Error for FieldError {

    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::TypeMismatch { expected: msg.to_string() }
    }

    fn invalid_type(_unexp: Unexpected, exp: &dyn de::Expected) -> Self {
        Self::TypeMismatch { expected: exp.to_string() }
    }

    fn invalid_value(_unexp: Unexpected, exp: &dyn de::Expected) -> Self {
        Self::TypeMismatch { expected: exp.to_string() }
    }

    fn invalid_length(_len: usize, exp: &dyn de::Expected) -> Self {
        Self::TypeMismatch { expected: exp.to_string() }
    }

    fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

}

/// A deserializer borrowing a JSON value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueDeserializer<'de> {
    value: &'de Value,
}

impl<'de> ValueDeserializer<'de> {

    #[inline]
    pub fn new(value: &'de Value) -> Self {
        Self { value }
    }

    fn unexpected(&self) -> Unexpected<'de> {
        match self.value {
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(n) => unexpected_number(n),
            Value::String(s) => Unexpected::Str(s),
            Value::Array(_) => Unexpected::Seq,
            Value::Object(_) => Unexpected::Map,
        }
    }

    fn visit_array<V: Visitor<'de>>(elements: &'de [Value], visitor: V) -> Result<V::Value, FieldError> {
        let mut seq = SeqDeserializer::<_, FieldError>::new(elements.iter().map(ValueDeserializer::new));
        let value = visitor.visit_seq(&mut seq)?;
        seq.end()?;
        Ok(value)
    }

    fn visit_object<V: Visitor<'de>>(object: &'de serde_json::Map<String, Value>, visitor: V) -> Result<V::Value, FieldError> {
        let mut map = MapDeserializer::<_, FieldError>::new(object.iter()
            .map(|(key, value)| (key.as_str(), ValueDeserializer::new(value))));
        let value = visitor.visit_map(&mut map)?;
        map.end()?;
        Ok(value)
    }

}

impl<'de> IntoDeserializer<'de, FieldError> for ValueDeserializer<'de> {
    type Deserializer = Self;
    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer<'de> {

    type Error = FieldError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(*b),
            Value::Number(n) => {
                if let Some(n) = n.as_u64() {
                    visitor.visit_u64(n)
                } else if let Some(n) = n.as_i64() {
                    visitor.visit_i64(n)
                } else if let Some(n) = n.as_f64() {
                    visitor.visit_f64(n)
                } else {
                    Err(de::Error::invalid_type(self.unexpected(), &visitor))
                }
            }
            Value::String(s) => visitor.visit_borrowed_str(s),
            Value::Array(elements) => Self::visit_array(elements, visitor),
            Value::Object(object) => Self::visit_object(object, visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(self, _name: &'static str, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            Value::Array(elements) => Self::visit_array(elements, visitor),
            _ => Err(de::Error::invalid_type(self.unexpected(), &visitor)),
        }
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.value {
            Value::Object(object) => Self::visit_object(object, visitor),
            _ => Err(de::Error::invalid_type(self.unexpected(), &visitor)),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        // Records are only ever objects, derived visitors would also accept arrays.
        self.deserialize_map(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct tuple tuple_struct enum identifier
    }

}

fn unexpected_number(n: &Number) -> Unexpected<'static> {
    if let Some(n) = n.as_u64() {
        Unexpected::Unsigned(n)
    } else if let Some(n) = n.as_i64() {
        Unexpected::Signed(n)
    } else {
        Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}
