//! Typed deserialization of parsed rows.
//!
//! A [`Row`] deserializes as a map from field name to value, so any
//! `#[derive(Deserialize)]` struct whose field names match the schema can be
//! read straight out of a data block. Values map onto serde primitives:
//!
//! | Value | Visited as |
//! |-------|------------|
//! | `Null` | unit, or `None` for `Option<T>` |
//! | `String` | string |
//! | `Integer` | `i64` (narrower integers are range-checked by serde) |
//! | `Float` | `f64` |
//! | `Boolean` | `bool` |
//! | `Timestamp` | RFC 3339 string, which `chrono` types accept |
//!
//! Fields absent from a short row deserialize as `None` when the target is an
//! `Option`, and fail with a missing-field error otherwise.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_axon::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32, label: Option<String> }
//!
//! let doc = "@schema Point\nx:I\ny:I\nlabel:S?\n@end\n@data Point[2]\n1|2|origin\n3|4|_\n@end";
//! let points: Vec<Point> = from_str(doc).unwrap();
//!
//! assert_eq!(points[0], Point { x: 1, y: 2, label: Some("origin".to_string()) });
//! assert_eq!(points[1].label, None);
//! ```

use crate::{AxonValue, Error, Result, Row};
use serde::de::{self, DeserializeOwned, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Deserializes one row into `T`.
///
/// # Errors
///
/// Returns [`Error::Custom`] when a field is missing, has the wrong type, or
/// does not fit the target (for example an `Integer` above `u8::MAX` into a `u8`).
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_axon::{from_row, AxonValue, Row};
///
/// #[derive(Deserialize)]
/// struct Tag { label: String }
///
/// let mut row = Row::new();
/// row.insert("label".to_string(), AxonValue::from("rust"));
///
/// let tag: Tag = from_row(row).unwrap();
/// assert_eq!(tag.label, "rust");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_row<T>(row: Row) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(row.into_deserializer())
}

/// Deserializer over a single [`AxonValue`].
pub struct ValueDeserializer {
    value: AxonValue,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: AxonValue) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AxonValue::Null => visitor.visit_unit(),
            AxonValue::String(s) => visitor.visit_string(s),
            AxonValue::Integer(i) => visitor.visit_i64(i),
            AxonValue::Float(f) => visitor.visit_f64(f),
            AxonValue::Boolean(b) => visitor.visit_bool(b),
            AxonValue::Timestamp(ts) => visitor.visit_string(ts.to_rfc3339()),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.value.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            AxonValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            other => Err(Error::custom(format!(
                "expected a string enum variant, found {}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for AxonValue {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        ValueDeserializer::new(self)
    }
}

/// Deserializer that presents a [`Row`] as a map in schema order.
pub struct RowDeserializer {
    iter: indexmap::map::IntoIter<String, AxonValue>,
    value: Option<AxonValue>,
}

impl RowDeserializer {
    #[must_use]
    pub fn new(row: Row) -> Self {
        RowDeserializer {
            iter: row.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::Deserializer<'de> for RowDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_map(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

impl<'de> de::MapAccess<'de> for RowDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(key.into_deserializer()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

impl<'de> IntoDeserializer<'de, Error> for Row {
    type Deserializer = RowDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        RowDeserializer::new(self)
    }
}
