//! Type tags and typed values for AXON data.
//!
//! - [`AxonType`]: the declared type of a schema field (`S`, `I`, `F`, `B`, `T`,
//!   or an unrecognized tag kept verbatim)
//! - [`AxonValue`]: one coerced cell of a data row
//!
//! ## Examples
//!
//! ```rust
//! use serde_axon::{AxonType, AxonValue};
//!
//! assert_eq!(AxonType::from_code("I"), AxonType::Integer);
//! assert_eq!(AxonType::from_code("D"), AxonType::Unknown("D".to_string()));
//!
//! let value = AxonValue::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//! assert!(!value.is_null());
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt;

/// Declared type of a schema field.
///
/// Schema parsing never rejects a type token. Tags outside the five known codes
/// are carried as [`AxonType::Unknown`] and their values pass through as raw strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AxonType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Unknown(String),
}

impl AxonType {
    /// Maps a type token (already stripped of any `?`) to a tag. Matching is exact
    /// and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::AxonType;
    ///
    /// assert_eq!(AxonType::from_code("T"), AxonType::Timestamp);
    /// assert_eq!(AxonType::from_code("s"), AxonType::Unknown("s".to_string()));
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "S" => AxonType::String,
            "I" => AxonType::Integer,
            "F" => AxonType::Float,
            "B" => AxonType::Boolean,
            "T" => AxonType::Timestamp,
            other => AxonType::Unknown(other.to_string()),
        }
    }

    /// Returns the type token as written in a schema.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            AxonType::String => "S",
            AxonType::Integer => "I",
            AxonType::Float => "F",
            AxonType::Boolean => "B",
            AxonType::Timestamp => "T",
            AxonType::Unknown(tag) => tag,
        }
    }

    /// Returns `true` for tags outside the five recognized codes.
    #[inline]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, AxonType::Unknown(_))
    }
}

impl fmt::Display for AxonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for AxonType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// A single typed cell of a data row.
///
/// # Examples
///
/// ```rust
/// use serde_axon::AxonValue;
///
/// let null = AxonValue::Null;
/// let text = AxonValue::from("hello");
/// let flag = AxonValue::from(true);
///
/// assert!(null.is_null());
/// assert_eq!(text.as_str(), Some("hello"));
/// assert_eq!(flag.as_bool(), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AxonValue {
    #[default]
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<FixedOffset>),
}

impl AxonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, AxonValue::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AxonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AxonValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64` for floats and integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::AxonValue;
    ///
    /// assert_eq!(AxonValue::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(AxonValue::Integer(2).as_f64(), Some(2.0));
    /// assert_eq!(AxonValue::Null.as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AxonValue::Float(f) => Some(*f),
            AxonValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AxonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            AxonValue::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }
}

impl fmt::Display for AxonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxonValue::Null => write!(f, "null"),
            AxonValue::String(s) => write!(f, "{}", s),
            AxonValue::Integer(i) => write!(f, "{}", i),
            AxonValue::Float(fl) => write!(f, "{}", fl),
            AxonValue::Boolean(b) => write!(f, "{}", b),
            AxonValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

impl Serialize for AxonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AxonValue::Null => serializer.serialize_unit(),
            AxonValue::String(s) => serializer.serialize_str(s),
            AxonValue::Integer(i) => serializer.serialize_i64(*i),
            AxonValue::Float(f) => serializer.serialize_f64(*f),
            AxonValue::Boolean(b) => serializer.serialize_bool(*b),
            AxonValue::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
        }
    }
}

impl From<i64> for AxonValue {
    fn from(value: i64) -> Self {
        AxonValue::Integer(value)
    }
}

impl From<i32> for AxonValue {
    fn from(value: i32) -> Self {
        AxonValue::Integer(value as i64)
    }
}

impl From<f64> for AxonValue {
    fn from(value: f64) -> Self {
        AxonValue::Float(value)
    }
}

impl From<bool> for AxonValue {
    fn from(value: bool) -> Self {
        AxonValue::Boolean(value)
    }
}

impl From<&str> for AxonValue {
    fn from(value: &str) -> Self {
        AxonValue::String(value.to_string())
    }
}

impl From<String> for AxonValue {
    fn from(value: String) -> Self {
        AxonValue::String(value)
    }
}

impl From<DateTime<FixedOffset>> for AxonValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        AxonValue::Timestamp(value)
    }
}

impl<T: Into<AxonValue>> From<Option<T>> for AxonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AxonValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes_roundtrip_through_display() {
        for code in ["S", "I", "F", "B", "T", "Decimal"] {
            assert_eq!(AxonType::from_code(code).to_string(), code);
        }
    }

    #[test]
    fn test_empty_code_is_unknown() {
        assert!(AxonType::from_code("").is_unknown());
    }

    #[test]
    fn test_value_serializes_to_json_primitives() {
        let ts = DateTime::parse_from_rfc3339("2024-01-15T10:30:00+02:00").unwrap();
        let values = vec![
            AxonValue::Null,
            AxonValue::from("a"),
            AxonValue::from(1),
            AxonValue::from(1.5),
            AxonValue::from(false),
            AxonValue::from(ts),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,"a",1,1.5,false,"2024-01-15T10:30:00+02:00"]"#);
    }

    #[test]
    fn test_option_conversion() {
        assert!(AxonValue::from(None::<i64>).is_null());
        assert_eq!(AxonValue::from(Some(3)).as_i64(), Some(3));
    }
}
