//! Ordered row type for AXON data blocks.
//!
//! [`Row`] wraps an [`IndexMap`] so that iteration and serialization follow the
//! schema's field order rather than hash order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_axon::{AxonValue, Row};
//!
//! let mut row = Row::new();
//! row.insert("id".to_string(), AxonValue::from(1));
//! row.insert("name".to_string(), AxonValue::from("Alice"));
//!
//! assert_eq!(row.len(), 2);
//! assert_eq!(row.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::AxonValue;
use indexmap::IndexMap;
use serde::Serialize;

/// A data row: field names mapped to typed values, in schema order.
///
/// Rows built by the parser only hold fields that had a token; a short row
/// leaves the trailing fields absent rather than null.
///
/// # Examples
///
/// ```rust
/// use serde_axon::{AxonValue, Row};
///
/// let row: Row = vec![
///     ("first".to_string(), AxonValue::from(1)),
///     ("second".to_string(), AxonValue::Null),
/// ]
/// .into_iter()
/// .collect();
///
/// let keys: Vec<_> = row.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, AxonValue>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Row(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Row(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value, returning the previous value for the field if any.
    ///
    /// A schema that declares the same field name twice keeps the position of
    /// the first declaration and the value of the last token.
    pub fn insert(&mut self, key: String, value: AxonValue) -> Option<AxonValue> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AxonValue> {
        self.0.get(key)
    }

    /// Returns `true` if the field was populated, including with an explicit null.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::{AxonValue, Row};
    ///
    /// let mut row = Row::new();
    /// row.insert("age".to_string(), AxonValue::Null);
    /// assert!(row.contains_key("age"));
    /// assert!(!row.contains_key("email"));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, AxonValue> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, AxonValue> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, AxonValue> {
        self.0.iter()
    }
}

impl IntoIterator for Row {
    type Item = (String, AxonValue);
    type IntoIter = indexmap::map::IntoIter<String, AxonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a String, &'a AxonValue);
    type IntoIter = indexmap::map::Iter<'a, String, AxonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, AxonValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, AxonValue)>>(iter: T) -> Self {
        Row(IndexMap::from_iter(iter))
    }
}
