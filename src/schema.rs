//! Parsed document model: schemas, data blocks and the overall parse result.
//!
//! All types here are plain owned data. A [`ParseResult`] owns every schema and
//! data block it contains; nothing borrows from the input text.

use crate::de::from_row;
use crate::{AxonType, Result, Row};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One `name:TYPE[?]` line of a schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: AxonType,
    /// Set by a trailing `?`. Not enforced: non-nullable fields still accept the null sentinel.
    pub nullable: bool,
}

impl FieldDefinition {
    #[must_use]
    pub fn new(name: &str, field_type: AxonType, nullable: bool) -> Self {
        FieldDefinition {
            name: name.to_string(),
            field_type,
            nullable,
        }
    }
}

/// A named, ordered list of field definitions declared by a `@schema` block.
///
/// # Examples
///
/// ```rust
/// use serde_axon::parse;
///
/// let result = parse("@schema User\nid:I\nname:S\n@end").unwrap();
/// let user = &result.schemas[0];
///
/// assert_eq!(user.field_index("name"), Some(1));
/// assert!(user.field("email").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    #[must_use]
    pub fn new(name: &str, fields: Vec<FieldDefinition>) -> Self {
        Schema {
            name: name.to_string(),
            fields,
        }
    }

    /// Returns the position of the first field with this name.
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Rows of one `@data` block.
///
/// `declared_count` is the number written in the header. The parser does not
/// compare it with `rows.len()` unless
/// [`ParseOptions::validate_counts`](crate::ParseOptions::validate_counts) is set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataBlock {
    pub schema_name: String,
    pub declared_count: usize,
    pub rows: Vec<Row>,
}

impl DataBlock {
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Deserializes every row of the block into `T`, in row order.
    ///
    /// # Errors
    ///
    /// Returns the first row that fails to deserialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Deserialize;
    /// use serde_axon::parse;
    ///
    /// #[derive(Deserialize)]
    /// struct Tag { label: String }
    ///
    /// let result = parse("@schema Tag\nlabel:S\n@end\n@data Tag[2]\nrust\nserde\n@end").unwrap();
    /// let tags: Vec<Tag> = result.data_blocks[0].deserialize_rows().unwrap();
    /// assert_eq!(tags[1].label, "serde");
    /// ```
    pub fn deserialize_rows<T>(&self) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.rows.iter().cloned().map(from_row).collect()
    }
}

/// Everything parsed from one document, in declaration order.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
pub struct ParseResult {
    pub schemas: Vec<Schema>,
    pub data_blocks: Vec<DataBlock>,
}

impl ParseResult {
    /// Looks up a schema by name. With duplicate names the earliest declaration wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::parse;
    ///
    /// let doc = "@schema A\nx:I\n@end\n@schema A\nx:S\ny:S\n@end";
    /// let result = parse(doc).unwrap();
    ///
    /// assert_eq!(result.schemas.len(), 2);
    /// assert_eq!(result.schema("A").map(|s| s.len()), Some(1));
    /// ```
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Returns every data block bound to the named schema.
    pub fn data_blocks_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DataBlock> {
        self.data_blocks
            .iter()
            .filter(move |block| block.schema_name == name)
    }
}
