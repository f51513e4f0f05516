//! # serde_axon
//!
//! A parser for AXON, a compact line-oriented text format that declares schemas
//! and typed, pipe-delimited data blocks inline in a single document.
//!
//! ## What is AXON?
//!
//! AXON carries small typed datasets (fixtures, test data, interchange payloads)
//! without a separate schema registry. A document declares one or more schemas,
//! then data blocks whose rows bind to those schemas by position:
//!
//! ```text
//! @schema User
//! id:I
//! name:S
//! active:B
//! age:I?
//! @end
//!
//! @data User[2]
//! 1|Alice|1|28
//! 2|Bob|0|_
//! @end
//! ```
//!
//! ## Key Features
//!
//! - **Inline Schemas**: Field names and types live in the same document as the data
//! - **Typed Values**: Strings, 64-bit integers and floats, booleans, RFC 3339 timestamps
//! - **Null Sentinel**: `_` is null in any column
//! - **Quoting and Escapes**: `"a|b"` keeps the pipe, `\n`, `\t`, `\r` and `\x` decode
//! - **Lenient by Default**: Malformed field lines are skipped and unterminated blocks
//!   end at end of input; stricter checks are opt-in through [`ParseOptions`]
//! - **Serde Output**: Every result type implements `Serialize`
//! - **Typed Rows**: Rows deserialize into any `#[derive(Deserialize)]` struct
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_axon::{parse, AxonValue};
//!
//! let doc = "\
//! @schema User
//! id:I
//! name:S
//! age:I?
//! @end
//! @data User[2]
//! 1|Alice|28
//! 2|Bob|_
//! @end";
//!
//! let result = parse(doc).unwrap();
//! let rows = &result.data_blocks[0].rows;
//!
//! assert_eq!(rows[0].get("name").and_then(|v| v.as_str()), Some("Alice"));
//! assert_eq!(rows[1].get("age"), Some(&AxonValue::Null));
//! ```
//!
//! ## Typed Rows
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_axon::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct User { id: i64, name: String, age: Option<u8> }
//!
//! let doc = "@schema User\nid:I\nname:S\nage:I?\n@end\n@data User[2]\n1|Alice|28\n2|Bob|_\n@end";
//! let users: Vec<User> = from_str(doc).unwrap();
//!
//! assert_eq!(users[1], User { id: 2, name: "Bob".to_string(), age: None });
//! ```
//!
//! ## Walking Raw Rows
//!
//! [`for_each_row`] resolves schemas but leaves row text untouched, which is
//! useful for counting or routing rows before paying for coercion:
//!
//! ```rust
//! use serde_axon::for_each_row;
//!
//! let doc = "@schema P\nx:I\n@end\n@data P[2]\n1\n2\n@end";
//! let mut count = 0;
//! for_each_row(doc, |_schema, _index, _row| {
//!     count += 1;
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(count, 2);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No global state: parsing the same text twice gives equal results
//! - Proper error propagation with `Result` types; an error never comes with a partial result
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the full grammar.

pub mod coerce;
pub mod de;
pub mod error;
pub mod map;
pub mod options;
pub mod parser;
pub mod schema;
pub mod spec;
pub mod tokenizer;
pub mod value;

pub use coerce::{assemble_row, coerce_value};
pub use de::{from_row, RowDeserializer, ValueDeserializer};
pub use error::{Error, Result};
pub use map::Row;
pub use options::{Delimiter, ParseOptions};
pub use parser::Parser;
pub use schema::{DataBlock, FieldDefinition, ParseResult, Schema};
pub use value::{AxonType, AxonValue};

use serde::de::DeserializeOwned;
use std::io;

/// Parses an AXON document with default (lenient) options.
///
/// # Examples
///
/// ```rust
/// use serde_axon::parse;
///
/// let result = parse("@schema P\nx:F\n@end\n@data P[1]\n2.5\n@end").unwrap();
/// assert_eq!(result.schemas.len(), 1);
/// assert_eq!(result.data_blocks[0].rows[0].get("x").and_then(|v| v.as_f64()), Some(2.5));
/// ```
///
/// # Errors
///
/// Returns an error for a malformed `@data` header, a reference to an undeclared
/// schema, or a row value that cannot be coerced to its field type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(input: &str) -> Result<ParseResult> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses an AXON document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_axon::{parse_with_options, Error, ParseOptions};
///
/// let doc = "@schema P\nx:I\n@end\n@data P[3]\n1\n@end";
/// let options = ParseOptions::new().with_validate_counts(true);
///
/// assert!(matches!(
///     parse_with_options(doc, options),
///     Err(Error::CountMismatch { declared: 3, actual: 1, .. })
/// ));
/// ```
///
/// # Errors
///
/// As [`parse`], plus whatever strict checks the options enable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<ParseResult> {
    Parser::new(input, options).parse()
}

/// Deserializes every row of every data block into `T`, in document order.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_axon::from_str;
///
/// #[derive(Deserialize)]
/// struct Item { sku: String, qty: u32 }
///
/// let doc = "@schema Item\nsku:S\nqty:I\n@end\n@data Item[1]\nA-1|3\n@end\n@data Item[1]\nB-2|5\n@end";
/// let items: Vec<Item> = from_str(doc).unwrap();
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].qty, 5);
/// ```
///
/// # Errors
///
/// Returns any parse error, or the first row that does not deserialize into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(input: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let result = parse(input)?;
    let mut items = Vec::with_capacity(result.data_blocks.iter().map(DataBlock::len).sum());
    for block in result.data_blocks {
        for row in block.rows {
            items.push(from_row(row)?);
        }
    }
    Ok(items)
}

/// Deserializes the rows of the first data block whose schema name matches
/// `block_name`, compared ASCII case-insensitively.
///
/// Returns an empty vector when no block matches.
///
/// # Errors
///
/// Returns any parse error, or the first row that does not deserialize into `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_block<T>(input: &str, block_name: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let result = parse(input)?;
    match result
        .data_blocks
        .iter()
        .find(|block| block.schema_name.eq_ignore_ascii_case(block_name))
    {
        Some(block) => block.deserialize_rows(),
        None => Ok(Vec::new()),
    }
}

/// Deserializes the first row of the first data block.
///
/// Returns `None` when the document has no data block or its first block is empty.
///
/// # Errors
///
/// Returns any parse error, or a deserialization error for that row.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_one<T>(input: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let result = parse(input)?;
    match result
        .data_blocks
        .into_iter()
        .next()
        .and_then(|block| block.rows.into_iter().next())
    {
        Some(row) => from_row(row).map(Some),
        None => Ok(None),
    }
}

/// Maps every row of every data block through `mapper`, in document order.
///
/// # Errors
///
/// Returns any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with<T, F>(input: &str, mapper: F) -> Result<Vec<T>>
where
    F: FnMut(&Row) -> T,
{
    let result = parse(input)?;
    Ok(result
        .data_blocks
        .iter()
        .flat_map(|block| block.rows.iter())
        .map(mapper)
        .collect())
}

/// Returns every row of every data block as untyped [`Row`]s, in document order.
///
/// # Errors
///
/// Returns any parse error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_dynamic(input: &str) -> Result<Vec<Row>> {
    let result = parse(input)?;
    Ok(result
        .data_blocks
        .into_iter()
        .flat_map(|block| block.rows)
        .collect())
}

/// Visits every data row's raw text with its resolved schema and 0-based index.
///
/// # Errors
///
/// Returns header and schema lookup errors, or the first error the callback returns.
pub fn for_each_row<F>(input: &str, callback: F) -> Result<()>
where
    F: FnMut(&Schema, usize, &str) -> Result<()>,
{
    Parser::new(input, ParseOptions::default()).for_each_row(callback)
}

/// Reads a whole AXON document from an I/O stream and parses it.
///
/// # Examples
///
/// ```rust
/// use serde_axon::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"@schema P\nx:S\n@end\n@data P[1]\nhi\n@end");
/// let result = from_reader(cursor).unwrap();
/// assert_eq!(result.data_blocks[0].len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the document does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<ParseResult>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Parses an AXON document from UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// use serde_axon::{from_slice, Error};
///
/// assert!(from_slice(b"@schema P\n@end").is_ok());
/// assert!(matches!(from_slice(&[0xff, 0xfe]), Err(Error::Utf8(_))));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the document does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<ParseResult> {
    let s = std::str::from_utf8(v).map_err(|e| Error::Utf8(e.to_string()))?;
    parse(s)
}
