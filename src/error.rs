//! Error types for AXON parsing.
//!
//! Every error aborts the whole document; the parser never returns a partial
//! [`ParseResult`](crate::ParseResult) alongside an error.
//!
//! ## Error Categories
//!
//! - **Header errors**: a `@data` line that does not match `name[count]`
//! - **Schema lookup errors**: a data block names a schema not declared above it
//! - **Value errors**: a row token that cannot be coerced to its field type
//! - **Strict-mode errors**: unterminated blocks and row count mismatches, only
//!   raised when the matching [`ParseOptions`](crate::ParseOptions) flag is set
//!
//! Document errors carry the 1-based line number and the offending raw text.
//!
//! ## Examples
//!
//! ```rust
//! use serde_axon::{parse, Error};
//!
//! let result = parse("@data Ghost[1]\n1\n@end");
//! match result {
//!     Err(Error::SchemaNotFound { name, line }) => {
//!         assert_eq!(name, "Ghost");
//!         assert_eq!(line, 1);
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use crate::value::AxonType;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing an AXON document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A `@data` header did not match `@data <name>[<count>]`.
    #[error("Invalid @data header at line {line}: {header}")]
    HeaderFormat { line: usize, header: String },

    /// A data block referenced a schema that was not declared before it.
    #[error("Schema not found at line {line}: {name}")]
    SchemaNotFound { line: usize, name: String },

    /// A row token could not be converted to the field's declared type.
    #[error("Invalid value at line {line} for field '{field}': expected {expected}, found '{token}' ({reason})")]
    ValueFormat {
        line: usize,
        field: String,
        expected: AxonType,
        token: String,
        reason: String,
    },

    /// A block reached end of input or another directive before `@end`.
    #[error("Unterminated @{directive} block starting at line {line}: missing @end")]
    UnterminatedBlock { line: usize, directive: String },

    /// The declared row count disagreed with the rows actually present.
    #[error("Row count mismatch for '{schema}' at line {line}: declared {declared}, found {actual}")]
    CountMismatch {
        line: usize,
        schema: String,
        declared: usize,
        actual: usize,
    },

    /// IO error while reading a document
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(String),

    /// Custom error, including typed deserialization failures
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a header format error for a malformed `@data` line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::Error;
    ///
    /// let err = Error::header_format(3, "@data User");
    /// assert!(err.to_string().contains("line 3"));
    /// assert!(err.to_string().contains("@data User"));
    /// ```
    pub fn header_format(line: usize, header: &str) -> Self {
        Error::HeaderFormat {
            line,
            header: header.to_string(),
        }
    }

    /// Creates a schema lookup error.
    pub fn schema_not_found(line: usize, name: &str) -> Self {
        Error::SchemaNotFound {
            line,
            name: name.to_string(),
        }
    }

    /// Creates a value coercion error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::{AxonType, Error};
    ///
    /// let err = Error::value_format(7, "id", &AxonType::Integer, "abc", "invalid digit");
    /// assert!(err.to_string().contains("'abc'"));
    /// assert!(err.to_string().contains("expected I"));
    /// ```
    pub fn value_format<R: fmt::Display>(
        line: usize,
        field: &str,
        expected: &AxonType,
        token: &str,
        reason: R,
    ) -> Self {
        Error::ValueFormat {
            line,
            field: field.to_string(),
            expected: expected.clone(),
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates an unterminated block error. `directive` is `schema` or `data`.
    pub fn unterminated_block(line: usize, directive: &str) -> Self {
        Error::UnterminatedBlock {
            line,
            directive: directive.to_string(),
        }
    }

    /// Creates a row count error. `line` is the block's `@data` header line.
    pub fn count_mismatch(line: usize, schema: &str, declared: usize, actual: usize) -> Self {
        Error::CountMismatch {
            line,
            schema: schema.to_string(),
            declared,
            actual,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// Row callbacks passed to [`for_each_row`](crate::for_each_row) use this to stop a walk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::Error;
    ///
    /// let err = Error::custom("stop here");
    /// assert!(err.to_string().contains("stop here"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based document line the error refers to, if any.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::HeaderFormat { line, .. }
            | Error::SchemaNotFound { line, .. }
            | Error::ValueFormat { line, .. }
            | Error::UnterminatedBlock { line, .. }
            | Error::CountMismatch { line, .. } => Some(*line),
            Error::Io(_) | Error::Utf8(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
