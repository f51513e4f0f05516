//! Configuration options for AXON parsing.
//!
//! This module provides types to customize how documents are read:
//!
//! - [`ParseOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of row field delimiter (pipe, comma, or tab)
//!
//! The defaults reproduce the lenient reference behavior: booleans accept any
//! token, unterminated blocks close at end of input, and declared row counts
//! are not checked. Each check can be switched on individually.
//!
//! ## Examples
//!
//! ```rust
//! use serde_axon::{parse_with_options, ParseOptions};
//!
//! let doc = "@schema Flag\non:B\n@end\n@data Flag[1]\nyes\n@end";
//!
//! // Lenient default: "yes" is simply false
//! let result = parse_with_options(doc, ParseOptions::new()).unwrap();
//! assert_eq!(result.data_blocks[0].rows[0].get("on").and_then(|v| v.as_bool()), Some(false));
//!
//! // Strict booleans reject it
//! let options = ParseOptions::new().with_strict_booleans(true);
//! assert!(parse_with_options(doc, options).is_err());
//! ```

use serde::Serialize;

/// Delimiter separating fields within a data row.
///
/// # Examples
///
/// ```rust
/// use serde_axon::Delimiter;
///
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Delimiter {
    #[default]
    Pipe,
    Comma,
    Tab,
}

impl Delimiter {
    /// Returns the character this delimiter matches.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Pipe => '|',
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Configuration options for AXON parsing.
///
/// # Examples
///
/// ```rust
/// use serde_axon::{Delimiter, ParseOptions};
///
/// // Lenient defaults
/// let options = ParseOptions::new();
/// assert!(!options.strict_booleans);
///
/// // Every check enabled
/// let options = ParseOptions::strict();
/// assert!(options.validate_counts);
///
/// // Custom configuration
/// let options = ParseOptions::new()
///     .with_delimiter(Delimiter::Comma)
///     .with_null_sentinel("NULL");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    pub null_sentinel: String,
    pub strict_booleans: bool,
    pub strict_terminators: bool,
    pub validate_counts: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: Delimiter::default(),
            null_sentinel: "_".to_string(),
            strict_booleans: false,
            strict_terminators: false,
            validate_counts: false,
        }
    }
}

impl ParseOptions {
    /// Creates default options (pipe delimiter, `_` null sentinel, lenient checks).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::{Delimiter, ParseOptions};
    ///
    /// let options = ParseOptions::new();
    /// assert_eq!(options.delimiter, Delimiter::Pipe);
    /// assert_eq!(options.null_sentinel, "_");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with boolean, terminator and row count checks all enabled.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_booleans: true,
            strict_terminators: true,
            validate_counts: true,
            ..Default::default()
        }
    }

    /// Sets the row field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the token that denotes an explicit null in any field.
    #[must_use]
    pub fn with_null_sentinel(mut self, sentinel: &str) -> Self {
        self.null_sentinel = sentinel.to_string();
        self
    }

    /// When enabled, boolean fields accept only `1` and `0`.
    #[must_use]
    pub fn with_strict_booleans(mut self, strict: bool) -> Self {
        self.strict_booleans = strict;
        self
    }

    /// When enabled, a block that hits end of input or another directive
    /// before `@end` is an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_axon::{parse_with_options, ParseOptions};
    ///
    /// let doc = "@schema User\nid:I";
    /// assert!(parse_with_options(doc, ParseOptions::new()).is_ok());
    ///
    /// let options = ParseOptions::new().with_strict_terminators(true);
    /// assert!(parse_with_options(doc, options).is_err());
    /// ```
    #[must_use]
    pub fn with_strict_terminators(mut self, strict: bool) -> Self {
        self.strict_terminators = strict;
        self
    }

    /// When enabled, a data block whose row count differs from its header is an error.
    #[must_use]
    pub fn with_validate_counts(mut self, validate: bool) -> Self {
        self.validate_counts = validate;
        self
    }
}
