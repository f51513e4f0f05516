//! AXON Format Specification
//!
//! This module documents the AXON format as implemented by this library.
//!
//! # Overview
//!
//! AXON is a line-oriented text format for small typed datasets. A document
//! interleaves schema declarations and data blocks; every data block names a
//! schema declared earlier in the same document.
//!
//! ## Design Philosophy
//!
//! - **Self-describing**: No external schema registry; types travel with the data
//! - **Editable by hand**: One record per line, one directive per block
//! - **Lenient reading**: Unknown lines are ignored, malformed field lines are
//!   skipped, missing terminators close at end of input
//!
//! # Document Structure
//!
//! Lines are trimmed before parsing. Only lines beginning with `@schema` or
//! `@data` start a block; every other line outside a block is ignored, which
//! makes free text usable as comments.
//!
//! ```text
//! Any text here is ignored.
//!
//! @schema <name>
//! <field>:<TYPE>[?]
//! ...
//! @end
//!
//! @data <name>[<count>]
//! <value>|<value>|...
//! ...
//! @end
//! ```
//!
//! A block ends at the first line that is exactly `@end`. Blank lines inside
//! blocks are skipped.
//!
//! ## Schemas
//!
//! The schema name is everything after `@schema`, trimmed, taken verbatim.
//! Each field line has exactly one `:`; lines with zero or several are skipped.
//!
//! | Tag | Type | Parsed as |
//! |-----|------|-----------|
//! | `S` | String | text with escapes decoded |
//! | `I` | Integer | base-10 signed 64-bit |
//! | `F` | Float | 64-bit IEEE-754 |
//! | `B` | Boolean | `1` is true, anything else false |
//! | `T` | Timestamp | RFC 3339 date-time |
//!
//! Any other tag is kept as-is and its values pass through as raw strings.
//! A trailing `?` marks a field nullable. This is recorded but not enforced.
//!
//! Schema names are not required to be unique; lookups take the first match.
//!
//! ## Data Blocks
//!
//! The header must match `@data <ident>[<digits>]`, where `<ident>` is letters,
//! digits and `_`. The count is informational: it is not compared with the
//! number of rows unless count validation is enabled.
//!
//! **Example**:
//! ```text
//! @data User[2]
//! 1|Alice|alice@example.com|1|28
//! 2|Bob|bob@example.com|0|_
//! @end
//! ```
//!
//! # Rows
//!
//! Rows are split on `|`. The i-th value binds to the i-th schema field.
//! Short rows populate only the leading fields; extra values are dropped.
//!
//! ## Null
//!
//! The token `_` is null for every type, nullable or not.
//!
//! ## Quoting
//!
//! A double quote toggles a literal region in which `|` does not split. The
//! quotes themselves are removed:
//!
//! ```text
//! 1|"a|b"|2      -> 1, a|b, 2
//! ```
//!
//! ## Escape Sequences
//!
//! ```text
//! \n  - newline
//! \t  - tab
//! \r  - carriage return
//! \x  - any other character, literally (\" \\ \|)
//! ```
//!
//! String fields decode escapes a second time after tokenizing, so a row
//! written `a\\nb` yields the string `a`, newline, `b`.
//!
//! ## Trailing Delimiters
//!
//! A row ending in `|` produces an extra empty final value:
//!
//! ```text
//! a|b|   -> a, b, ""
//! ```
//!
//! # Errors
//!
//! Parsing stops at the first error:
//!
//! - malformed `@data` header
//! - data block naming an undeclared schema
//! - integer, float or timestamp value that does not parse
//!
//! # Limitations
//!
//! - **No writer**: this library reads AXON only
//! - **No schema evolution**: a schema cannot be extended or versioned
//! - **Whole documents**: input is read fully into memory before parsing

// This module contains only documentation; no implementation code
