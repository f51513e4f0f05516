//! AXON document parsing.
//!
//! This module provides the [`Parser`] that turns a document into a
//! [`ParseResult`].
//!
//! ## Overview
//!
//! - **Line preprocessing**: the input is split on `\n` and every line trimmed;
//!   row text keeps a whitespace delimiter at its edges
//! - **Directive scan**: a single forward pass dispatches `@schema` and `@data`
//!   lines to their block parsers and ignores everything else
//! - **Cursor threading**: each block parser takes the index of its header and
//!   returns the parsed block with the index of the first line after it, so the
//!   parser itself holds no mutable state
//!
//! A data block can only reference a schema declared above it.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_axon::parse;
//!
//! let doc = "@schema P\nx:I\ny:I\n@end\n@data P[1]\n1|2\n@end";
//! let result = parse(doc).unwrap();
//! assert_eq!(result.data_blocks[0].rows[0].get("y").and_then(|v| v.as_i64()), Some(2));
//! ```

use crate::coerce::assemble_row;
use crate::options::ParseOptions;
use crate::schema::{DataBlock, FieldDefinition, ParseResult, Schema};
use crate::tokenizer::tokenize;
use crate::{AxonType, Error, Result};

const SCHEMA_DIRECTIVE: &str = "@schema";
const DATA_DIRECTIVE: &str = "@data";
const END_DIRECTIVE: &str = "@end";

/// Splits a document into lines with surrounding whitespace removed.
///
/// Empty lines are kept so that indices map to 1-based line numbers by adding one.
///
/// # Examples
///
/// ```rust
/// use serde_axon::parser::split_lines;
///
/// assert_eq!(split_lines("  a \r\n\nb"), vec!["a", "", "b"]);
/// ```
#[must_use]
pub fn split_lines(input: &str) -> Vec<&str> {
    input.split('\n').map(str::trim).collect()
}

/// Trims a row line without eating the delimiter.
///
/// With a whitespace delimiter such as tab, a leading or trailing delimiter marks
/// an empty first or last field and has to survive trimming. For non-whitespace
/// delimiters this is the same as [`str::trim`].
///
/// # Examples
///
/// ```rust
/// use serde_axon::parser::trim_row;
///
/// assert_eq!(trim_row(" \tx\t \r", '\t'), "\tx\t");
/// assert_eq!(trim_row(" a|b ", '|'), "a|b");
/// ```
#[must_use]
pub fn trim_row(line: &str, delimiter: char) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() && c != delimiter)
}

/// A non-blank line inside a block, with its 1-based line number.
#[derive(Debug, Clone, Copy)]
struct BodyLine<'a> {
    number: usize,
    text: &'a str,
}

/// The AXON parser.
///
/// Holds the preprocessed lines and the options; every parse call threads its
/// own cursor and accumulators, so a `Parser` can be reused and shared freely.
pub struct Parser<'a> {
    raw: Vec<&'a str>,
    lines: Vec<&'a str>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Preprocesses `input` into lines; nothing is parsed until [`Parser::parse`].
    #[must_use]
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Parser {
            raw: input.split('\n').collect(),
            lines: split_lines(input),
            options,
        }
    }

    /// Parses the whole document.
    ///
    /// # Errors
    ///
    /// The first error from any block aborts the parse; no partial result is returned.
    pub fn parse(&self) -> Result<ParseResult> {
        let mut schemas = Vec::new();
        let mut data_blocks = Vec::new();
        let mut index = 0;

        while index < self.lines.len() {
            let line = self.lines[index];

            if line.starts_with(SCHEMA_DIRECTIVE) {
                let (schema, next) = self.parse_schema(index)?;
                schemas.push(schema);
                index = next;
            } else if line.starts_with(DATA_DIRECTIVE) {
                let (block, next) = self.parse_data_block(index, &schemas)?;
                data_blocks.push(block);
                index = next;
            } else {
                if !line.is_empty() {
                    tracing::trace!(line = index + 1, text = line, "ignoring line outside block");
                }
                index += 1;
            }
        }

        Ok(ParseResult {
            schemas,
            data_blocks,
        })
    }

    /// Walks every data row without coercing it, handing the callback the
    /// resolved schema, the 0-based row index within its block and the raw
    /// trimmed row text.
    ///
    /// # Errors
    ///
    /// Header, schema lookup and strict terminator errors are raised as in
    /// [`Parser::parse`]; an error returned by the callback stops the walk.
    pub fn for_each_row<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(&Schema, usize, &str) -> Result<()>,
    {
        let mut schemas = Vec::new();
        let mut index = 0;

        while index < self.lines.len() {
            let line = self.lines[index];

            if line.starts_with(SCHEMA_DIRECTIVE) {
                let (schema, next) = self.parse_schema(index)?;
                schemas.push(schema);
                index = next;
            } else if line.starts_with(DATA_DIRECTIVE) {
                let (name, _) = self.read_data_header(index)?;
                let schema = resolve_schema(&schemas, name, index + 1)?;
                let (body, next) = self.block_body(index, "data")?;
                for (row_index, row) in body.iter().enumerate() {
                    callback(schema, row_index, row.text)?;
                }
                index = next;
            } else {
                index += 1;
            }
        }

        Ok(())
    }

    /// Parses a `@schema <name>` block starting at `start`.
    ///
    /// Field lines must contain exactly one `:`; anything else is skipped.
    /// Type tokens are not validated here.
    fn parse_schema(&self, start: usize) -> Result<(Schema, usize)> {
        let name = self.lines[start]
            .replacen(SCHEMA_DIRECTIVE, "", 1)
            .trim()
            .to_string();
        let (body, next) = self.block_body(start, "schema")?;

        let mut fields = Vec::new();
        for line in body {
            match parse_field_line(line.text) {
                Some(field) => fields.push(field),
                None => tracing::debug!(
                    schema = %name,
                    line = line.number,
                    text = line.text,
                    "skipping malformed field line (expected 'name:TYPE')"
                ),
            }
        }

        tracing::debug!(schema = %name, fields = fields.len(), "parsed schema");
        Ok((Schema { name, fields }, next))
    }

    /// Parses a `@data <name>[<count>]` block starting at `start`, binding rows to
    /// the first earlier schema with a matching name.
    fn parse_data_block(&self, start: usize, schemas: &[Schema]) -> Result<(DataBlock, usize)> {
        let (name, declared_count) = self.read_data_header(start)?;
        let schema = resolve_schema(schemas, name, start + 1)?;
        let (body, next) = self.block_body(start, "data")?;

        let mut rows = Vec::with_capacity(body.len());
        for line in body {
            let tokens = tokenize(line.text, self.options.delimiter.as_char());
            rows.push(assemble_row(&tokens, schema, line.number, &self.options)?);
        }

        tracing::debug!(
            schema = name,
            declared = declared_count,
            rows = rows.len(),
            "parsed data block"
        );

        if self.options.validate_counts && rows.len() != declared_count {
            return Err(Error::count_mismatch(start + 1, name, declared_count, rows.len()));
        }

        Ok((
            DataBlock {
                schema_name: name.to_string(),
                declared_count,
                rows,
            },
            next,
        ))
    }

    /// Matches the `@data` header at `index`, returning the schema name and the
    /// declared count. A count too large to represent is read as zero.
    fn read_data_header(&self, index: usize) -> Result<(&'a str, usize)> {
        let header = self.lines[index];
        let (name, digits) =
            match_data_header(header).ok_or_else(|| Error::header_format(index + 1, header))?;
        Ok((name, digits.parse().unwrap_or(0)))
    }

    /// Collects the non-blank lines between the header at `start` and its `@end`,
    /// returning them with the index just past the terminator.
    ///
    /// Directives are matched on the fully trimmed line; body text keeps any
    /// whitespace delimiter at its edges (see [`trim_row`]).
    ///
    /// Without `@end` the block runs to end of input, unless strict terminators
    /// are enabled, in which case that and any nested directive are errors.
    fn block_body(&self, start: usize, directive: &str) -> Result<(Vec<BodyLine<'a>>, usize)> {
        let strict = self.options.strict_terminators;
        let mut body = Vec::new();
        let delimiter = self.options.delimiter.as_char();
        let mut index = start + 1;

        while index < self.lines.len() {
            let line = self.lines[index];

            if line == END_DIRECTIVE {
                return Ok((body, index + 1));
            }
            if strict && (line.starts_with(SCHEMA_DIRECTIVE) || line.starts_with(DATA_DIRECTIVE)) {
                return Err(Error::unterminated_block(start + 1, directive));
            }
            let text = trim_row(self.raw[index], delimiter);
            if !text.is_empty() {
                body.push(BodyLine {
                    number: index + 1,
                    text,
                });
            }
            index += 1;
        }

        if strict {
            return Err(Error::unterminated_block(start + 1, directive));
        }
        Ok((body, index))
    }
}

/// Parses `name:TYPE` or `name:TYPE?`. Returns `None` unless the line has exactly one `:`.
fn parse_field_line(line: &str) -> Option<FieldDefinition> {
    let (name, type_token) = line.split_once(':')?;
    if type_token.contains(':') {
        return None;
    }

    let type_token = type_token.trim();
    let (code, nullable) = match type_token.strip_suffix('?') {
        Some(code) => (code, true),
        None => (type_token, false),
    };

    Some(FieldDefinition {
        name: name.trim().to_string(),
        field_type: AxonType::from_code(code),
        nullable,
    })
}

fn resolve_schema<'s>(schemas: &'s [Schema], name: &str, line: usize) -> Result<&'s Schema> {
    schemas
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| Error::schema_not_found(line, name))
}

/// Finds the leftmost `@data <ident>[<digits>]` in the header, returning the
/// identifier and the digit run. Text after `]` is ignored.
fn match_data_header(header: &str) -> Option<(&str, &str)> {
    header
        .match_indices(DATA_DIRECTIVE)
        .find_map(|(pos, _)| match_data_header_at(&header[pos + DATA_DIRECTIVE.len()..]))
}

fn match_data_header_at(rest: &str) -> Option<(&str, &str)> {
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }

    let name_len = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(trimmed.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = trimmed.split_at(name_len);

    let rest = rest.strip_prefix('[')?;
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_len == 0 {
        return None;
    }
    let (digits, rest) = rest.split_at(digits_len);

    rest.starts_with(']').then_some((name, digits))
}
