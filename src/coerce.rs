//! Typed value coercion and row assembly.
//!
//! Tokens bind to schema fields by position. The null sentinel is checked
//! before coercion and yields [`AxonValue::Null`] for every type, nullable or not.

use crate::options::ParseOptions;
use crate::schema::{FieldDefinition, Schema};
use crate::tokenizer::unescape;
use crate::{AxonType, AxonValue, Error, Result, Row};
use chrono::DateTime;

/// Converts one raw token to the field's declared type.
///
/// Unknown type tags return the raw token unchanged as a string. Booleans are
/// lenient unless `options.strict_booleans` is set: `1` is true and every other
/// token is false.
///
/// # Errors
///
/// Returns [`Error::ValueFormat`] when an integer, float or timestamp token is
/// malformed, or a strict boolean is neither `0` nor `1`.
///
/// # Examples
///
/// ```rust
/// use serde_axon::{coerce_value, AxonType, AxonValue, FieldDefinition, ParseOptions};
///
/// let options = ParseOptions::new();
/// let age = FieldDefinition::new("age", AxonType::Integer, true);
///
/// assert_eq!(coerce_value("28", &age, 1, &options).unwrap(), AxonValue::Integer(28));
/// assert!(coerce_value("notanumber", &age, 1, &options).is_err());
/// ```
pub fn coerce_value(
    token: &str,
    field: &FieldDefinition,
    line: usize,
    options: &ParseOptions,
) -> Result<AxonValue> {
    let fail = |reason: String| Error::value_format(line, &field.name, &field.field_type, token, reason);

    match &field.field_type {
        AxonType::String => Ok(AxonValue::String(unescape(token))),
        AxonType::Integer => token
            .parse::<i64>()
            .map(AxonValue::Integer)
            .map_err(|e| fail(e.to_string())),
        AxonType::Float => token
            .parse::<f64>()
            .map(AxonValue::Float)
            .map_err(|e| fail(e.to_string())),
        AxonType::Boolean => match token {
            "1" => Ok(AxonValue::Boolean(true)),
            "0" => Ok(AxonValue::Boolean(false)),
            _ if options.strict_booleans => Err(fail("expected 0 or 1".to_string())),
            _ => Ok(AxonValue::Boolean(false)),
        },
        AxonType::Timestamp => {
            // chrono also takes ' ' or 't' between date and time, and a lowercase 'z'
            if token.as_bytes().get(10) != Some(&b'T') || token.ends_with('z') {
                return Err(fail("expected RFC 3339 'YYYY-MM-DDThh:mm:ssZ' form".to_string()));
            }
            DateTime::parse_from_rfc3339(token)
                .map(AxonValue::Timestamp)
                .map_err(|e| fail(e.to_string()))
        }
        AxonType::Unknown(_) => Ok(AxonValue::String(token.to_string())),
    }
}

/// Binds tokens to the schema's fields positionally.
///
/// Missing trailing tokens leave their fields absent; surplus tokens are ignored.
///
/// # Errors
///
/// Propagates the first coercion failure; no partial row is returned.
pub fn assemble_row(
    tokens: &[String],
    schema: &Schema,
    line: usize,
    options: &ParseOptions,
) -> Result<Row> {
    let mut row = Row::with_capacity(schema.fields.len().min(tokens.len()));

    for (field, token) in schema.fields.iter().zip(tokens) {
        let value = if *token == options.null_sentinel {
            AxonValue::Null
        } else {
            coerce_value(token, field, line, options)?
        };
        row.insert(field.name.clone(), value);
    }

    Ok(row)
}
