//! Row tokenizer and escape decoding.
//!
//! A data row is split on the field delimiter in a single left-to-right scan:
//!
//! - a backslash escapes the next character (`\n`, `\t`, `\r` decode to control
//!   characters, anything else to itself)
//! - a double quote toggles a literal region and is dropped from the token
//! - the delimiter closes the current token unless inside quotes
//!
//! A trailing delimiter yields one extra empty token, while an empty buffer at
//! the end of a line without a trailing delimiter yields none.
//!
//! ## Examples
//!
//! ```rust
//! use serde_axon::tokenizer::tokenize;
//!
//! assert_eq!(tokenize(r#"1|"a|b"|2"#, '|'), vec!["1", "a|b", "2"]);
//! assert_eq!(tokenize("a|", '|'), vec!["a", ""]);
//! assert!(tokenize("", '|').is_empty());
//! ```

/// Decodes the character following a backslash.
#[inline]
#[must_use]
pub const fn unescape_char(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Splits one row line into raw tokens, honoring quotes and escapes.
#[must_use]
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut escape_pending = false;

    for c in line.chars() {
        if escape_pending {
            current.push(unescape_char(c));
            escape_pending = false;
        } else if c == '\\' {
            escape_pending = true;
        } else if c == '"' {
            in_quote = !in_quote;
        } else if c == delimiter && !in_quote {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() || line.ends_with(delimiter) {
        tokens.push(current);
    }

    tokens
}

/// Decodes backslash sequences in a standalone string. Quotes are left untouched
/// and a dangling trailing backslash is dropped.
///
/// # Examples
///
/// ```rust
/// use serde_axon::tokenizer::unescape;
///
/// assert_eq!(unescape(r"a\nb"), "a\nb");
/// assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
/// assert_eq!(unescape("plain"), "plain");
/// ```
#[must_use]
pub fn unescape(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len());
    let mut escaped = false;

    for c in value.chars() {
        if escaped {
            result.push(unescape_char(c));
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else {
            result.push(c);
        }
    }

    result
}

/// Counts the delimiter-separated fields of a raw row without decoding them.
///
/// An empty row has zero fields; otherwise every unquoted, unescaped delimiter
/// adds one to a base of one.
///
/// # Examples
///
/// ```rust
/// use serde_axon::tokenizer::count_fields;
///
/// assert_eq!(count_fields("", '|'), 0);
/// assert_eq!(count_fields("1|Alice|_", '|'), 3);
/// assert_eq!(count_fields(r#"1|"a|b"|x\|y"#, '|'), 3);
/// ```
#[must_use]
pub fn count_fields(row: &str, delimiter: char) -> usize {
    if row.is_empty() {
        return 0;
    }

    let mut count = 1;
    let mut in_quote = false;
    let mut escaped = false;

    for c in row.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            in_quote = !in_quote;
        } else if c == delimiter && !in_quote {
            count += 1;
        }
    }

    count
}

/// Returns the raw, undecoded text of the field at `index`, borrowing from `row`.
///
/// Quotes and backslashes are kept as written. Returns `None` when the row has
/// fewer fields.
///
/// # Examples
///
/// ```rust
/// use serde_axon::tokenizer::field_at;
///
/// let row = r#"1|"a|b"|2"#;
/// assert_eq!(field_at(row, 1, '|'), Some(r#""a|b""#));
/// assert_eq!(field_at(row, 2, '|'), Some("2"));
/// assert_eq!(field_at(row, 3, '|'), None);
/// ```
#[must_use]
pub fn field_at(row: &str, index: usize, delimiter: char) -> Option<&str> {
    let mut current = 0;
    let mut start = 0;
    let mut in_quote = false;
    let mut escaped = false;

    for (pos, c) in row.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            in_quote = !in_quote;
        } else if c == delimiter && !in_quote {
            if current == index {
                return Some(&row[start..pos]);
            }
            current += 1;
            start = pos + c.len_utf8();
        }
    }

    (current == index).then(|| &row[start..])
}
