//! Value grammars: text escapes, structured values, dates and inline binary.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::{Address, Organization, StructuredName};

/// What a backslash escape stands for. Unknown escapes (`\\:` from some
/// Apple exports) keep their backslash.
fn unescaped(c: char) -> Option<char> {
    match c {
        'n' | 'N' => Some('\n'),
        ',' | ';' | '\\' => Some(c),
        _ => None,
    }
}

/// Resolves `\n`, `\,`, `\;` and `\\`.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek().copied().filter(|_| c == '\\').and_then(unescaped) {
            Some(resolved) => {
                chars.next();
                out.push(resolved);
            }
            None => out.push(c),
        }
    }
    out
}

/// Splits on semicolons that are not escaped. Parts stay escaped.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == ';' {
            parts.push(&s[start..i]);
            start = i + 1;
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits on commas that are not escaped and unescapes each part. An
/// empty value has no parts.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek().copied().filter(|_| c == '\\').and_then(unescaped) {
            Some(resolved) => {
                chars.next();
                current.push(resolved);
            }
            None if c == ',' => parts.push(std::mem::take(&mut current)),
            None => current.push(c),
        }
    }
    parts.push(current);
    parts
}

fn component(parts: &[&str], index: usize) -> Vec<String> {
    parts
        .get(index)
        .map(|part| split_component(part))
        .unwrap_or_default()
}

/// `N` value. Missing trailing components stay empty.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);
    StructuredName {
        family: component(&parts, 0),
        given: component(&parts, 1),
        additional: component(&parts, 2),
        prefixes: component(&parts, 3),
        suffixes: component(&parts, 4),
    }
}

/// `ADR` value. Missing trailing components stay empty.
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);
    Address {
        po_box: component(&parts, 0),
        extended: component(&parts, 1),
        street: component(&parts, 2),
        locality: component(&parts, 3),
        region: component(&parts, 4),
        postal_code: component(&parts, 5),
        country: component(&parts, 6),
    }
}

#[must_use]
pub fn parse_organization(value: &str) -> Organization {
    let mut parts = split_structured(value).into_iter().map(unescape_text);
    Organization {
        name: parts.next().unwrap_or_default(),
        units: parts.collect(),
    }
}

/// Parses a full calendar date.
///
/// Accepts `YYYYMMDD` and `YYYY-MM-DD`, optionally followed by a time part
/// (`T...` or a space), which is ignored.
///
/// ## Errors
/// Returns an error for truncated dates without a year (`--0315`) and for
/// anything that is not a valid date.
pub fn parse_date(value: &str, line_num: usize) -> ParseResult<NaiveDate> {
    let s = value.trim();

    if s.starts_with("--") {
        return Err(ParseError::new(
            ParseErrorKind::InvalidDateTime,
            line_num,
            format!("date without year: {s}"),
        ));
    }

    let date_part = s.split(['T', 't', ' ']).next().unwrap_or(s);

    NaiveDate::parse_from_str(date_part, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y-%m-%d"))
        .map_err(|e| {
            ParseError::new(
                ParseErrorKind::InvalidDateTime,
                line_num,
                format!("invalid date {s}: {e}"),
            )
        })
}

/// Parses a timestamp value (REV property).
///
/// Accepts the basic form `YYYYMMDDTHHMMSSZ`, RFC 3339, and a floating
/// `YYYYMMDDTHHMMSS` which is taken as UTC.
///
/// ## Errors
/// Returns an error if the string is not a valid timestamp format.
pub fn parse_timestamp(s: &str, line_num: usize) -> ParseResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let floating = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    NaiveDateTime::parse_from_str(floating, "%Y%m%dT%H%M%S")
        .or_else(|_| NaiveDateTime::parse_from_str(floating, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            ParseError::new(
                ParseErrorKind::InvalidDateTime,
                line_num,
                format!("invalid timestamp {s}: {e}"),
            )
        })
}

/// Decodes inline base64 data, ignoring embedded whitespace.
///
/// ## Errors
/// Returns an error if the data is not valid base64.
pub fn decode_base64(value: &str, line_num: usize) -> ParseResult<Vec<u8>> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact.as_bytes()).map_err(|e| {
        ParseError::invalid_value(line_num, format!("invalid base64 data: {e}"))
    })
}
