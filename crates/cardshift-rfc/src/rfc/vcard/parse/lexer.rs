//! Unfolding and content-line splitting.
//!
//! Folding follows RFC 6350 §3.2: a line starting with a space or tab
//! continues the previous one. 2.1 producers also continue
//! quoted-printable values with a trailing `=` and no leading whitespace.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::{VCardParameter, encodings};

/// An unfolded line and the physical line it started on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub line: usize,
    pub text: String,
}

/// Unfolds `input` into logical lines. Accepts CRLF and bare LF; blank
/// lines are dropped.
#[must_use]
pub fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines: Vec<LogicalLine> = Vec::new();

    for (idx, physical) in input.split('\n').enumerate() {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        if let Some(prev) = lines.last_mut() {
            if continues_quoted_printable(&prev.text) {
                prev.text.pop();
                prev.text.push_str(physical);
                continue;
            }
            if let Some(rest) = physical.strip_prefix([' ', '\t']) {
                prev.text.push_str(rest);
                continue;
            }
        }

        if !physical.trim().is_empty() {
            lines.push(LogicalLine {
                line: idx + 1,
                text: physical.to_string(),
            });
        }
    }

    lines
}

/// A quoted-printable line whose value ends in a soft break (`=`).
fn continues_quoted_printable(line: &str) -> bool {
    line.ends_with('=')
        && find_value_separator(line).is_some_and(|colon| {
            line[..colon]
                .to_ascii_uppercase()
                .contains(encodings::QUOTED_PRINTABLE)
        })
}

/// A content line split into its parts; the value is still raw.
#[derive(Debug, Clone)]
pub struct ContentLine {
    pub group: Option<String>,
    /// Uppercase.
    pub name: String,
    pub params: Vec<VCardParameter>,
    pub value: String,
}

/// Splits `[group.]NAME[;param[=value]]*:value`.
///
/// ## Errors
/// Returns [`ParseErrorKind::MissingSeparator`] without an unquoted colon,
/// [`ParseErrorKind::InvalidPropertyName`] for an empty or non-token name
/// and [`ParseErrorKind::InvalidParameter`] for `;=value`.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::MissingSeparator,
            line_num,
            "content line has no ':' before its value",
        )
    })?;
    let (head, value) = (&line[..colon], &line[colon + 1..]);

    let (group, head) = split_group(head);
    let (name, params) = head.split_once(';').unwrap_or((head, ""));
    let name = name.trim();
    if !is_token(name) {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    Ok(ContentLine {
        group: group.map(str::to_string),
        name: name.to_ascii_uppercase(),
        params: parse_parameters(params, line_num)?,
        value: value.to_string(),
    })
}

/// Names and groups: letters, digits and `-`.
fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Byte offsets of `sep` outside double quotes.
fn unquoted(s: &str, sep: char) -> impl Iterator<Item = usize> + '_ {
    let mut in_quotes = false;
    s.char_indices().filter_map(move |(i, c)| {
        if c == '"' {
            in_quotes = !in_quotes;
        }
        (c == sep && !in_quotes).then_some(i)
    })
}

fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for i in unquoted(s, sep) {
        parts.push(&s[start..i]);
        start = i + sep.len_utf8();
    }
    parts.push(&s[start..]);
    parts
}

/// The colon that ends the parameters. Quoted parameter values may hold
/// colons of their own.
fn find_value_separator(line: &str) -> Option<usize> {
    unquoted(line, ':').next()
}

/// `item1.TEL;...` yields `item1`. A dot inside the parameters is not a
/// group separator.
fn split_group(head: &str) -> (Option<&str>, &str) {
    let name_part = head.split(';').next().unwrap_or(head);
    match name_part.split_once('.') {
        Some((group, _)) if is_token(group) => (Some(group), &head[group.len() + 1..]),
        _ => (None, head),
    }
}

/// Bare 2.1 tokens are sorted out here: encodings become
/// `ENCODING=<token>` and the rest is gathered into one `TYPE`.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut bare_types = Vec::new();

    for segment in split_unquoted(s, ';') {
        if let Some((name, values)) = segment.split_once('=') {
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameter,
                    line_num,
                    "parameter without a name",
                ));
            }
            params.push(VCardParameter::multi(name, parse_param_values(values)));
        } else {
            match segment.trim() {
                "" => {}
                token if encodings::is_encoding_token(token) => {
                    params.push(VCardParameter::encoding(token));
                }
                token => bare_types.push(token.to_string()),
            }
        }
    }

    if !bare_types.is_empty() {
        params.push(VCardParameter::multi("TYPE", bare_types));
    }
    Ok(params)
}

/// Comma-separated values; quotes are removed and RFC 6868 caret escapes
/// resolved. `NAME=` has no values.
fn parse_param_values(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    split_unquoted(s, ',')
        .into_iter()
        .map(|value| decode_caret(&value.replace('"', "")))
        .collect()
}

fn decode_caret(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '^' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\'') => out.push('"'),
            Some('^') => out.push('^'),
            Some(other) => {
                out.push('^');
                out.push(other);
            }
            None => out.push('^'),
        }
    }
    out
}
