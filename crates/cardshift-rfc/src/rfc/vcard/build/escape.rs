//! Escaping for values and parameter values.

/// Escapes text and structured components: `\`, newline, `,` and `;`.
///
/// `\r` is dropped, so `\r\n` and `\n` both come out as one `\n` escape.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let escaped = match c {
            '\r' => continue,
            '\n' => "\\n",
            '\\' => "\\\\",
            ',' => "\\,",
            ';' => "\\;",
            _ => {
                out.push(c);
                continue;
            }
        };
        out.push_str(escaped);
    }
    out
}

/// RFC 6868 caret encoding. The flag tells whether the value has to be
/// quoted because it holds a separator or a double quote.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut out = String::with_capacity(s.len());
    let mut quote = false;

    for c in s.chars() {
        match c {
            '^' => out.push_str("^^"),
            '\n' => out.push_str("^n"),
            '"' => {
                quote = true;
                out.push_str("^'");
            }
            c if c.is_control() => {}
            c => {
                quote |= matches!(c, ':' | ';' | ',');
                out.push(c);
            }
        }
    }

    (out, quote)
}
