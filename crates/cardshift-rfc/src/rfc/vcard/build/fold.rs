//! Content line folding (RFC 6350 §3.2).

/// Maximum line length in octets, excluding the line break.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line at 75 octets.
///
/// Continuation segments are joined with CRLF followed by a single space and
/// never split a UTF-8 sequence. The returned text has no trailing line
/// break.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut segment_len = 0;
    // The leading space of a continuation counts towards its length.
    let mut limit = MAX_LINE_OCTETS;

    for c in line.chars() {
        let width = c.len_utf8();
        if segment_len + width > limit {
            result.push_str("\r\n ");
            segment_len = 1;
            limit = MAX_LINE_OCTETS;
        }
        result.push(c);
        segment_len += width;
    }

    result
}
