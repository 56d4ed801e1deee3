//! Problems found while reading a vCard document.
//!
//! The strict entry points fail on the first [`ParseError`]; the lenient
//! parser collects them as issues and keeps going.

pub type ParseResult<T> = Result<T, ParseError>;

/// A parse problem tied to a 1-based physical line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Content found between cards.
    #[must_use]
    pub fn outside_card(line: usize, found: &str) -> Self {
        let shown: String = found.chars().take(40).collect();
        Self::new(
            ParseErrorKind::OutsideCard,
            line,
            format!("{shown:?} is not inside BEGIN:VCARD/END:VCARD"),
        )
    }

    /// A card, or a card nested in one, that the document never closes.
    #[must_use]
    pub fn unterminated(line: usize, nested: bool) -> Self {
        let what = if nested { "nested vCard" } else { "vCard" };
        Self::new(
            ParseErrorKind::UnterminatedCard,
            line,
            format!("{what} starting here has no END:VCARD"),
        )
    }

    #[must_use]
    pub fn invalid_value(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, line, message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("no vCard")]
    NoVCard,
    #[error("unterminated vCard")]
    UnterminatedCard,
    #[error("content outside a vCard")]
    OutsideCard,
    /// A content line without the `:` before its value.
    #[error("missing value separator")]
    MissingSeparator,
    #[error("invalid property name")]
    InvalidPropertyName,
    #[error("invalid parameter")]
    InvalidParameter,
    #[error("invalid value")]
    InvalidValue,
    #[error("invalid date/time")]
    InvalidDateTime,
}
