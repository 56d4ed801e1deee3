//! Reading cards.
//!
//! ## Usage
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N;CHARSET=UTF-8:Mustermann;Erika\r\n\
//! TEL;WORK;VOICE:(0221) 9999123\r\n\
//! END:VCARD\r\n";
//!
//! let outcome = parse::parse_lenient(input);
//! assert!(outcome.issues.is_empty());
//! assert!(outcome.cards[0].properties[1].has_type("work"));
//! ```
//!
//! Reads 2.1, 3.0 and 4.0 alike. Folded lines and quoted-printable soft
//! breaks are joined first. Bare 2.1 parameters (`;WORK;VOICE`,
//! `;QUOTED-PRINTABLE`) are normalized to `TYPE` and `ENCODING`. Values
//! are typed by property name; quoted-printable and `X-` values stay raw.

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, LogicalLine, logical_lines, parse_content_line};
pub use parser::{ParseOutcome, parse, parse_lenient, parse_single};
pub use values::{
    decode_base64, parse_address, parse_date, parse_organization, parse_structured_name,
    parse_timestamp, split_component, split_structured, unescape_text,
};
