//! vCard 2.1, 3.0 and 4.0 as an ordered property bag.
//!
//! [`parse_lenient`] reads whatever a producer emitted and reports the lines
//! it had to skip; [`parse`] and [`parse_single`] fail on the first problem
//! instead. [`serialize_single`] writes a card back in property order,
//! folding long lines and spelling `TYPE` the way the card's version
//! expects.
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::{parse_lenient, serialize_single};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Erika Mustermann\r\n\
//! X-ABUID:5AD380FD\r\n\
//! END:VCARD\r\n";
//!
//! let outcome = parse_lenient(input);
//! assert!(outcome.issues.is_empty());
//! assert_eq!(outcome.cards[0].formatted_name(), Some("Erika Mustermann"));
//! assert_eq!(serialize_single(&outcome.cards[0]), input);
//! ```

pub mod build;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{serialize, serialize_single};
pub use core::{
    Address, Organization, StructuredName, VCard, VCardParameter, VCardProperty,
    VCardValue, VCardVersion,
};
pub use parse::{
    ParseError, ParseErrorKind, ParseOutcome, ParseResult, parse, parse_lenient, parse_single,
};
