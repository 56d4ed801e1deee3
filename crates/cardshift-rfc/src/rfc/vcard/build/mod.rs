//! Writing cards.
//!
//! ## Usage
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::{VCard, VCardProperty, VCardVersion, serialize_single};
//!
//! let mut card = VCard::with_version(VCardVersion::V21);
//! let mut tel = VCardProperty::text("TEL", "(0221) 9999123");
//! tel.add_type("work");
//! tel.add_type("voice");
//! card.add_property(tel);
//!
//! let output = serialize_single(&card);
//! assert!(output.contains("TEL;WORK;VOICE:(0221) 9999123\r\n"));
//! ```
//!
//! Lines are folded at 75 octets without splitting a UTF-8 sequence.
//! Parameter values use RFC 6868 carets and are quoted only when they
//! hold a separator or a quote. 2.1 output writes `TYPE` values as bare flags.

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_single};
