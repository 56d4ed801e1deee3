//! The vCard property bag.
//!
//! A [`VCard`] is an ordered list of [`VCardProperty`]s. Each property keeps
//! its group, its parameters in source order, a typed [`VCardValue`] and
//! the raw text it was parsed from, so that properties nobody edits can be
//! written back unchanged.
//!
//! ```rust
//! use cardshift_rfc::rfc::vcard::core::{VCard, VCardProperty, VCardVersion};
//!
//! let mut card = VCard::with_version(VCardVersion::V4);
//! card.add_property(VCardProperty::text("FN", "Erika Mustermann"));
//! card.add_property(VCardProperty::grouped_text("item1", "EMAIL", "erika@example.com"));
//! assert_eq!(card.group_members("item1").len(), 1);
//! ```

mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::{VCardParameter, encodings, types};
pub use property::{VCardProperty, names};
pub use structured::{Address, Organization, StructuredName};
pub use value::VCardValue;
pub use vcard::{VCard, VCardVersion};
