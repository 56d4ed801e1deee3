//! Property value codecs.
//!
//! Untyped access to the property bag stays in this module: mappings ask for
//! decoded text, dates, images or slot assignments and never look at
//! `ENCODING`, `CHARSET` or raw values themselves.

pub mod address;
pub mod date;
pub mod photo;
pub mod text;
pub mod types;
