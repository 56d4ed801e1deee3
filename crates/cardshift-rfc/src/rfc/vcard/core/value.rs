//! Typed property values.
//!
//! The parser types a value once, from the property name, the `VALUE`
//! parameter and the transfer encoding. Anything it cannot type safely,
//! such as extension properties and quoted-printable text, stays
//! [`VCardValue::Unknown`] and is written back exactly as read.

use chrono::{DateTime, NaiveDate, Utc};

use super::structured::{Address, Organization, StructuredName};

#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Unescaped text.
    Text(String),
    /// Comma-separated text (`NICKNAME`, `CATEGORIES`).
    TextList(Vec<String>),
    Uri(String),
    /// A full calendar date (`BDAY`, `ANNIVERSARY`).
    Date(NaiveDate),
    /// `REV`.
    Timestamp(DateTime<Utc>),
    StructuredName(StructuredName),
    Address(Address),
    Organization(Organization),
    /// Inline `ENCODING=b` / `ENCODING=BASE64` data.
    Binary(Vec<u8>),
    Unknown(String),
}

impl VCardValue {
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Self::Organization(o) => Some(o),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(data) => Some(data),
            _ => None,
        }
    }
}
