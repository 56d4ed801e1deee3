//! Named access to the string-typed fields of a [`Contact`](super::Contact).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::address::{AddressKind, AddressPart};

/// The telephone slots a contact offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneSlot {
    Business1,
    Business2,
    BusinessFax,
    Home1,
    Home2,
    HomeFax,
    Cellular1,
    Cellular2,
    Pager,
    Car,
    Isdn,
    Other,
    OtherFax,
}

impl PhoneSlot {
    pub const ALL: [Self; 13] = [
        Self::Business1,
        Self::Business2,
        Self::BusinessFax,
        Self::Home1,
        Self::Home2,
        Self::HomeFax,
        Self::Cellular1,
        Self::Cellular2,
        Self::Pager,
        Self::Car,
        Self::Isdn,
        Self::Other,
        Self::OtherFax,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business1 => "telephone_business1",
            Self::Business2 => "telephone_business2",
            Self::BusinessFax => "fax_business",
            Self::Home1 => "telephone_home1",
            Self::Home2 => "telephone_home2",
            Self::HomeFax => "fax_home",
            Self::Cellular1 => "cellular_telephone1",
            Self::Cellular2 => "cellular_telephone2",
            Self::Pager => "telephone_pager",
            Self::Car => "telephone_car",
            Self::Isdn => "telephone_isdn",
            Self::Other => "telephone_other",
            Self::OtherFax => "fax_other",
        }
    }
}

/// The email slots a contact offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailSlot {
    /// `email1`
    Business,
    /// `email2`
    Home,
    /// `email3`
    Other,
}

impl EmailSlot {
    pub const ALL: [Self; 3] = [Self::Business, Self::Home, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "email1",
            Self::Home => "email2",
            Self::Other => "email3",
        }
    }
}

/// A string-typed contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Uid,
    DisplayName,
    GivenName,
    SurName,
    MiddleName,
    /// Honorific prefix.
    Title,
    Suffix,
    Nickname,
    Company,
    Department,
    /// Job title (vCard `TITLE`).
    Position,
    /// Role (vCard `ROLE`).
    Profession,
    Url,
    Note,
    Email(EmailSlot),
    Telephone(PhoneSlot),
    Address(AddressKind, AddressPart),
}

impl ContactField {
    const SCALAR: [Self; 14] = [
        Self::Uid,
        Self::DisplayName,
        Self::GivenName,
        Self::SurName,
        Self::MiddleName,
        Self::Title,
        Self::Suffix,
        Self::Nickname,
        Self::Company,
        Self::Department,
        Self::Position,
        Self::Profession,
        Self::Url,
        Self::Note,
    ];

    /// Returns every string-typed field in a stable order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut fields = Self::SCALAR.to_vec();
        fields.extend(EmailSlot::ALL.into_iter().map(Self::Email));
        fields.extend(PhoneSlot::ALL.into_iter().map(Self::Telephone));
        for kind in AddressKind::ALL {
            fields.extend(
                AddressPart::ALL
                    .into_iter()
                    .map(|part| Self::Address(kind, part)),
            );
        }
        fields
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uid => write!(f, "uid"),
            Self::DisplayName => write!(f, "display_name"),
            Self::GivenName => write!(f, "given_name"),
            Self::SurName => write!(f, "sur_name"),
            Self::MiddleName => write!(f, "middle_name"),
            Self::Title => write!(f, "title"),
            Self::Suffix => write!(f, "suffix"),
            Self::Nickname => write!(f, "nickname"),
            Self::Company => write!(f, "company"),
            Self::Department => write!(f, "department"),
            Self::Position => write!(f, "position"),
            Self::Profession => write!(f, "profession"),
            Self::Url => write!(f, "url"),
            Self::Note => write!(f, "note"),
            Self::Email(slot) => write!(f, "{}", slot.as_str()),
            Self::Telephone(slot) => write!(f, "{}", slot.as_str()),
            Self::Address(kind, part) => write!(f, "address_{}.{part:?}", kind.as_str()),
        }
    }
}
