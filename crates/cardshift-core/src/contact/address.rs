//! Postal addresses attached to a contact.

use serde::{Deserialize, Serialize};

/// Which of the three address blocks of a contact an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressKind {
    Business,
    Home,
    Other,
}

impl AddressKind {
    pub const ALL: [Self; 3] = [Self::Business, Self::Home, Self::Other];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Home => "home",
            Self::Other => "other",
        }
    }
}

/// A single component of a [`PostalAddress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressPart {
    Street,
    City,
    Region,
    PostalCode,
    Country,
    Label,
}

impl AddressPart {
    pub const ALL: [Self; 6] = [
        Self::Street,
        Self::City,
        Self::Region,
        Self::PostalCode,
        Self::Country,
        Self::Label,
    ];
}

/// A postal address. Every component is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Free-text formatted address overriding the components for display.
    pub label: Option<String>,
}

impl PostalAddress {
    /// Returns whether no component is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        AddressPart::ALL.iter().all(|part| self.part(*part).is_none())
    }

    /// Returns whether any of the structured components (everything but the label) is set.
    #[must_use]
    pub fn has_components(&self) -> bool {
        AddressPart::ALL
            .iter()
            .filter(|part| **part != AddressPart::Label)
            .any(|part| self.part(*part).is_some())
    }

    #[must_use]
    pub fn part(&self, part: AddressPart) -> Option<&str> {
        match part {
            AddressPart::Street => self.street.as_deref(),
            AddressPart::City => self.city.as_deref(),
            AddressPart::Region => self.region.as_deref(),
            AddressPart::PostalCode => self.postal_code.as_deref(),
            AddressPart::Country => self.country.as_deref(),
            AddressPart::Label => self.label.as_deref(),
        }
    }

    pub fn part_mut(&mut self, part: AddressPart) -> &mut Option<String> {
        match part {
            AddressPart::Street => &mut self.street,
            AddressPart::City => &mut self.city,
            AddressPart::Region => &mut self.region,
            AddressPart::PostalCode => &mut self.postal_code,
            AddressPart::Country => &mut self.country,
            AddressPart::Label => &mut self.label,
        }
    }
}
