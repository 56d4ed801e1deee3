//! The card: a version plus an ordered property list.

use std::fmt;

use super::property::{VCardProperty, names};
use super::structured::{Address, Organization, StructuredName};

/// Supported vCard versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (versit).
    V21,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    pub const ALL: [Self; 3] = [Self::V21, Self::V3, Self::V4];

    /// Reads a `VERSION` value. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s.trim())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed or to-be-written card.
///
/// `VERSION` is not kept in `properties`; the writer emits it from
/// `version`. Every other property keeps its position, so a card read and
/// written again comes out in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct VCard {
    pub version: VCardVersion,
    /// The `VERSION` value exactly as found in the source, `None` if absent.
    pub declared_version: Option<String>,
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    #[must_use]
    pub fn new() -> Self {
        Self::with_version(VCardVersion::default())
    }

    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            declared_version: None,
            properties: Vec::new(),
        }
    }

    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// All `name` properties, in card order.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> Vec<&VCardProperty> {
        self.properties.iter().filter(|p| p.is(name)).collect()
    }

    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties.iter().find(|p| p.is(name))
    }

    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.is(name))
    }

    /// Index of the first `name` property.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.is(name))
    }

    /// Properties sharing `group`, compared case-insensitively.
    #[must_use]
    pub fn group_members(&self, group: &str) -> Vec<&VCardProperty> {
        self.properties
            .iter()
            .filter(|p| {
                p.group
                    .as_deref()
                    .is_some_and(|g| g.eq_ignore_ascii_case(group))
            })
            .collect()
    }

    /// Removes every `name` property and returns how many went.
    pub fn remove_properties(&mut self, name: &str) -> usize {
        let before = self.properties.len();
        self.properties.retain(|p| !p.is(name));
        before - self.properties.len()
    }

    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property(names::FN)?.as_text()
    }

    #[must_use]
    pub fn name(&self) -> Option<&StructuredName> {
        self.get_property(names::N)?.value.as_structured_name()
    }

    #[must_use]
    pub fn addresses(&self) -> Vec<&Address> {
        self.properties
            .iter()
            .filter(|p| p.is(names::ADR))
            .filter_map(|p| p.value.as_address())
            .collect()
    }

    #[must_use]
    pub fn organization(&self) -> Option<&Organization> {
        self.get_property(names::ORG)?.value.as_organization()
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.get_property(names::NOTE)?.as_text()
    }
}

impl Default for VCard {
    fn default() -> Self {
        Self::new()
    }
}
