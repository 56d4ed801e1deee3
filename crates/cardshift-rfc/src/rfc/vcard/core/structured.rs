//! Semicolon-separated values of `N`, `ADR` and `ORG`.

/// `N`: family;given;additional;prefixes;suffixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: Vec<String>,
    pub given: Vec<String>,
    pub additional: Vec<String>,
    /// "Dr.", "Prof."
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl StructuredName {
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Components in wire order.
    #[must_use]
    pub fn components(&self) -> [&[String]; 5] {
        [
            &self.family,
            &self.given,
            &self.additional,
            &self.prefixes,
            &self.suffixes,
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components()
            .iter()
            .flat_map(|c| c.iter())
            .all(String::is_empty)
    }
}

/// `ADR`: PO box;extended;street;locality;region;postal code;country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub po_box: Vec<String>,
    pub extended: Vec<String>,
    pub street: Vec<String>,
    pub locality: Vec<String>,
    pub region: Vec<String>,
    pub postal_code: Vec<String>,
    pub country: Vec<String>,
}

impl Address {
    pub const COMPONENTS: usize = 7;

    /// Components in wire order.
    #[must_use]
    pub fn components(&self) -> [&[String]; Self::COMPONENTS] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }
}

/// `ORG`: name followed by units, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub units: Vec<String>,
}
