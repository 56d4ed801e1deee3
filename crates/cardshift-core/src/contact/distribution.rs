//! Distribution-list entries of group contacts.

use serde::{Deserialize, Serialize};

/// What a distribution-list entry points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberReference {
    /// A bare email address with no backing contact.
    #[default]
    Independent,
    /// Another contact, identified by its UID.
    Contact { uid: String },
}

/// One member of a distribution list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionListEntry {
    pub display_name: Option<String>,
    pub email: String,
    pub reference: MemberReference,
}

impl DistributionListEntry {
    /// Creates an entry for a bare email address.
    #[must_use]
    pub fn independent(display_name: Option<String>, email: impl Into<String>) -> Self {
        Self {
            display_name,
            email: email.into(),
            reference: MemberReference::Independent,
        }
    }

    /// Creates an entry referencing another contact.
    #[must_use]
    pub fn contact(
        display_name: Option<String>,
        email: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            display_name,
            email: email.into(),
            reference: MemberReference::Contact { uid: uid.into() },
        }
    }

    #[must_use]
    pub fn contact_uid(&self) -> Option<&str> {
        match &self.reference {
            MemberReference::Contact { uid } => Some(uid),
            MemberReference::Independent => None,
        }
    }
}
