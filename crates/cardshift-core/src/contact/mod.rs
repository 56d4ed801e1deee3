//! The contact record.
//!
//! [`Contact`] is a flat bag of independently optional fields. `None` means
//! "not set" and is distinct from an empty string. The vCard engine reads and
//! writes it through the named accessors below; telephone and email numbers
//! are addressed by [`PhoneSlot`] and [`EmailSlot`], addresses by
//! [`AddressKind`].

mod address;
mod distribution;
mod field;

#[cfg(test)]
mod tests;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_COLOR_LABEL;
use crate::error::{CoreError, CoreResult};

pub use address::{AddressKind, AddressPart, PostalAddress};
pub use distribution::{DistributionListEntry, MemberReference};
pub use field::{ContactField, EmailSlot, PhoneSlot};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub uid: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,

    pub display_name: Option<String>,
    pub given_name: Option<String>,
    pub sur_name: Option<String>,
    pub middle_name: Option<String>,
    pub title: Option<String>,
    pub suffix: Option<String>,
    pub nickname: Option<String>,

    pub birthday: Option<NaiveDate>,
    pub anniversary: Option<NaiveDate>,

    pub company: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub profession: Option<String>,

    pub email1: Option<String>,
    pub email2: Option<String>,
    pub email3: Option<String>,

    pub telephone_business1: Option<String>,
    pub telephone_business2: Option<String>,
    pub fax_business: Option<String>,
    pub telephone_home1: Option<String>,
    pub telephone_home2: Option<String>,
    pub fax_home: Option<String>,
    pub cellular_telephone1: Option<String>,
    pub cellular_telephone2: Option<String>,
    pub telephone_pager: Option<String>,
    pub telephone_car: Option<String>,
    pub telephone_isdn: Option<String>,
    pub telephone_other: Option<String>,
    pub fax_other: Option<String>,

    pub address_business: Option<PostalAddress>,
    pub address_home: Option<PostalAddress>,
    pub address_other: Option<PostalAddress>,

    pub url: Option<String>,
    pub note: Option<String>,
    pub categories: Option<Vec<String>>,
    pub color_label: Option<u8>,

    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,

    /// `Some` marks the contact as a distribution list, even when empty.
    pub distribution_list: Option<Vec<DistributionListEntry>>,
}

impl Contact {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_distribution_list(&self) -> bool {
        self.distribution_list.is_some()
    }

    /// ## Summary
    /// Checks the values that cannot be represented in a vCard.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidContact`] for a color label above
    /// [`MAX_COLOR_LABEL`] or a distribution-list entry without an email
    /// address.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(label) = self.color_label
            && label > MAX_COLOR_LABEL
        {
            return Err(CoreError::InvalidContact(format!(
                "color label {label} is outside 0..={MAX_COLOR_LABEL}"
            )));
        }

        if let Some(position) = self
            .distribution_list
            .iter()
            .flatten()
            .position(|entry| entry.email.trim().is_empty())
        {
            return Err(CoreError::InvalidContact(format!(
                "distribution list entry {position} has no email address"
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn phone(&self, slot: PhoneSlot) -> Option<&str> {
        match slot {
            PhoneSlot::Business1 => self.telephone_business1.as_deref(),
            PhoneSlot::Business2 => self.telephone_business2.as_deref(),
            PhoneSlot::BusinessFax => self.fax_business.as_deref(),
            PhoneSlot::Home1 => self.telephone_home1.as_deref(),
            PhoneSlot::Home2 => self.telephone_home2.as_deref(),
            PhoneSlot::HomeFax => self.fax_home.as_deref(),
            PhoneSlot::Cellular1 => self.cellular_telephone1.as_deref(),
            PhoneSlot::Cellular2 => self.cellular_telephone2.as_deref(),
            PhoneSlot::Pager => self.telephone_pager.as_deref(),
            PhoneSlot::Car => self.telephone_car.as_deref(),
            PhoneSlot::Isdn => self.telephone_isdn.as_deref(),
            PhoneSlot::Other => self.telephone_other.as_deref(),
            PhoneSlot::OtherFax => self.fax_other.as_deref(),
        }
    }

    pub fn phone_mut(&mut self, slot: PhoneSlot) -> &mut Option<String> {
        match slot {
            PhoneSlot::Business1 => &mut self.telephone_business1,
            PhoneSlot::Business2 => &mut self.telephone_business2,
            PhoneSlot::BusinessFax => &mut self.fax_business,
            PhoneSlot::Home1 => &mut self.telephone_home1,
            PhoneSlot::Home2 => &mut self.telephone_home2,
            PhoneSlot::HomeFax => &mut self.fax_home,
            PhoneSlot::Cellular1 => &mut self.cellular_telephone1,
            PhoneSlot::Cellular2 => &mut self.cellular_telephone2,
            PhoneSlot::Pager => &mut self.telephone_pager,
            PhoneSlot::Car => &mut self.telephone_car,
            PhoneSlot::Isdn => &mut self.telephone_isdn,
            PhoneSlot::Other => &mut self.telephone_other,
            PhoneSlot::OtherFax => &mut self.fax_other,
        }
    }

    #[must_use]
    pub fn email(&self, slot: EmailSlot) -> Option<&str> {
        match slot {
            EmailSlot::Business => self.email1.as_deref(),
            EmailSlot::Home => self.email2.as_deref(),
            EmailSlot::Other => self.email3.as_deref(),
        }
    }

    pub fn email_mut(&mut self, slot: EmailSlot) -> &mut Option<String> {
        match slot {
            EmailSlot::Business => &mut self.email1,
            EmailSlot::Home => &mut self.email2,
            EmailSlot::Other => &mut self.email3,
        }
    }

    #[must_use]
    pub fn address(&self, kind: AddressKind) -> Option<&PostalAddress> {
        match kind {
            AddressKind::Business => self.address_business.as_ref(),
            AddressKind::Home => self.address_home.as_ref(),
            AddressKind::Other => self.address_other.as_ref(),
        }
    }

    pub fn address_mut(&mut self, kind: AddressKind) -> &mut Option<PostalAddress> {
        match kind {
            AddressKind::Business => &mut self.address_business,
            AddressKind::Home => &mut self.address_home,
            AddressKind::Other => &mut self.address_other,
        }
    }

    /// Returns the value of a string-typed field.
    #[must_use]
    pub fn get_text(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Email(slot) => self.email(slot),
            ContactField::Telephone(slot) => self.phone(slot),
            ContactField::Address(kind, part) => self.address(kind)?.part(part),
            scalar => self.scalar(scalar),
        }
    }

    /// ## Summary
    /// Sets or clears a string-typed field.
    ///
    /// Clearing the last component of an address removes the address.
    pub fn set_text(&mut self, field: ContactField, value: Option<String>) {
        match field {
            ContactField::Email(slot) => *self.email_mut(slot) = value,
            ContactField::Telephone(slot) => *self.phone_mut(slot) = value,
            ContactField::Address(kind, part) => {
                let address = self.address_mut(kind);
                let mut updated = address.take().unwrap_or_default();
                *updated.part_mut(part) = value;
                if !updated.is_empty() {
                    *address = Some(updated);
                }
            }
            scalar => {
                if let Some(slot) = self.scalar_mut(scalar) {
                    *slot = value;
                }
            }
        }
    }

    fn scalar(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Uid => self.uid.as_deref(),
            ContactField::DisplayName => self.display_name.as_deref(),
            ContactField::GivenName => self.given_name.as_deref(),
            ContactField::SurName => self.sur_name.as_deref(),
            ContactField::MiddleName => self.middle_name.as_deref(),
            ContactField::Title => self.title.as_deref(),
            ContactField::Suffix => self.suffix.as_deref(),
            ContactField::Nickname => self.nickname.as_deref(),
            ContactField::Company => self.company.as_deref(),
            ContactField::Department => self.department.as_deref(),
            ContactField::Position => self.position.as_deref(),
            ContactField::Profession => self.profession.as_deref(),
            ContactField::Url => self.url.as_deref(),
            ContactField::Note => self.note.as_deref(),
            ContactField::Email(_) | ContactField::Telephone(_) | ContactField::Address(..) => None,
        }
    }

    fn scalar_mut(&mut self, field: ContactField) -> Option<&mut Option<String>> {
        Some(match field {
            ContactField::Uid => &mut self.uid,
            ContactField::DisplayName => &mut self.display_name,
            ContactField::GivenName => &mut self.given_name,
            ContactField::SurName => &mut self.sur_name,
            ContactField::MiddleName => &mut self.middle_name,
            ContactField::Title => &mut self.title,
            ContactField::Suffix => &mut self.suffix,
            ContactField::Nickname => &mut self.nickname,
            ContactField::Company => &mut self.company,
            ContactField::Department => &mut self.department,
            ContactField::Position => &mut self.position,
            ContactField::Profession => &mut self.profession,
            ContactField::Url => &mut self.url,
            ContactField::Note => &mut self.note,
            ContactField::Email(_) | ContactField::Telephone(_) | ContactField::Address(..) => {
                return None;
            }
        })
    }
}
