//! The ordered set of field mappings.

use cardshift_core::constants::PRODID;
use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{VCard, VCardProperty, VCardValue};

use crate::mapping::address::AddressMapping;
use crate::mapping::color_label::ColorLabelMapping;
use crate::mapping::dates::{AnniversaryMapping, BirthdayMapping};
use crate::mapping::distribution_list::DistributionListMapping;
use crate::mapping::email::EmailMapping;
use crate::mapping::identity::{RevisionMapping, UidMapping};
use crate::mapping::name::{FormattedNameMapping, NicknameMapping, StructuredNameMapping};
use crate::mapping::organization::{OrganizationMapping, PositionMapping, ProfessionMapping};
use crate::mapping::photo::PhotoMapping;
use crate::mapping::telephone::TelephoneMapping;
use crate::mapping::text::{CategoriesMapping, NoteMapping, UrlMapping};
use crate::mapping::{ExportContext, ImportContext, VCardMapping};

/// Runs every mapping over a card, in a fixed order.
///
/// The distribution-list mapping runs before the email mapping so that a
/// legacy list can claim the card's `EMAIL`s as members.
pub struct MappingRegistry {
    mappings: Vec<Box<dyn VCardMapping>>,
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mappings: vec![
                Box::new(UidMapping),
                Box::new(RevisionMapping),
                Box::new(DistributionListMapping),
                Box::new(FormattedNameMapping),
                Box::new(StructuredNameMapping),
                Box::new(NicknameMapping),
                Box::new(BirthdayMapping),
                Box::new(AnniversaryMapping),
                Box::new(OrganizationMapping),
                Box::new(PositionMapping),
                Box::new(ProfessionMapping),
                Box::new(EmailMapping),
                Box::new(TelephoneMapping),
                Box::new(AddressMapping),
                Box::new(UrlMapping),
                Box::new(NoteMapping),
                Box::new(CategoriesMapping),
                Box::new(PhotoMapping),
                Box::new(ColorLabelMapping),
            ],
        }
    }

    pub fn mappings(&self) -> impl Iterator<Item = &dyn VCardMapping> {
        self.mappings.iter().map(AsRef::as_ref)
    }

    /// Name of the mapping that reads and writes `property`, if any.
    #[must_use]
    pub fn owner_of(&self, property: &str) -> Option<&'static str> {
        self.mappings()
            .find(|m| {
                m.owned_properties()
                    .iter()
                    .any(|owned| owned.eq_ignore_ascii_case(property))
            })
            .map(VCardMapping::name)
    }

    /// ## Summary
    /// Writes the fields found in `card` into `contact`.
    ///
    /// Fields whose properties are absent keep their current value, so
    /// passing an existing contact updates it.
    #[tracing::instrument(skip_all, fields(version = ?ctx.policy))]
    pub fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        for mapping in &self.mappings {
            mapping.import(card, contact, ctx);
        }
        tracing::debug!(warnings = ctx.warnings.len(), "card imported");
    }

    /// ## Summary
    /// Writes `contact` into `card`, merging with whatever it already holds.
    ///
    /// The card takes the context's version and this product's `PRODID`.
    /// Properties no mapping owns are kept as they are.
    #[tracing::instrument(skip_all, fields(version = ?ctx.policy))]
    pub fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        card.version = ctx.policy.version();
        card.declared_version = Some(card.version.as_str().to_string());

        for mapping in &self.mappings {
            mapping.export(contact, card, ctx);
        }
        set_prodid(card);
    }
}

/// Replaces the first `PRODID` or inserts one at the top of the card.
fn set_prodid(card: &mut VCard) {
    let prodid = VCardProperty::new(names::PRODID, VCardValue::Unknown(PRODID.to_string()));
    card.properties.retain(|p| !p.is(names::PRODID));
    card.properties.insert(0, prodid);
}
