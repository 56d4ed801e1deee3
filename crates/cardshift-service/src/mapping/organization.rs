//! `ORG`, `TITLE` and `ROLE`.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{Organization, VCard, VCardProperty, VCardValue};

use super::{ExportContext, ImportContext, VCardMapping, export_text, import_text, write_single};
use crate::codec::text::components;

/// Company and department. Further organisational units of an existing
/// `ORG` are kept on export.
pub struct OrganizationMapping;

impl VCardMapping for OrganizationMapping {
    fn name(&self) -> &'static str {
        "organization"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::ORG]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(prop) = card.get_property(names::ORG) {
            let parts = components(prop, ctx.policy, &mut ctx.warnings);
            contact.company = parts.get(0);
            contact.department = parts.get(1);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let company = contact.company.as_deref().filter(|c| !c.is_empty());
        let department = contact.department.as_deref().filter(|d| !d.is_empty());
        if company.is_none() && department.is_none() {
            write_single(card, names::ORG, None);
            return;
        }

        let extra_units = card
            .get_property(names::ORG)
            .and_then(|p| p.value.as_organization())
            .map(|org| org.units.iter().skip(1).cloned().collect::<Vec<_>>())
            .unwrap_or_default();

        let mut units = vec![department.unwrap_or_default().to_string()];
        units.extend(extra_units);
        while units.last().is_some_and(String::is_empty) {
            units.pop();
        }

        let org = Organization {
            name: company.unwrap_or_default().to_string(),
            units,
        };
        let non_ascii = !org.name.is_ascii() || org.units.iter().any(|u| !u.is_ascii());

        let mut prop = VCardProperty::new(names::ORG, VCardValue::Text(String::new()));
        ctx.policy
            .apply_value(&mut prop, VCardValue::Organization(org), non_ascii);
        write_single(card, names::ORG, Some(prop));
    }
}

/// Job title, vCard `TITLE`.
pub struct PositionMapping;

impl VCardMapping for PositionMapping {
    fn name(&self) -> &'static str {
        "position"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::TITLE]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(position) = import_text(card, names::TITLE, ctx) {
            contact.position = Some(position);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        export_text(card, names::TITLE, contact.position.as_deref(), ctx.policy);
    }
}

/// Role, vCard `ROLE`.
pub struct ProfessionMapping;

impl VCardMapping for ProfessionMapping {
    fn name(&self) -> &'static str {
        "profession"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::ROLE]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(profession) = import_text(card, names::ROLE, ctx) {
            contact.profession = Some(profession);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        export_text(card, names::ROLE, contact.profession.as_deref(), ctx.policy);
    }
}
