//! `BDAY` and the anniversary.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::VCard;
use cardshift_rfc::rfc::vcard::core::names;

use super::{ExportContext, ImportContext, VCardMapping, write_single};
use crate::codec::date::{date_property, decode_date};

const X_ANNIVERSARY: &str = "X-ANNIVERSARY";

pub struct BirthdayMapping;

impl VCardMapping for BirthdayMapping {
    fn name(&self) -> &'static str {
        "birthday"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::BDAY]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(prop) = card.get_property(names::BDAY)
            && let Some(date) = decode_date(prop, &mut ctx.warnings)
        {
            contact.birthday = Some(date);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let new = contact
            .birthday
            .map(|date| date_property(names::BDAY, date, ctx.policy));
        write_single(card, names::BDAY, new);
    }
}

/// `ANNIVERSARY` in 4.0, `X-ANNIVERSARY` before. Both are read.
pub struct AnniversaryMapping;

impl VCardMapping for AnniversaryMapping {
    fn name(&self) -> &'static str {
        "anniversary"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::ANNIVERSARY, X_ANNIVERSARY]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        let prop = card
            .get_property(names::ANNIVERSARY)
            .or_else(|| card.get_property(X_ANNIVERSARY));
        if let Some(prop) = prop
            && let Some(date) = decode_date(prop, &mut ctx.warnings)
        {
            contact.anniversary = Some(date);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let name = ctx.policy.anniversary_property();
        let other = if name == names::ANNIVERSARY {
            X_ANNIVERSARY
        } else {
            names::ANNIVERSARY
        };

        // Switching versions renames the property in place.
        if !card.has_property(name)
            && let Some(prop) = card.properties.iter_mut().find(|p| p.is(other))
        {
            prop.name = name.to_string();
        }
        card.remove_properties(other);

        let new = contact
            .anniversary
            .map(|date| date_property(name, date, ctx.policy));
        write_single(card, name, new);
    }
}
