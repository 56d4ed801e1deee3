//! `FN`, `N` and `NICKNAME`.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{StructuredName, VCard, VCardProperty, VCardValue};

use super::{ExportContext, ImportContext, VCardMapping, export_text, import_text, write_single};
use crate::codec::text::{components, list_value};
use crate::warning::{Warning, WarningCode};

pub struct FormattedNameMapping;

impl VCardMapping for FormattedNameMapping {
    fn name(&self) -> &'static str {
        "formatted_name"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::FN]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(display_name) = import_text(card, names::FN, ctx) {
            contact.display_name = Some(display_name);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        export_text(card, names::FN, contact.display_name.as_deref(), ctx.policy);
    }
}

/// `N` components: family, given, additional, prefix, suffix.
pub struct StructuredNameMapping;

impl VCardMapping for StructuredNameMapping {
    fn name(&self) -> &'static str {
        "structured_name"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::N]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        let Some(prop) = card.get_property(names::N) else {
            return;
        };

        let parts = components(prop, ctx.policy, &mut ctx.warnings);
        let expected = ctx.policy.name_components();
        if parts.count < expected {
            ctx.warnings.push(
                Warning::new(
                    WarningCode::ShortStructuredValue,
                    format!("name has {} of {expected} components", parts.count),
                )
                .at(prop),
            );
        }

        contact.sur_name = parts.get(0);
        contact.given_name = parts.get(1);
        contact.middle_name = parts.get(2);
        contact.title = parts.get(3);
        contact.suffix = parts.get(4);
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let component = |value: &Option<String>| {
            value
                .iter()
                .filter(|v| !v.is_empty())
                .cloned()
                .collect::<Vec<_>>()
        };
        let name = StructuredName {
            family: component(&contact.sur_name),
            given: component(&contact.given_name),
            additional: component(&contact.middle_name),
            prefixes: component(&contact.title),
            suffixes: component(&contact.suffix),
        };

        let new = (!name.is_empty()).then(|| {
            let non_ascii = [
                &contact.sur_name,
                &contact.given_name,
                &contact.middle_name,
                &contact.title,
                &contact.suffix,
            ]
            .iter()
            .any(|v| v.as_deref().is_some_and(|v| !v.is_ascii()));

            let mut prop = VCardProperty::new(names::N, VCardValue::Text(String::new()));
            ctx.policy
                .apply_value(&mut prop, VCardValue::StructuredName(name), non_ascii);
            prop
        });
        write_single(card, names::N, new);
    }
}

/// Nickname. Several comma-separated nicknames are kept as one string.
pub struct NicknameMapping;

impl VCardMapping for NicknameMapping {
    fn name(&self) -> &'static str {
        "nickname"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::NICKNAME]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(prop) = card.get_property(names::NICKNAME) {
            let nicknames = list_value(prop, ctx.policy, &mut ctx.warnings);
            contact.nickname = Some(nicknames.join(",")).filter(|n| !n.is_empty());
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let new = contact
            .nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(|nickname| {
                let mut prop = VCardProperty::new(names::NICKNAME, VCardValue::Text(String::new()));
                ctx.policy.apply_value(
                    &mut prop,
                    VCardValue::TextList(vec![nickname.to_string()]),
                    !nickname.is_ascii(),
                );
                prop
            });
        write_single(card, names::NICKNAME, new);
    }
}
