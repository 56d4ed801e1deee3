//! `URL`, `NOTE` and `CATEGORIES`.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{VCard, VCardParameter, VCardProperty, VCardValue};

use super::{ExportContext, ImportContext, VCardMapping, export_text, import_text, write_single};
use crate::codec::text::list_value;

pub struct UrlMapping;

impl VCardMapping for UrlMapping {
    fn name(&self) -> &'static str {
        "url"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::URL]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(url) = import_text(card, names::URL, ctx) {
            contact.url = Some(url.trim().to_string());
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let new = contact.url.as_deref().map(|url| {
            let mut prop = VCardProperty::uri(names::URL, url);
            if let Some(hint) = ctx.policy.uri_value_hint() {
                prop.add_param(VCardParameter::value_type(hint));
            }
            prop
        });
        write_single(card, names::URL, new);
    }
}

pub struct NoteMapping;

impl VCardMapping for NoteMapping {
    fn name(&self) -> &'static str {
        "note"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::NOTE]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(note) = import_text(card, names::NOTE, ctx) {
            contact.note = Some(note);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        export_text(card, names::NOTE, contact.note.as_deref(), ctx.policy);
    }
}

/// Categories. An empty list counts as unset.
pub struct CategoriesMapping;

impl VCardMapping for CategoriesMapping {
    fn name(&self) -> &'static str {
        "categories"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::CATEGORIES]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        let props = card.get_properties(names::CATEGORIES);
        if props.is_empty() {
            return;
        }
        let categories: Vec<String> = props
            .into_iter()
            .flat_map(|p| list_value(p, ctx.policy, &mut ctx.warnings))
            .collect();
        contact.categories = Some(categories).filter(|c| !c.is_empty());
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let new = contact
            .categories
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|categories| {
                let non_ascii = categories.iter().any(|c| !c.is_ascii());
                let mut prop = VCardProperty::new(names::CATEGORIES, VCardValue::Text(String::new()));
                ctx.policy
                    .apply_value(&mut prop, VCardValue::TextList(categories.clone()), non_ascii);
                prop
            });
        write_single(card, names::CATEGORIES, new);
    }
}
