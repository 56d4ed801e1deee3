//! `UID` and `REV`.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::VCard;
use cardshift_rfc::rfc::vcard::core::names;

use super::{ExportContext, ImportContext, VCardMapping, export_text, import_text, write_single};
use crate::codec::date::{decode_timestamp, timestamp_property};

pub struct UidMapping;

impl VCardMapping for UidMapping {
    fn name(&self) -> &'static str {
        "uid"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::UID]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(uid) = import_text(card, names::UID, ctx) {
            contact.uid = Some(uid);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        export_text(card, names::UID, contact.uid.as_deref(), ctx.policy);
    }
}

pub struct RevisionMapping;

impl VCardMapping for RevisionMapping {
    fn name(&self) -> &'static str {
        "revision"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::REV]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if let Some(prop) = card.get_property(names::REV)
            && let Some(ts) = decode_timestamp(prop, &mut ctx.warnings)
        {
            contact.last_modified = Some(ts);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, _ctx: &mut ExportContext) {
        write_single(card, names::REV, contact.last_modified.map(timestamp_property));
    }
}
