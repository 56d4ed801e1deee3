//! Distribution lists.
//!
//! Group contacts are written as `KIND:group` with one `MEMBER` per entry.
//! Older exports marked the card with `X-OPEN-XCHANGE-CTYPE:dlist` and listed
//! the members as plain `EMAIL` properties; those are read but never written.

use cardshift_core::contact::{Contact, DistributionListEntry};
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{VCard, VCardParameter, VCardProperty};

use super::{ExportContext, ImportContext, VCardMapping, text_property, write_single};
use crate::codec::text::text_value;
use crate::policy::VersionPolicy;
use crate::warning::{Warning, WarningCode, Warnings};

/// Marker property of legacy distribution lists.
pub const X_OPEN_XCHANGE_CTYPE: &str = "X-OPEN-XCHANGE-CTYPE";
/// Member display name.
pub const X_OX_FN: &str = "X-OX-FN";
/// UID of the contact a member refers to.
pub const X_OX_UID: &str = "X-OX-UID";

const GROUP_KIND: &str = "group";
const LEGACY_MARKER: &str = "dlist";
const MAILTO: &str = "mailto:";

pub struct DistributionListMapping;

fn has_text(card: &VCard, name: &str, expected: &str, policy: VersionPolicy) -> bool {
    card.get_property(name)
        .and_then(|p| text_value(p, policy, &mut Warnings::new()))
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

fn strip_mailto(value: &str) -> Option<&str> {
    let value = value.trim();
    value
        .get(..MAILTO.len())
        .filter(|scheme| scheme.eq_ignore_ascii_case(MAILTO))
        .map(|_| value[MAILTO.len()..].trim())
}

/// Builds an entry from the address and the `X-OX-*` parameters of `prop`.
fn entry(prop: &VCardProperty, email: &str) -> DistributionListEntry {
    let display_name = prop
        .get_param_value(X_OX_FN)
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    match prop.get_param_value(X_OX_UID).filter(|u| !u.is_empty()) {
        Some(uid) => DistributionListEntry::contact(display_name, email, uid),
        None => DistributionListEntry::independent(display_name, email),
    }
}

fn invalid_member(prop: &VCardProperty, value: &str) -> Warning {
    Warning::new(
        WarningCode::InvalidMember,
        format!("member {value:?} is not a mailto: address and was skipped"),
    )
    .at(prop)
}

fn read_members(card: &VCard, ctx: &mut ImportContext<'_>) -> Vec<DistributionListEntry> {
    let mut entries = Vec::new();
    for prop in card.get_properties(names::MEMBER) {
        let value = text_value(prop, ctx.policy, &mut ctx.warnings).unwrap_or_default();
        match strip_mailto(&value).filter(|email| !email.is_empty()) {
            Some(email) => entries.push(entry(prop, email)),
            None => ctx.warnings.push(invalid_member(prop, &value)),
        }
    }
    entries
}

fn read_legacy_members(card: &VCard, ctx: &mut ImportContext<'_>) -> Vec<DistributionListEntry> {
    card.get_properties(names::EMAIL)
        .into_iter()
        .filter_map(|prop| {
            let value = text_value(prop, ctx.policy, &mut ctx.warnings)?;
            let email = strip_mailto(&value).unwrap_or(value.trim());
            Some(entry(prop, email))
        })
        .collect()
}

fn member_property(entry: &DistributionListEntry) -> VCardProperty {
    let mut prop = VCardProperty::uri(names::MEMBER, format!("{MAILTO}{}", entry.email));
    if let Some(name) = &entry.display_name {
        prop.add_param(VCardParameter::new(X_OX_FN, name.clone()));
    }
    if let Some(uid) = entry.contact_uid() {
        prop.add_param(VCardParameter::new(X_OX_UID, uid));
    }
    prop
}

impl VCardMapping for DistributionListMapping {
    fn name(&self) -> &'static str {
        "distribution_list"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::KIND, names::MEMBER, X_OPEN_XCHANGE_CTYPE]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if card.has_property(names::KIND) {
            contact.distribution_list = has_text(card, names::KIND, GROUP_KIND, ctx.policy)
                .then(|| read_members(card, ctx));
            return;
        }

        if has_text(card, X_OPEN_XCHANGE_CTYPE, LEGACY_MARKER, ctx.policy) {
            tracing::debug!("reading legacy distribution list");
            ctx.legacy_distribution_list = true;
            contact.distribution_list = Some(read_legacy_members(card, ctx));
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let legacy = has_text(card, X_OPEN_XCHANGE_CTYPE, LEGACY_MARKER, ctx.policy);
        card.remove_properties(X_OPEN_XCHANGE_CTYPE);

        let Some(entries) = &contact.distribution_list else {
            if has_text(card, names::KIND, GROUP_KIND, ctx.policy) {
                card.remove_properties(names::KIND);
            }
            card.remove_properties(names::MEMBER);
            return;
        };

        if legacy {
            card.remove_properties(names::EMAIL);
        }
        write_single(
            card,
            names::KIND,
            Some(text_property(names::KIND, GROUP_KIND, ctx.policy)),
        );

        let position = card
            .properties
            .iter()
            .position(|p| p.is(names::MEMBER))
            .unwrap_or(card.properties.len());
        card.remove_properties(names::MEMBER);
        let tail = card.properties.split_off(position.min(card.properties.len()));
        card.properties.extend(entries.iter().map(member_property));
        card.properties.extend(tail);
    }
}
