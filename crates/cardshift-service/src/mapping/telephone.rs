//! `TEL` and the thirteen telephone slots.

use cardshift_core::contact::{Contact, PhoneSlot};
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{VCard, VCardProperty};

use super::{
    ExportContext, ImportContext, VCardMapping, collect_candidates, export_slots, text_property,
};
use crate::codec::text::text_value;
use crate::codec::types::{SlotPlan, phone_flags, phone_slots};
use crate::policy::VersionPolicy;
use crate::warning::Warnings;

pub struct TelephoneMapping;

/// Number of a `TEL`, without a `tel:` scheme.
fn phone_number(prop: &VCardProperty, policy: VersionPolicy, warnings: &mut Warnings) -> Option<String> {
    let value = text_value(prop, policy, warnings)?;
    let number = match value.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => &value[4..],
        _ => value.as_str(),
    };
    Some(number.trim().to_string()).filter(|n| !n.is_empty())
}

/// Assigns the `TEL`s of `card` to telephone slots.
fn assignments(card: &VCard, policy: VersionPolicy, warnings: &mut Warnings) -> SlotPlan<PhoneSlot> {
    let candidates = collect_candidates(
        card,
        names::TEL,
        |prop| phone_number(prop, policy, warnings),
        phone_slots,
    );
    SlotPlan::new(candidates, "telephone", warnings)
}

impl VCardMapping for TelephoneMapping {
    fn name(&self) -> &'static str {
        "telephone"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::TEL]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if !card.has_property(names::TEL) {
            return;
        }

        let plan = assignments(card, ctx.policy, &mut ctx.warnings);
        for slot in PhoneSlot::ALL.into_iter().filter(|slot| plan.reaches(*slot)) {
            *contact.phone_mut(slot) = None;
        }
        for assignment in plan.assigned {
            *contact.phone_mut(assignment.slot) = Some(assignment.value);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let policy = ctx.policy;
        let plan = assignments(card, policy, &mut Warnings::new());

        export_slots(
            card,
            &plan,
            &PhoneSlot::ALL,
            |slot| {
                contact
                    .phone(slot)
                    .filter(|v| !v.is_empty())
                    .map(|number| text_property(names::TEL, number, policy))
            },
            |slot, mut prop| {
                policy.set_types(&mut prop, phone_flags(slot));
                prop
            },
        );
    }
}
