//! `EMAIL` and the three email slots.

use cardshift_core::contact::{Contact, EmailSlot};
use cardshift_rfc::rfc::vcard::core::{names, types};
use cardshift_rfc::rfc::vcard::{VCard, VCardProperty};

use super::{
    ExportContext, ImportContext, VCardMapping, collect_candidates, export_slots, text_property,
};
use crate::codec::text::{is_valid_email, text_value};
use crate::codec::types::{SlotPlan, email_flag, email_slots};
use crate::policy::VersionPolicy;
use crate::warning::{Warning, WarningCode, Warnings};

pub struct EmailMapping;

fn address(prop: &VCardProperty, policy: VersionPolicy, warnings: &mut Warnings) -> Option<String> {
    let value = text_value(prop, policy, warnings)?;
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

fn assignments(card: &VCard, policy: VersionPolicy, warnings: &mut Warnings) -> SlotPlan<EmailSlot> {
    let candidates = collect_candidates(
        card,
        names::EMAIL,
        |prop| address(prop, policy, warnings),
        email_slots,
    );
    SlotPlan::new(candidates, "email", warnings)
}

impl VCardMapping for EmailMapping {
    fn name(&self) -> &'static str {
        "email"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::EMAIL]
    }

    /// Invalid addresses are kept and reported. Skipped entirely for legacy
    /// distribution lists, whose `EMAIL`s are members.
    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if ctx.legacy_distribution_list || !card.has_property(names::EMAIL) {
            return;
        }

        let plan = assignments(card, ctx.policy, &mut ctx.warnings);
        for slot in EmailSlot::ALL.into_iter().filter(|slot| plan.reaches(*slot)) {
            *contact.email_mut(slot) = None;
        }
        for assignment in plan.assigned {
            if !is_valid_email(&assignment.value) {
                let mut warning = Warning::new(
                    WarningCode::InvalidEmail,
                    format!("{:?} is not a valid email address", assignment.value),
                );
                if let Some(prop) = card.properties.get(assignment.index) {
                    warning = warning.at(prop);
                }
                ctx.warnings.push(warning);
            }
            *contact.email_mut(assignment.slot) = Some(assignment.value);
        }
    }

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let policy = ctx.policy;
        let plan = assignments(card, policy, &mut Warnings::new());

        export_slots(
            card,
            &plan,
            &EmailSlot::ALL,
            |slot| {
                contact
                    .email(slot)
                    .filter(|v| !v.is_empty())
                    .map(|email| text_property(names::EMAIL, email, policy))
            },
            |slot, mut prop| {
                if policy.internet_email_flag() {
                    policy.set_types(&mut prop, &[types::INTERNET, email_flag(slot)]);
                } else {
                    policy.set_types(&mut prop, &[email_flag(slot)]);
                }
                if slot == EmailSlot::Business {
                    policy.mark_preferred(&mut prop);
                }
                prop
            },
        );
    }
}
