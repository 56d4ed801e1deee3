//! Field mappings between vCard properties and contact fields.
//!
//! Each [`VCardMapping`] owns a set of property names and the contact fields
//! they feed. Import only touches fields whose properties are present, so an
//! existing contact is updated rather than replaced. Export merges into the
//! card it is given: values are replaced in place, unset fields remove their
//! property and new values are appended. Properties nobody owns are left
//! alone.

pub mod address;
pub mod color_label;
pub mod dates;
pub mod distribution_list;
pub mod email;
pub mod identity;
pub mod name;
pub mod organization;
pub mod photo;
pub mod telephone;
pub mod text;


use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::{VCard, VCardProperty, VCardValue};

use crate::codec::photo::ImageSource;
use crate::codec::text::decode_text;
use crate::codec::types::{Candidate, SlotPlan, TypeSet};
use crate::policy::VersionPolicy;
use crate::warning::Warnings;

/// State shared by the mappings during one import.
pub struct ImportContext<'a> {
    pub policy: VersionPolicy,
    pub warnings: Warnings,
    pub images: ImageSource<'a>,
    /// Set when the card is a legacy distribution list whose `EMAIL`s are
    /// members rather than the contact's own addresses.
    pub legacy_distribution_list: bool,
}

impl<'a> ImportContext<'a> {
    #[must_use]
    pub fn new(policy: VersionPolicy, images: ImageSource<'a>) -> Self {
        Self {
            policy,
            warnings: Warnings::new(),
            images,
            legacy_distribution_list: false,
        }
    }
}

/// State shared by the mappings during one export.
#[derive(Debug, Default)]
pub struct ExportContext {
    pub policy: VersionPolicy,
    pub warnings: Warnings,
}

impl ExportContext {
    #[must_use]
    pub fn new(policy: VersionPolicy) -> Self {
        Self {
            policy,
            warnings: Warnings::new(),
        }
    }
}

/// Converts between one group of vCard properties and contact fields.
pub trait VCardMapping: Send + Sync {
    fn name(&self) -> &'static str;

    /// Property names this mapping reads and writes.
    fn owned_properties(&self) -> &'static [&'static str];

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>);

    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext);
}

/// Reads the first `name` property as text. A present but empty property
/// reads as `Some("")`.
pub(crate) fn import_text(card: &VCard, name: &str, ctx: &mut ImportContext<'_>) -> Option<String> {
    let prop = card.get_property(name)?;
    Some(decode_text(prop, ctx.policy, &mut ctx.warnings))
}

/// Builds a text property, adding the charset 2.1 needs for non-ASCII text.
pub(crate) fn text_property(name: &str, text: &str, policy: VersionPolicy) -> VCardProperty {
    let mut prop = VCardProperty::new(name, VCardValue::Text(String::new()));
    policy.apply_text(&mut prop, text);
    prop
}

/// Replaces the value of `existing` with that of `new`.
///
/// Group, position and unrelated parameters of `existing` survive; transfer
/// parameters are dropped and parameters `new` carries win.
pub(crate) fn merge_value(existing: &mut VCardProperty, new: VCardProperty) {
    for name in ["ENCODING", "CHARSET", "VALUE"] {
        existing.remove_param(name);
    }
    for param in &new.params {
        existing.remove_param(&param.name);
    }
    existing.params.extend(new.params);
    existing.value = new.value;
    existing.raw_value = new.raw_value;
}

/// Writes `new` into the first `name` property and removes the others.
/// `None` removes every `name` property.
pub(crate) fn write_single(card: &mut VCard, name: &str, new: Option<VCardProperty>) {
    let Some(new) = new else {
        card.remove_properties(name);
        return;
    };

    match card.properties.iter().position(|p| p.is(name)) {
        Some(index) => {
            merge_value(&mut card.properties[index], new);
            let mut seen = false;
            card.properties.retain(|p| {
                if !p.is(name) {
                    return true;
                }
                let first = !seen;
                seen = true;
                first
            });
        }
        None => card.add_property(new),
    }
}

/// Exports an optional text field. `Some("")` writes an empty property.
pub(crate) fn export_text(card: &mut VCard, name: &str, value: Option<&str>, policy: VersionPolicy) {
    let new = value.map(|v| text_property(name, v, policy));
    write_single(card, name, new);
}

/// Removes the properties at `indices` from `card`.
pub(crate) fn remove_indices(card: &mut VCard, mut indices: Vec<usize>) {
    indices.sort_unstable();
    indices.dedup();
    for index in indices.into_iter().rev() {
        card.properties.remove(index);
    }
}

/// Collects the `name` properties of a card as slot candidates. Properties
/// whose `value` is `None` are skipped.
pub(crate) fn collect_candidates<'c, S>(
    card: &'c VCard,
    name: &str,
    mut value: impl FnMut(&VCardProperty) -> Option<String>,
    slots: impl Fn(&TypeSet) -> Vec<S>,
) -> Vec<Candidate<'c, S>> {
    card.properties
        .iter()
        .enumerate()
        .filter(|(_, prop)| prop.is(name))
        .filter_map(|(index, prop)| {
            Some(Candidate {
                index,
                prop,
                value: value(prop)?,
                slots: slots(&TypeSet::of(prop)),
            })
        })
        .collect()
}

/// ## Summary
/// Writes slot values into a card whose existing properties were assigned
/// to slots by `plan`.
///
/// `value_of` returns the untyped property for a set slot. Assigned
/// properties take the new value in place and keep their `TYPE`; assigned
/// properties of unset slots are removed, and so are unassigned ones that
/// would move into an unset slot on the next import. Set slots without a
/// property are appended after passing through `typed`. Other unassigned
/// properties stay.
pub(crate) fn export_slots<S: Copy + PartialEq + std::fmt::Debug>(
    card: &mut VCard,
    plan: &SlotPlan<S>,
    slots: &[S],
    mut value_of: impl FnMut(S) -> Option<VCardProperty>,
    mut typed: impl FnMut(S, VCardProperty) -> VCardProperty,
) {
    let mut remove = Vec::new();
    for assignment in &plan.assigned {
        match value_of(assignment.slot) {
            Some(new) => merge_value(&mut card.properties[assignment.index], new),
            None => remove.push(assignment.index),
        }
    }

    let mut appended = Vec::new();
    for &slot in slots {
        let taken = plan.assigned.iter().any(|a| a.slot == slot);
        match value_of(slot) {
            Some(prop) if !taken => appended.push(typed(slot, prop)),
            Some(_) => {}
            None => remove.extend(plan.overflow_into(slot)),
        }
    }

    remove_indices(card, remove);
    card.properties.extend(appended);
}
