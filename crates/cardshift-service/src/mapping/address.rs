//! `ADR` with its label and the three address blocks.

use cardshift_core::contact::{AddressKind, Contact, PostalAddress};
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{VCard, VCardParameter, VCardProperty, VCardValue};

use super::{ExportContext, ImportContext, VCardMapping, merge_value, text_property};
use crate::codec::address::{decode_address, decode_label, encode_address, find_label};
use crate::codec::types::{Candidate, SlotPlan, TypeSet, address_flag, address_kinds};
use crate::policy::VersionPolicy;
use crate::warning::Warnings;

pub struct AddressMapping;

/// Key used to recognise duplicate addresses.
fn address_key(address: &PostalAddress) -> String {
    [
        &address.street,
        &address.city,
        &address.region,
        &address.postal_code,
        &address.country,
        &address.label,
    ]
    .iter()
    .map(|part| part.as_deref().unwrap_or_default())
    .collect::<Vec<_>>()
    .join("\u{1f}")
}

/// Decodes every `ADR` and assigns it to an address block.
///
/// The label is looked up only once the block is known, so an untyped
/// `ADR` never takes the `LABEL` of a block another `ADR` holds. The
/// returned addresses line up with `plan.assigned`.
fn assignments(
    card: &VCard,
    policy: VersionPolicy,
    warnings: &mut Warnings,
) -> (SlotPlan<AddressKind>, Vec<PostalAddress>) {
    let mut decoded = Vec::new();
    let mut candidates = Vec::new();

    for (index, prop) in card.properties.iter().enumerate() {
        if !prop.is(names::ADR) {
            continue;
        }
        let kinds = address_kinds(&TypeSet::of(prop));
        let mut address = decode_address(prop, policy, warnings);
        address.label = prop
            .get_param_value("LABEL")
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        let labelled = kinds
            .iter()
            .any(|kind| find_label(card, index, address_flag(*kind)).is_some());
        if address.is_empty() && !labelled {
            continue;
        }

        candidates.push(Candidate {
            index,
            prop,
            value: address_key(&address),
            slots: kinds,
        });
        decoded.push((index, address));
    }

    let mut plan = SlotPlan::new(candidates, "address", warnings);
    let mut addresses = Vec::with_capacity(plan.assigned.len());
    plan.assigned.retain(|assignment| {
        let Some((_, address)) = decoded.iter().find(|(i, _)| *i == assignment.index) else {
            return false;
        };
        let mut address = address.clone();
        if address.label.is_none() {
            let flag = address_flag(assignment.slot);
            address.label = decode_label(card, assignment.index, flag, policy, warnings);
        }
        if address.is_empty() {
            return false;
        }
        addresses.push(address);
        true
    });
    (plan, addresses)
}

/// Builds the `ADR` for an address block, carrying over PO box and
/// extended address from `existing`.
fn address_property(
    address: &PostalAddress,
    existing: Option<&VCardProperty>,
    policy: VersionPolicy,
) -> VCardProperty {
    let value = encode_address(address, existing.and_then(|p| p.value.as_address()));
    let non_ascii = [
        &address.street,
        &address.city,
        &address.region,
        &address.postal_code,
        &address.country,
    ]
    .iter()
    .any(|part| part.as_deref().is_some_and(|p| !p.is_ascii()));

    let mut prop = VCardProperty::new(names::ADR, VCardValue::Text(String::new()));
    policy.apply_value(&mut prop, VCardValue::Address(value), non_ascii);
    if policy.label_as_parameter()
        && let Some(label) = &address.label
    {
        prop.add_param(VCardParameter::label(label.clone()));
    }
    prop
}

impl VCardMapping for AddressMapping {
    fn name(&self) -> &'static str {
        "address"
    }

    fn owned_properties(&self) -> &'static [&'static str] {
        &[names::ADR, names::LABEL]
    }

    fn import(&self, card: &VCard, contact: &mut Contact, ctx: &mut ImportContext<'_>) {
        if !card.has_property(names::ADR) {
            return;
        }

        let (plan, addresses) = assignments(card, ctx.policy, &mut ctx.warnings);
        for kind in AddressKind::ALL.into_iter().filter(|kind| plan.reaches(*kind)) {
            *contact.address_mut(kind) = None;
        }
        for (assignment, address) in plan.assigned.into_iter().zip(addresses) {
            *contact.address_mut(assignment.slot) = Some(address);
        }
    }

    /// Updates assigned `ADR`s in place, removes those of unset blocks and
    /// appends the rest. Before 4.0 each `ADR` is followed by its `LABEL`.
    fn export(&self, contact: &Contact, card: &mut VCard, ctx: &mut ExportContext) {
        let policy = ctx.policy;
        let (plan, _) = assignments(card, policy, &mut Warnings::new());
        let value_of = |kind: AddressKind| contact.address(kind).filter(|a| !a.is_empty());

        let mut remove = Vec::new();
        let mut inserts: Vec<(usize, VCardProperty)> = Vec::new();

        // Overflow that would move into a cleared block on the next import.
        for kind in AddressKind::ALL.into_iter().filter(|kind| value_of(*kind).is_none()) {
            for index in plan.overflow_into(kind) {
                remove.push(index);
                remove.extend(find_label(card, index, address_flag(kind)));
            }
        }

        for assignment in &plan.assigned {
            let index = assignment.index;
            let flag = address_flag(assignment.slot);
            let label_index = find_label(card, index, flag);

            let Some(address) = value_of(assignment.slot) else {
                remove.push(index);
                remove.extend(label_index);
                continue;
            };

            let new = address_property(address, card.properties.get(index), policy);
            let adr = &mut card.properties[index];
            adr.remove_param("LABEL");
            merge_value(adr, new);

            match (&address.label, label_index) {
                (Some(label), Some(li)) if !policy.label_as_parameter() => {
                    merge_value(
                        &mut card.properties[li],
                        text_property(names::LABEL, label, policy),
                    );
                }
                (Some(label), None) if !policy.label_as_parameter() => {
                    let mut prop = text_property(names::LABEL, label, policy);
                    prop.group.clone_from(&card.properties[index].group);
                    if prop.group.is_none() {
                        policy.set_types(&mut prop, &[flag]);
                    }
                    inserts.push((index, prop));
                }
                (_, Some(li)) => remove.push(li),
                (_, None) => {}
            }
        }

        let mut properties = Vec::with_capacity(card.properties.len() + inserts.len());
        for (i, prop) in std::mem::take(&mut card.properties).into_iter().enumerate() {
            if !remove.contains(&i) {
                properties.push(prop);
            }
            properties.extend(
                inserts
                    .iter()
                    .filter(|(after, _)| *after == i)
                    .map(|(_, p)| p.clone()),
            );
        }
        card.properties = properties;

        for kind in AddressKind::ALL {
            if plan.assigned.iter().any(|a| a.slot == kind) {
                continue;
            }
            let Some(address) = value_of(kind) else {
                continue;
            };

            let flag = address_flag(kind);
            let mut adr = address_property(address, None, policy);
            policy.set_types(&mut adr, &[flag]);
            card.add_property(adr);

            if !policy.label_as_parameter()
                && let Some(label) = &address.label
            {
                let mut prop = text_property(names::LABEL, label, policy);
                policy.set_types(&mut prop, &[flag]);
                card.add_property(prop);
            }
        }
    }
}
