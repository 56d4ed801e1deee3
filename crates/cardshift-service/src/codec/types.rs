//! `TYPE` flags and slot assignment for multi-instance properties.
//!
//! A contact has a fixed number of telephone, email and address slots while
//! a card can carry any number of `TEL`, `EMAIL` and `ADR` properties. Each
//! property lists the slots its `TYPE` flags allow, preferred properties pick
//! first, and whatever finds no free slot is dropped with a warning.

use cardshift_core::contact::{AddressKind, EmailSlot, PhoneSlot};
use cardshift_rfc::rfc::vcard::VCardProperty;
use cardshift_rfc::rfc::vcard::core::types;

use crate::warning::{Warning, WarningCode, Warnings};

/// The lower-cased `TYPE` flags of a property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet(Vec<String>);

impl TypeSet {
    #[must_use]
    pub fn of(prop: &VCardProperty) -> Self {
        Self(prop.types())
    }

    #[must_use]
    pub fn has(&self, flag: &str) -> bool {
        self.0.iter().any(|t| t == flag)
    }
}

/// Sort key for preference: `PREF=n` first by `n`, then the `pref` flag.
#[must_use]
pub fn preference_rank(prop: &VCardProperty) -> u8 {
    prop.pref().unwrap_or(if prop.has_type(types::PREF) {
        1
    } else {
        u8::MAX
    })
}

/// A property competing for a slot.
#[derive(Debug, Clone)]
pub struct Candidate<'a, S> {
    /// Index of the property in the card.
    pub index: usize,
    pub prop: &'a VCardProperty,
    pub value: String,
    /// Acceptable slots, best first.
    pub slots: Vec<S>,
}

/// A property that won a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<S> {
    pub slot: S,
    pub index: usize,
    pub value: String,
}

/// ## Summary
/// Assigns candidates to slots: preferred properties first, then those
/// accepting fewer slots, then source order. Untyped properties therefore
/// only take what typed ones leave free.
///
/// A candidate without a free slot is dropped. Exact duplicates of an
/// already assigned value are dropped silently; anything else records a
/// [`WarningCode::DroppedValue`] warning.
pub fn assign_slots<S>(
    mut candidates: Vec<Candidate<'_, S>>,
    field: &str,
    warnings: &mut Warnings,
) -> Vec<Assignment<S>>
where
    S: Copy + PartialEq + std::fmt::Debug,
{
    candidates.sort_by_key(|c| (preference_rank(c.prop), c.slots.len(), c.index));

    let mut assigned: Vec<Assignment<S>> = Vec::new();
    for candidate in candidates {
        let free = candidate
            .slots
            .iter()
            .copied()
            .find(|slot| assigned.iter().all(|a| a.slot != *slot));

        match free {
            Some(slot) => assigned.push(Assignment {
                slot,
                index: candidate.index,
                value: candidate.value,
            }),
            None if assigned.iter().any(|a| a.value == candidate.value) => {
                tracing::trace!(value = %candidate.value, "Skipping duplicate {field}");
            }
            None => warnings.push(
                Warning::new(
                    WarningCode::DroppedValue,
                    format!("no free {field} slot for {:?}", candidate.value),
                )
                .at(candidate.prop),
            ),
        }
    }
    assigned
}

/// Slot assignment of one card together with what every candidate could
/// have taken.
#[derive(Debug, Clone)]
pub struct SlotPlan<S> {
    pub assigned: Vec<Assignment<S>>,
    /// Index and acceptable slots of each candidate, assigned or not.
    reach: Vec<(usize, Vec<S>)>,
}

impl<S> SlotPlan<S>
where
    S: Copy + PartialEq + std::fmt::Debug,
{
    /// Runs [`assign_slots`] and remembers the candidates' slots.
    pub fn new(candidates: Vec<Candidate<'_, S>>, field: &str, warnings: &mut Warnings) -> Self {
        let reach = candidates
            .iter()
            .map(|c| (c.index, c.slots.clone()))
            .collect();
        Self {
            assigned: assign_slots(candidates, field, warnings),
            reach,
        }
    }

    /// Whether some property of the card could fill `slot`. A merge import
    /// resets only these slots.
    #[must_use]
    pub fn reaches(&self, slot: S) -> bool {
        self.reach.iter().any(|(_, slots)| slots.contains(&slot))
    }

    /// Indices of properties that won no slot but would move into `slot`
    /// if it were free.
    pub fn overflow_into(&self, slot: S) -> impl Iterator<Item = usize> + '_ {
        self.reach
            .iter()
            .filter(move |(index, slots)| {
                slots.contains(&slot) && self.assigned.iter().all(|a| a.index != *index)
            })
            .map(|(index, _)| *index)
    }
}

fn ordered<S>(first: S, second: S, secondary: bool) -> Vec<S> {
    if secondary {
        vec![second, first]
    } else {
        vec![first, second]
    }
}

/// Telephone slots a `TEL` may fill, best first.
#[must_use]
pub fn phone_slots(flags: &TypeSet) -> Vec<PhoneSlot> {
    let secondary = flags.has(types::X_SECONDARY);
    let work = flags.has(types::WORK);
    let home = flags.has(types::HOME);

    if flags.has(types::PAGER) {
        vec![PhoneSlot::Pager]
    } else if flags.has(types::CAR) {
        vec![PhoneSlot::Car]
    } else if flags.has(types::ISDN) {
        vec![PhoneSlot::Isdn]
    } else if flags.has(types::CELL) {
        ordered(PhoneSlot::Cellular1, PhoneSlot::Cellular2, secondary)
    } else if flags.has(types::FAX) {
        if work {
            vec![PhoneSlot::BusinessFax]
        } else if home {
            vec![PhoneSlot::HomeFax]
        } else {
            vec![PhoneSlot::OtherFax]
        }
    } else if work {
        ordered(PhoneSlot::Business1, PhoneSlot::Business2, secondary)
    } else if home {
        ordered(PhoneSlot::Home1, PhoneSlot::Home2, secondary)
    } else if flags.has(types::OTHER) {
        vec![PhoneSlot::Other]
    } else {
        vec![
            PhoneSlot::Other,
            PhoneSlot::Business1,
            PhoneSlot::Home1,
            PhoneSlot::Business2,
            PhoneSlot::Home2,
            PhoneSlot::Cellular1,
            PhoneSlot::Cellular2,
        ]
    }
}

/// `TYPE` flags written for a telephone slot.
#[must_use]
pub const fn phone_flags(slot: PhoneSlot) -> &'static [&'static str] {
    match slot {
        PhoneSlot::Business1 => &[types::WORK, types::VOICE],
        PhoneSlot::Business2 => &[types::WORK, types::VOICE, types::X_SECONDARY],
        PhoneSlot::BusinessFax => &[types::WORK, types::FAX],
        PhoneSlot::Home1 => &[types::HOME, types::VOICE],
        PhoneSlot::Home2 => &[types::HOME, types::VOICE, types::X_SECONDARY],
        PhoneSlot::HomeFax => &[types::HOME, types::FAX],
        PhoneSlot::Cellular1 => &[types::CELL, types::VOICE],
        PhoneSlot::Cellular2 => &[types::CELL, types::VOICE, types::X_SECONDARY],
        PhoneSlot::Pager => &[types::PAGER],
        PhoneSlot::Car => &[types::CAR, types::VOICE],
        PhoneSlot::Isdn => &[types::ISDN],
        PhoneSlot::Other => &[types::OTHER, types::VOICE],
        PhoneSlot::OtherFax => &[types::OTHER, types::FAX],
    }
}

/// Email slots an `EMAIL` may fill, best first. Typed addresses overflow
/// into the other slot.
#[must_use]
pub fn email_slots(flags: &TypeSet) -> Vec<EmailSlot> {
    if flags.has(types::WORK) {
        vec![EmailSlot::Business, EmailSlot::Other]
    } else if flags.has(types::HOME) {
        vec![EmailSlot::Home, EmailSlot::Other]
    } else if flags.has(types::OTHER) {
        vec![EmailSlot::Other]
    } else {
        EmailSlot::ALL.to_vec()
    }
}

#[must_use]
pub const fn email_flag(slot: EmailSlot) -> &'static str {
    match slot {
        EmailSlot::Business => types::WORK,
        EmailSlot::Home => types::HOME,
        EmailSlot::Other => types::OTHER,
    }
}

/// Address blocks an `ADR` may fill, best first.
#[must_use]
pub fn address_kinds(flags: &TypeSet) -> Vec<AddressKind> {
    if flags.has(types::WORK) {
        vec![AddressKind::Business]
    } else if flags.has(types::HOME) {
        vec![AddressKind::Home]
    } else if flags.has(types::OTHER) {
        vec![AddressKind::Other]
    } else {
        vec![AddressKind::Home, AddressKind::Business, AddressKind::Other]
    }
}

#[must_use]
pub const fn address_flag(kind: AddressKind) -> &'static str {
    match kind {
        AddressKind::Business => types::WORK,
        AddressKind::Home => types::HOME,
        AddressKind::Other => types::OTHER,
    }
}
