//! Postal addresses and their labels.

use cardshift_core::contact::PostalAddress;
use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::{Address, VCard, VCardProperty};

use super::text::{components, text_value};
use crate::policy::VersionPolicy;
use crate::warning::{Warning, WarningCode, Warnings};

/// Fewest `ADR` components accepted without a warning. Some producers drop
/// the trailing country.
const MIN_COMPONENTS: usize = Address::COMPONENTS - 1;

/// ## Summary
/// Reads the components of an `ADR` property. The label is not included.
///
/// Values with fewer than six components are still mapped positionally but
/// record a [`WarningCode::ShortStructuredValue`] warning.
pub fn decode_address(
    prop: &VCardProperty,
    policy: VersionPolicy,
    warnings: &mut Warnings,
) -> PostalAddress {
    let parts = components(prop, policy, warnings);
    if parts.count < MIN_COMPONENTS {
        warnings.push(
            Warning::new(
                WarningCode::ShortStructuredValue,
                format!(
                    "address has {} of {} components",
                    parts.count,
                    Address::COMPONENTS
                ),
            )
            .at(prop),
        );
    }

    PostalAddress {
        street: parts.get(2),
        city: parts.get(3),
        region: parts.get(4),
        postal_code: parts.get(5),
        country: parts.get(6),
        label: None,
    }
}

/// Builds an `ADR` value. Post office box and extended address are not part
/// of a contact and are kept from `existing`.
#[must_use]
pub fn encode_address(address: &PostalAddress, existing: Option<&Address>) -> Address {
    let component = |value: &Option<String>| value.iter().cloned().collect::<Vec<_>>();
    Address {
        po_box: existing.map(|a| a.po_box.clone()).unwrap_or_default(),
        extended: existing.map(|a| a.extended.clone()).unwrap_or_default(),
        street: component(&address.street),
        locality: component(&address.city),
        region: component(&address.region),
        postal_code: component(&address.postal_code),
        country: component(&address.country),
    }
}

/// ## Summary
/// Finds the `LABEL` property belonging to the `ADR` at `adr_index`.
///
/// A grouped address matches a `LABEL` of the same group. An ungrouped one
/// matches an ungrouped `LABEL` carrying `flag`.
#[must_use]
pub fn find_label(card: &VCard, adr_index: usize, flag: &str) -> Option<usize> {
    let adr = card.properties.get(adr_index)?;
    card.properties.iter().position(|p| {
        p.is(names::LABEL)
            && match (&adr.group, &p.group) {
                (Some(adr_group), Some(group)) => adr_group.eq_ignore_ascii_case(group),
                (None, None) => p.has_type(flag),
                _ => false,
            }
    })
}

/// Reads the label of the `ADR` at `adr_index`: the `LABEL` parameter when
/// present, otherwise (before 4.0) the matching `LABEL` property.
pub fn decode_label(
    card: &VCard,
    adr_index: usize,
    flag: &str,
    policy: VersionPolicy,
    warnings: &mut Warnings,
) -> Option<String> {
    let adr = card.properties.get(adr_index)?;
    if let Some(label) = adr.get_param_value("LABEL") {
        return Some(label.to_string()).filter(|l| !l.is_empty());
    }
    if policy.label_as_parameter() {
        return None;
    }
    let index = find_label(card, adr_index, flag)?;
    text_value(&card.properties[index], policy, warnings)
}
