//! Date and timestamp values.

use chrono::{DateTime, NaiveDate, Utc};

use cardshift_rfc::rfc::vcard::core::names;
use cardshift_rfc::rfc::vcard::parse::{parse_date, parse_timestamp};
use cardshift_rfc::rfc::vcard::{VCardParameter, VCardProperty, VCardValue};

use crate::policy::VersionPolicy;
use crate::warning::{Warning, WarningCode, Warnings};

/// Reads a full calendar date. Partial or unparseable dates record an
/// [`WarningCode::InvalidDate`] warning and read as `None`.
pub fn decode_date(prop: &VCardProperty, warnings: &mut Warnings) -> Option<NaiveDate> {
    let raw = match &prop.value {
        VCardValue::Date(date) => return Some(*date),
        VCardValue::Text(s) | VCardValue::Unknown(s) => s.as_str(),
        _ => prop.raw_value.as_str(),
    };
    if raw.trim().is_empty() {
        return None;
    }

    match parse_date(raw, prop.line.unwrap_or_default()) {
        Ok(date) => Some(date),
        Err(e) => {
            warnings.push(Warning::new(WarningCode::InvalidDate, e.message).at(prop));
            None
        }
    }
}

/// Builds a date property with the version's `VALUE` hint.
#[must_use]
pub fn date_property(name: &str, date: NaiveDate, policy: VersionPolicy) -> VCardProperty {
    let mut prop = VCardProperty::new(name, VCardValue::Date(date));
    if let Some(hint) = policy.date_value_hint() {
        prop.add_param(VCardParameter::value_type(hint));
    }
    prop
}

/// Reads a `REV` timestamp. Unparseable values record an
/// [`WarningCode::InvalidTimestamp`] warning.
pub fn decode_timestamp(prop: &VCardProperty, warnings: &mut Warnings) -> Option<DateTime<Utc>> {
    let raw = match &prop.value {
        VCardValue::Timestamp(ts) => return Some(*ts),
        VCardValue::Text(s) | VCardValue::Unknown(s) => s.as_str(),
        _ => prop.raw_value.as_str(),
    };
    if raw.trim().is_empty() {
        return None;
    }

    match parse_timestamp(raw, prop.line.unwrap_or_default()) {
        Ok(ts) => Some(ts),
        Err(e) => {
            warnings.push(Warning::new(WarningCode::InvalidTimestamp, e.message).at(prop));
            None
        }
    }
}

#[must_use]
pub fn timestamp_property(ts: DateTime<Utc>) -> VCardProperty {
    VCardProperty::new(names::REV, VCardValue::Timestamp(ts))
}
