//! Writes cards back to text.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion};

/// Writes every card in turn.
///
/// Lines end in CRLF and are folded at 75 octets. `VERSION` comes right
/// after `BEGIN:VCARD` and always reflects [`VCard::version`]; the other
/// properties keep their stored order.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    cards.iter().map(serialize_single).collect()
}

#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = format!("BEGIN:VCARD\r\nVERSION:{}\r\n", card.version);
    for prop in card.properties.iter().filter(|p| !p.is("VERSION")) {
        output.push_str(&fold_line(&content_line(prop, card.version)));
        output.push_str("\r\n");
    }
    output.push_str("END:VCARD\r\n");
    output
}

/// One unfolded content line without its line break.
fn content_line(prop: &VCardProperty, version: VCardVersion) -> String {
    let mut line = prop
        .group
        .as_ref()
        .map(|group| format!("{group}."))
        .unwrap_or_default();
    line.push_str(&prop.name);

    for param in &prop.params {
        if version == VCardVersion::V21 && param.name.eq_ignore_ascii_case("TYPE") {
            push_bare_flags(param, &mut line);
        } else {
            push_parameter(param, &mut line);
        }
    }

    line.push(':');
    push_value(&prop.value, version, &mut line);
    line
}

/// 2.1 writes types as `;WORK;VOICE`.
fn push_bare_flags(param: &VCardParameter, line: &mut String) {
    let flags = param
        .values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|f| !f.is_empty());
    for flag in flags {
        line.push(';');
        line.push_str(&flag.to_ascii_uppercase());
    }
}

fn push_parameter(param: &VCardParameter, line: &mut String) {
    line.push(';');
    line.push_str(&param.name);

    for (i, value) in param.values.iter().enumerate() {
        line.push(if i == 0 { '=' } else { ',' });
        match escape_param_value(value) {
            (escaped, true) => {
                line.push('"');
                line.push_str(&escaped);
                line.push('"');
            }
            (escaped, false) => line.push_str(&escaped),
        }
    }
}

fn push_value(value: &VCardValue, version: VCardVersion, line: &mut String) {
    match value {
        VCardValue::Text(s) => line.push_str(&escape_text(s)),
        // Unparsed values go back exactly as they came.
        VCardValue::Uri(s) | VCardValue::Unknown(s) => line.push_str(s),
        VCardValue::TextList(list) => push_list(list, line),
        VCardValue::StructuredName(name) => push_components(&name.components(), line),
        VCardValue::Address(adr) => push_components(&adr.components(), line),
        VCardValue::Organization(org) => {
            line.push_str(&escape_text(&org.name));
            for unit in &org.units {
                line.push(';');
                line.push_str(&escape_text(unit));
            }
        }
        VCardValue::Date(date) => {
            let format = if version == VCardVersion::V3 {
                "%Y-%m-%d"
            } else {
                "%Y%m%d"
            };
            line.push_str(&date.format(format).to_string());
        }
        VCardValue::Timestamp(ts) => line.push_str(&ts.format("%Y%m%dT%H%M%SZ").to_string()),
        VCardValue::Binary(data) => line.push_str(&STANDARD.encode(data)),
    }
}

fn push_components(components: &[&[String]], line: &mut String) {
    for (i, list) in components.iter().enumerate() {
        if i > 0 {
            line.push(';');
        }
        push_list(list, line);
    }
}

fn push_list(list: &[String], line: &mut String) {
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&escape_text(item));
    }
}
