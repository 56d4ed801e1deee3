//! Text decoding: document charset, quoted-printable and per-property
//! `CHARSET`.

use std::borrow::Cow;

use encoding_rs::{Encoding, WINDOWS_1252};

use cardshift_rfc::rfc::vcard::parse::{split_component, split_structured, unescape_text};
use cardshift_rfc::rfc::vcard::{VCardProperty, VCardValue};

use crate::policy::VersionPolicy;
use crate::warning::{Warning, WarningCode, Warnings};

/// ## Summary
/// Decodes a raw vCard document to text.
///
/// Tries, in order: the caller's charset hint, a byte-order mark, UTF-8 and
/// finally windows-1252. Falling back to windows-1252 records a
/// [`WarningCode::MalformedInput`] warning; an unknown hint records
/// [`WarningCode::UnsupportedCharset`] and detection continues.
#[tracing::instrument(skip(input, warnings), fields(input_len = input.len()))]
pub fn decode_document(input: &[u8], hint: Option<&str>, warnings: &mut Warnings) -> String {
    if let Some(label) = hint {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            tracing::trace!(encoding = encoding.name(), "Decoding with charset hint");
            let (text, _, had_errors) = encoding.decode(input);
            if had_errors {
                warnings.push(Warning::new(
                    WarningCode::MalformedInput,
                    format!("input contains bytes that are invalid in {}", encoding.name()),
                ));
            }
            return text.into_owned();
        }
        warnings.push(Warning::new(
            WarningCode::UnsupportedCharset,
            format!("unknown charset {label:?}, detecting instead"),
        ));
    }

    if let Some((encoding, bom_len)) = Encoding::for_bom(input) {
        tracing::trace!(encoding = encoding.name(), "Decoding by byte-order mark");
        let (text, _) = encoding.decode_without_bom_handling(&input[bom_len..]);
        return text.into_owned();
    }

    match std::str::from_utf8(input) {
        Ok(text) => text.to_string(),
        Err(e) => {
            warnings.push(Warning::new(
                WarningCode::MalformedInput,
                format!(
                    "input is not valid UTF-8 after byte {}, decoding as windows-1252",
                    e.valid_up_to()
                ),
            ));
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(input);
            text.into_owned()
        }
    }
}

/// Decodes quoted-printable data. Soft line breaks have already been joined
/// by the parser; malformed escapes are kept literally.
#[must_use]
pub fn decode_quoted_printable(value: &str) -> Vec<u8> {
    let bytes = value.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'='
            && let Some(&[hi, lo]) = bytes.get(i + 1..i + 3)
            && let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo))
        {
            result.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        result.push(bytes[i]);
        i += 1;
    }

    result
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes bytes in the charset a property declares.
///
/// Without a charset the bytes are read as UTF-8, falling back to
/// windows-1252 for legacy producers.
pub fn decode_charset(
    bytes: &[u8],
    charset: Option<&str>,
    prop: &VCardProperty,
    warnings: &mut Warnings,
) -> String {
    if let Some(label) = charset {
        if let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) {
            let (text, _) = encoding.decode_without_bom_handling(bytes);
            return text.into_owned();
        }
        warnings.push(
            Warning::new(
                WarningCode::UnsupportedCharset,
                format!("unknown charset {label:?}, reading as UTF-8"),
            )
            .at(prop),
        );
        return String::from_utf8_lossy(bytes).into_owned();
    }

    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => text,
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
    }
}

/// Returns the raw value with transfer encoding removed. The result is
/// still vCard-escaped. Quoted-printable line breaks read as `\n`.
pub fn escaped_value<'a>(
    prop: &'a VCardProperty,
    policy: VersionPolicy,
    warnings: &mut Warnings,
) -> Cow<'a, str> {
    let raw = match &prop.value {
        VCardValue::Unknown(raw) => raw.as_str(),
        _ => prop.raw_value.as_str(),
    };

    if policy.uses_transfer_parameters() && prop.is_quoted_printable() {
        let bytes = decode_quoted_printable(raw);
        Cow::Owned(decode_charset(&bytes, prop.charset(), prop, warnings).replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Decodes a single text value, empty or not.
pub fn decode_text(prop: &VCardProperty, policy: VersionPolicy, warnings: &mut Warnings) -> String {
    match &prop.value {
        VCardValue::Text(s) | VCardValue::Uri(s) => s.clone(),
        VCardValue::TextList(list) => list.join(","),
        _ => unescape_text(&escaped_value(prop, policy, warnings)),
    }
}

/// Decodes a single text value. Empty values read as `None`.
pub fn text_value(
    prop: &VCardProperty,
    policy: VersionPolicy,
    warnings: &mut Warnings,
) -> Option<String> {
    Some(decode_text(prop, policy, warnings)).filter(|s| !s.is_empty())
}

/// Decodes a comma-separated list, skipping empty items.
pub fn list_value(prop: &VCardProperty, policy: VersionPolicy, warnings: &mut Warnings) -> Vec<String> {
    let items = match &prop.value {
        VCardValue::TextList(list) => list.clone(),
        VCardValue::Text(s) => vec![s.clone()],
        _ => split_component(&escaped_value(prop, policy, warnings)),
    };
    items.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Components of a structured value (N, ADR, ORG).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Components {
    values: Vec<String>,
    /// Number of components present in the source.
    pub count: usize,
}

impl Components {
    /// Returns component `index`, `None` when missing or empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        self.values.get(index).filter(|s| !s.is_empty()).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

/// Splits a structured value into unescaped components. Multi-valued
/// components are joined with commas.
pub fn components(prop: &VCardProperty, policy: VersionPolicy, warnings: &mut Warnings) -> Components {
    let values: Vec<String> = match &prop.value {
        VCardValue::StructuredName(n) => n.components().iter().map(|c| c.join(",")).collect(),
        VCardValue::Address(a) => a.components().iter().map(|c| c.join(",")).collect(),
        VCardValue::Organization(o) => std::iter::once(o.name.clone())
            .chain(o.units.iter().cloned())
            .collect(),
        VCardValue::Text(s) => vec![s.clone()],
        _ => split_structured(&escaped_value(prop, policy, warnings))
            .into_iter()
            .map(unescape_text)
            .collect(),
    };

    let count = match &prop.value {
        VCardValue::StructuredName(_) | VCardValue::Address(_) | VCardValue::Organization(_)
            if !prop.raw_value.is_empty() =>
        {
            split_structured(&prop.raw_value).len()
        }
        _ => values.len(),
    };

    Components { values, count }
}

/// Loose email syntax check: one `@` with text on both sides, a dot in the
/// domain and no whitespace.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !address.chars().any(char::is_whitespace)
}
