//! Per-version behaviour.
//!
//! Everything that differs between vCard 2.1, 3.0 and 4.0 is decided here so
//! the field mappings never compare version strings themselves.

use cardshift_rfc::rfc::vcard::core::{encodings, names, types};
use cardshift_rfc::rfc::vcard::{VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion};

use crate::warning::{Warning, WarningCode, Warnings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionPolicy {
    V21,
    #[default]
    V30,
    V40,
}

impl VersionPolicy {
    /// ## Summary
    /// Resolves the policy for a parsed card.
    ///
    /// A missing or unrecognised `VERSION` falls back to 3.0 and records an
    /// [`WarningCode::UnknownVersion`] warning.
    pub fn resolve(card: &VCard, warnings: &mut Warnings) -> Self {
        match card.declared_version.as_deref() {
            None => {
                warnings.push(Warning::new(
                    WarningCode::UnknownVersion,
                    "VERSION property missing, reading as vCard 3.0",
                ));
                Self::V30
            }
            Some(declared) if VCardVersion::parse(declared).is_none() => {
                warnings.push(Warning::new(
                    WarningCode::UnknownVersion,
                    format!("unsupported VERSION {declared:?}, reading as vCard 3.0"),
                ));
                Self::V30
            }
            Some(_) => Self::from(card.version),
        }
    }

    #[must_use]
    pub const fn version(self) -> VCardVersion {
        match self {
            Self::V21 => VCardVersion::V21,
            Self::V30 => VCardVersion::V3,
            Self::V40 => VCardVersion::V4,
        }
    }

    /// Spells a TYPE value the way this version writes it.
    #[must_use]
    pub fn type_flag(self, flag: &str) -> String {
        match self {
            Self::V21 => flag.to_ascii_uppercase(),
            Self::V30 | Self::V40 => flag.to_ascii_lowercase(),
        }
    }

    /// Replaces the TYPE parameters of `prop` with `flags`.
    pub fn set_types(self, prop: &mut VCardProperty, flags: &[&str]) {
        prop.remove_param("TYPE");
        if flags.is_empty() {
            return;
        }
        let values = flags.iter().map(|f| self.type_flag(f)).collect();
        prop.add_param(VCardParameter::multi("TYPE", values));
    }

    /// Marks `prop` as the preferred instance of its kind.
    pub fn mark_preferred(self, prop: &mut VCardProperty) {
        match self {
            Self::V21 | Self::V30 => prop.add_type(self.type_flag(types::PREF)),
            Self::V40 => prop.set_param(VCardParameter::pref(1)),
        }
    }

    /// `VALUE` hint written with date properties.
    #[must_use]
    pub const fn date_value_hint(self) -> Option<&'static str> {
        match self {
            Self::V30 => Some("date"),
            Self::V21 | Self::V40 => None,
        }
    }

    /// `VALUE` hint written with URI properties.
    #[must_use]
    pub const fn uri_value_hint(self) -> Option<&'static str> {
        match self {
            Self::V21 => Some("URL"),
            Self::V30 => Some("uri"),
            Self::V40 => None,
        }
    }

    /// Number of `N` components a well-formed card carries.
    #[must_use]
    pub const fn name_components(self) -> usize {
        match self {
            Self::V21 => 4,
            Self::V30 | Self::V40 => 5,
        }
    }

    /// Whether `CHARSET` and `ENCODING` parameters are honoured.
    #[must_use]
    pub const fn uses_transfer_parameters(self) -> bool {
        !matches!(self, Self::V40)
    }

    /// Sets a text value, dropping transfer parameters that no longer apply.
    pub fn apply_text(self, prop: &mut VCardProperty, text: &str) {
        self.apply_value(prop, VCardValue::Text(text.to_string()), !text.is_ascii());
    }

    /// Sets a value, dropping stale transfer parameters. `non_ascii` adds the
    /// 2.1 charset declaration.
    pub fn apply_value(self, prop: &mut VCardProperty, value: VCardValue, non_ascii: bool) {
        prop.remove_param("ENCODING");
        prop.remove_param("CHARSET");
        prop.value = value;
        prop.raw_value.clear();
        if self == Self::V21 && non_ascii {
            prop.add_param(VCardParameter::charset("UTF-8"));
        }
    }

    /// Builds a PHOTO property for inline image data.
    #[must_use]
    pub fn photo_property(self, data: &[u8], content_type: Option<&str>) -> VCardProperty {
        let subtype = content_type
            .and_then(|ct| ct.split_once('/'))
            .map(|(_, subtype)| subtype.to_ascii_uppercase());

        match self {
            Self::V21 | Self::V30 => {
                let encoding = if self == Self::V21 {
                    encodings::BASE64
                } else {
                    encodings::B
                };
                let mut prop = VCardProperty::new(names::PHOTO, VCardValue::Binary(data.to_vec()))
                    .with_param(VCardParameter::encoding(encoding));
                if let Some(subtype) = subtype {
                    prop.add_type(subtype);
                }
                prop
            }
            Self::V40 => {
                let uri = crate::codec::photo::data_uri(data, content_type);
                VCardProperty::uri(names::PHOTO, uri)
            }
        }
    }

    /// Whether an address label is an `ADR` parameter rather than a
    /// separate `LABEL` property.
    #[must_use]
    pub const fn label_as_parameter(self) -> bool {
        matches!(self, Self::V40)
    }

    /// Property name used for the anniversary.
    #[must_use]
    pub const fn anniversary_property(self) -> &'static str {
        match self {
            Self::V40 => names::ANNIVERSARY,
            Self::V21 | Self::V30 => "X-ANNIVERSARY",
        }
    }

    /// Whether emails carry the 2.1 `INTERNET` flag.
    #[must_use]
    pub const fn internet_email_flag(self) -> bool {
        matches!(self, Self::V21)
    }
}

impl From<VCardVersion> for VersionPolicy {
    fn from(version: VCardVersion) -> Self {
        match version {
            VCardVersion::V21 => Self::V21,
            VCardVersion::V3 => Self::V30,
            VCardVersion::V4 => Self::V40,
        }
    }
}
