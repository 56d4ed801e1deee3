//! A single content line: `[group.]NAME[;params]:value`.

use super::parameter::{VCardParameter, encodings};
use super::value::VCardValue;

/// One property of a card.
///
/// `raw_value` keeps the text as it appeared on the wire (still escaped and
/// transfer-encoded) so the value can be re-decoded once the charset is
/// known. It is empty for properties built in code.
#[derive(Debug, Clone, PartialEq)]
pub struct VCardProperty {
    /// `item1` in `item1.TEL`.
    pub group: Option<String>,
    /// Uppercase.
    pub name: String,
    pub params: Vec<VCardParameter>,
    pub value: VCardValue,
    pub raw_value: String,
    /// 1-based line the property started on.
    pub line: Option<usize>,
}

impl VCardProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value: VCardValue) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self {
            group: None,
            name,
            params: Vec::new(),
            value,
            raw_value: String::new(),
            line: None,
        }
    }

    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut prop = Self::new(name, VCardValue::Text(value.clone()));
        prop.raw_value = value;
        prop
    }

    #[must_use]
    pub fn grouped_text(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut prop = Self::text(name, value);
        prop.group = Some(group.into());
        prop
    }

    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut prop = Self::new(name, VCardValue::Uri(value.clone()));
        prop.raw_value = value;
        prop
    }

    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.add_param(param);
        self
    }

    /// Case-insensitive name check.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn get_params<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VCardParameter> {
        self.params
            .iter()
            .filter(move |p| p.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// First value of the first parameter called `name`.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name).and_then(VCardParameter::value)
    }

    /// Looks through every `TYPE` parameter, so `TYPE=HOME;TYPE=VOICE`
    /// and `TYPE=HOME,VOICE` answer alike.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_params("TYPE").any(|p| p.has_value(type_value))
    }

    /// All `TYPE` values, lowercase, in order of appearance.
    #[must_use]
    pub fn types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for value in self.get_params("TYPE").flat_map(|p| &p.values) {
            types.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_ascii_lowercase),
            );
        }
        types
    }

    /// `PREF=n`; lower is preferred. Unparseable ranks read as absent.
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.get_param_value("PREF")?.parse().ok()
    }

    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.get_param_value("ENCODING")
    }

    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.get_param_value("CHARSET")
    }

    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.encoding()
            .is_some_and(|e| e.eq_ignore_ascii_case(encodings::QUOTED_PRINTABLE))
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let VCardValue::Text(text) = &self.value {
            Some(text)
        } else {
            None
        }
    }

    pub fn add_param(&mut self, param: VCardParameter) {
        self.params.push(param);
    }

    /// Drops any parameter of the same name, then adds `param`.
    pub fn set_param(&mut self, param: VCardParameter) {
        self.remove_param(&param.name);
        self.add_param(param);
    }

    pub fn remove_param(&mut self, name: &str) {
        self.params.retain(|p| !p.name.eq_ignore_ascii_case(name));
    }

    /// Appends to the first `TYPE` parameter, creating it if needed.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        match self.params.iter_mut().find(|p| p.name == "TYPE") {
            Some(param) => param.values.push(type_value.into()),
            None => self.add_param(VCardParameter::type_param(type_value)),
        }
    }
}

/// Property names the mappings handle.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ANNIVERSARY: &str = "ANNIVERSARY";

    pub const ADR: &str = "ADR";
    /// 2.1/3.0 formatted address; a parameter of `ADR` in 4.0.
    pub const LABEL: &str = "LABEL";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const URL: &str = "URL";

    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const ORG: &str = "ORG";

    pub const KIND: &str = "KIND";
    pub const MEMBER: &str = "MEMBER";

    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const PRODID: &str = "PRODID";
    pub const REV: &str = "REV";
    pub const UID: &str = "UID";
}
