//! Property parameters (`TYPE=home,work`, `ENCODING=b`, ...).

/// A named parameter with one or more values.
///
/// The name is stored uppercase so lookups and output agree no matter how
/// the producer spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    pub name: String,
    pub values: Vec<String>,
}

impl VCardParameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::multi(name, vec![value.into()])
    }

    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        let mut name = name.into();
        name.make_ascii_uppercase();
        Self { name, values }
    }

    /// First value, for parameters that are single-valued in practice.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Case-insensitive membership test over the values.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// `PREF=n` as written by 4.0; lower numbers win.
    #[must_use]
    pub fn pref(rank: u8) -> Self {
        Self::new("PREF", rank.to_string())
    }

    #[must_use]
    pub fn value_type(kind: impl Into<String>) -> Self {
        Self::new("VALUE", kind)
    }

    #[must_use]
    pub fn encoding(value: impl Into<String>) -> Self {
        Self::new("ENCODING", value)
    }

    #[must_use]
    pub fn charset(value: impl Into<String>) -> Self {
        Self::new("CHARSET", value)
    }

    /// The 4.0 `LABEL` parameter of `ADR`.
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::new("LABEL", text)
    }
}

/// `TYPE` values the field mappings read and write.
pub mod types {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";
    pub const OTHER: &str = "other";
    pub const INTERNET: &str = "internet";

    pub const VOICE: &str = "voice";
    pub const FAX: &str = "fax";
    pub const CELL: &str = "cell";
    pub const PAGER: &str = "pager";
    pub const CAR: &str = "car";
    pub const ISDN: &str = "isdn";

    /// Preference flag of 2.1 and 3.0.
    pub const PREF: &str = "pref";
    /// Second number of a category (`telephone_business2` and friends).
    pub const X_SECONDARY: &str = "x-secondary";
}

/// `ENCODING` values.
pub mod encodings {
    pub const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";
    pub const BASE64: &str = "BASE64";
    /// 3.0 spelling of base64.
    pub const B: &str = "b";
    pub const EIGHT_BIT: &str = "8BIT";
    pub const SEVEN_BIT: &str = "7BIT";

    /// 2.1 allows the encoding as a bare token (`PHOTO;BASE64:`).
    #[must_use]
    pub fn is_encoding_token(token: &str) -> bool {
        [QUOTED_PRINTABLE, BASE64, B, EIGHT_BIT, SEVEN_BIT]
            .into_iter()
            .any(|known| known.eq_ignore_ascii_case(token))
    }

    #[must_use]
    pub fn is_base64(value: &str) -> bool {
        [BASE64, B].into_iter().any(|b| b.eq_ignore_ascii_case(value))
    }
}
