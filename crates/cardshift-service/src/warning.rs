//! Recoverable conversion problems.
//!
//! A [`Warning`] describes a field-level problem that did not stop the
//! import or export. Warnings are collected in a [`Warnings`] accumulator
//! threaded through one call and returned alongside the result.

use std::fmt;

use serde::{Deserialize, Serialize};

use cardshift_rfc::rfc::vcard::VCardProperty;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    InvalidDate,
    InvalidEmail,
    ImageTooLarge,
    ImageUnavailable,
    ImageRejected,
    InvalidImage,
    UnknownVersion,
    ShortStructuredValue,
    DroppedValue,
    InvalidColorLabel,
    InvalidTimestamp,
    UnsupportedCharset,
    MalformedInput,
    InvalidMember,
}

impl WarningCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidDate => "invalid_date",
            Self::InvalidEmail => "invalid_email",
            Self::ImageTooLarge => "image_too_large",
            Self::ImageUnavailable => "image_unavailable",
            Self::ImageRejected => "image_rejected",
            Self::InvalidImage => "invalid_image",
            Self::UnknownVersion => "unknown_version",
            Self::ShortStructuredValue => "short_structured_value",
            Self::DroppedValue => "dropped_value",
            Self::InvalidColorLabel => "invalid_color_label",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::UnsupportedCharset => "unsupported_charset",
            Self::MalformedInput => "malformed_input",
            Self::InvalidMember => "invalid_member",
        }
    }

    /// Default severity. Major warnings mean data from the source was lost.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ImageTooLarge
            | Self::ImageUnavailable
            | Self::ImageRejected
            | Self::InvalidImage
            | Self::DroppedValue
            | Self::MalformedInput
            | Self::InvalidMember => Severity::Major,
            Self::InvalidDate
            | Self::InvalidEmail
            | Self::UnknownVersion
            | Self::ShortStructuredValue
            | Self::InvalidColorLabel
            | Self::InvalidTimestamp
            | Self::UnsupportedCharset => Severity::Minor,
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minor,
    Major,
}

/// The property a warning refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningSource {
    /// Property name, upper-case.
    pub property: String,
    /// 1-based source line, when known.
    pub line: Option<usize>,
}

/// A recoverable problem found while converting one contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: WarningCode,
    pub severity: Severity,
    pub source: Option<WarningSource>,
    pub message: String,
}

impl Warning {
    /// Creates a warning with the code's default severity.
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            source: None,
            message: message.into(),
        }
    }

    /// Attributes the warning to a property.
    #[must_use]
    pub fn at(mut self, prop: &VCardProperty) -> Self {
        self.source = Some(WarningSource {
            property: prop.name.clone(),
            line: prop.line,
        });
        self
    }

    /// Attributes the warning to a source line only.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.source = Some(WarningSource {
            property: String::new(),
            line: Some(line),
        });
        self
    }

    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.source.as_ref().and_then(|s| s.line)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code)?;
        match &self.source {
            Some(WarningSource {
                property,
                line: Some(line),
            }) if !property.is_empty() => write!(f, "{property} (line {line}): ")?,
            Some(WarningSource {
                property,
                line: None,
            }) if !property.is_empty() => write!(f, "{property}: ")?,
            Some(WarningSource {
                line: Some(line), ..
            }) => write!(f, "line {line}: ")?,
            _ => {}
        }
        f.write_str(&self.message)
    }
}

/// Ordered accumulator for the warnings of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    items: Vec<Warning>,
}

impl Warnings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::warn!(
            code = %warning.code,
            severity = ?warning.severity,
            line = ?warning.line(),
            "{}",
            warning.message
        );
        self.items.push(warning);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.items.iter()
    }

    /// Returns whether any warning has the given code.
    #[must_use]
    pub fn contains(&self, code: WarningCode) -> bool {
        self.items.iter().any(|w| w.code == code)
    }

    /// Drops source line numbers, keeping property names.
    pub fn strip_line_numbers(&mut self) {
        for source in self.items.iter_mut().filter_map(|w| w.source.as_mut()) {
            source.line = None;
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Warning> {
        self.items
    }
}

impl Extend<Warning> for Warnings {
    fn extend<T: IntoIterator<Item = Warning>>(&mut self, iter: T) {
        for warning in iter {
            self.push(warning);
        }
    }
}

impl<'a> IntoIterator for &'a Warnings {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
