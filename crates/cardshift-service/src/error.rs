use thiserror::Error;

use cardshift_core::error::CoreError;
use cardshift_rfc::rfc::vcard::ParseError;

/// Fatal import/export errors. Field-level problems are reported as
/// [`Warning`](crate::warning::Warning)s instead.
#[derive(Error, Debug)]
pub enum VCardError {
    #[error("vCard of {size} bytes exceeds the maximum of {limit} bytes")]
    MaximumSizeExceeded { size: u64, limit: u64 },

    #[error("No vCard found in input")]
    NoVCard,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl VCardError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MaximumSizeExceeded { .. } => "VCARD-0001",
            Self::NoVCard => "VCARD-0002",
            Self::Parse(_) => "VCARD-0003",
            Self::Io(_) => "VCARD-0004",
            Self::Configuration(_) => "VCARD-0005",
            Self::Core(_) => "VCARD-0006",
        }
    }
}

pub type VCardResult<T> = std::result::Result<T, VCardError>;
