//! Import and export entry points.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use cardshift_core::config::{Settings, VCardConfig};
use cardshift_core::constants::{DEFAULT_MAX_IMAGE_SIZE, DEFAULT_MAX_VCARD_SIZE};
use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::{VCard, VCardVersion, parse_lenient, serialize_single};

use crate::codec::photo::ImageSource;
use crate::codec::text::decode_document;
use crate::error::{VCardError, VCardResult};
use crate::fetch::{HttpImageFetcher, ImageFetcher};
use crate::mapping::{ExportContext, ImportContext};
use crate::policy::VersionPolicy;
use crate::registry::MappingRegistry;
use crate::stream::VCardImportIterator;
use crate::warning::{Warning, WarningCode, Warnings};

/// Per-call options. Start from [`VCardService::parameters`] or
/// [`VCardParameters::from_config`] and adjust with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameters {
    /// Version written by exports.
    pub version: VCardVersion,
    /// Largest accepted document in bytes; `None` disables the check.
    pub max_vcard_size: Option<u64>,
    /// Largest accepted decoded image in bytes; `None` disables the check.
    pub max_image_size: Option<u64>,
    pub keep_original_vcard: bool,
    pub remove_image_from_kept_vcard: bool,
    pub include_line_numbers: bool,
    /// Charset of the input, when the caller knows it.
    pub charset: Option<String>,
}

impl Default for VCardParameters {
    fn default() -> Self {
        Self {
            version: VCardVersion::V3,
            max_vcard_size: Some(DEFAULT_MAX_VCARD_SIZE),
            max_image_size: Some(DEFAULT_MAX_IMAGE_SIZE),
            keep_original_vcard: false,
            remove_image_from_kept_vcard: true,
            include_line_numbers: true,
            charset: None,
        }
    }
}

impl VCardParameters {
    /// ## Summary
    /// Builds parameters from the `[vcard]` configuration section.
    ///
    /// ## Errors
    /// Returns [`VCardError::Configuration`] if the default version is not
    /// one of "2.1", "3.0" or "4.0".
    pub fn from_config(config: &VCardConfig) -> VCardResult<Self> {
        let version = VCardVersion::parse(&config.default_version).ok_or_else(|| {
            VCardError::Configuration(format!(
                "unsupported default vCard version: {}",
                config.default_version
            ))
        })?;

        Ok(Self {
            version,
            max_vcard_size: Some(config.max_vcard_size),
            max_image_size: Some(config.max_image_size),
            keep_original_vcard: config.keep_original_vcard,
            remove_image_from_kept_vcard: config.remove_image_from_kept_vcard,
            include_line_numbers: config.include_line_numbers,
            charset: None,
        })
    }

    #[must_use]
    pub fn with_version(mut self, version: VCardVersion) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_max_vcard_size(mut self, limit: Option<u64>) -> Self {
        self.max_vcard_size = limit;
        self
    }

    #[must_use]
    pub fn with_max_image_size(mut self, limit: Option<u64>) -> Self {
        self.max_image_size = limit;
        self
    }

    /// Keeps the raw input next to the imported contact, optionally without
    /// its `PHOTO`.
    #[must_use]
    pub fn keep_original(mut self, keep: bool, remove_image: bool) -> Self {
        self.keep_original_vcard = keep;
        self.remove_image_from_kept_vcard = remove_image;
        self
    }

    #[must_use]
    pub fn with_line_numbers(mut self, include: bool) -> Self {
        self.include_line_numbers = include;
        self
    }

    #[must_use]
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }
}

/// Outcome of importing one vCard.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub contact: Contact,
    pub warnings: Warnings,
    /// The parsed card, for a later merge export.
    pub vcard: VCard,
    /// The raw input, when asked to keep it.
    pub original_vcard: Option<Vec<u8>>,
}

/// Outcome of exporting one contact.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub vcard: VCard,
    pub warnings: Warnings,
}

/// Converts between vCard documents and contacts.
///
/// Cheap to clone; clones share the mapping registry and image fetcher.
#[derive(Clone)]
pub struct VCardService {
    registry: Arc<MappingRegistry>,
    fetcher: Arc<dyn ImageFetcher>,
    defaults: VCardParameters,
}

impl VCardService {
    /// ## Summary
    /// Creates a service that fetches referenced images over HTTP.
    ///
    /// ## Errors
    /// Returns [`VCardError::Core`] if the configuration is invalid and
    /// [`VCardError::Configuration`] if the HTTP client cannot be built.
    pub fn new(settings: &Settings) -> VCardResult<Self> {
        let timeout = Duration::from_secs(settings.vcard.image_fetch_timeout_secs);
        let fetcher = HttpImageFetcher::new(timeout)
            .map_err(|e| VCardError::Configuration(format!("image fetcher: {e}")))?;
        Self::with_fetcher(settings, Arc::new(fetcher))
    }

    /// ## Summary
    /// Creates a service with a custom image fetcher.
    ///
    /// ## Errors
    /// Returns [`VCardError::Core`] if the configuration is invalid.
    pub fn with_fetcher(settings: &Settings, fetcher: Arc<dyn ImageFetcher>) -> VCardResult<Self> {
        settings.vcard.validate()?;
        let defaults = VCardParameters::from_config(&settings.vcard)?;
        tracing::debug!(?defaults, "vCard service ready");

        Ok(Self {
            registry: Arc::new(MappingRegistry::new()),
            fetcher,
            defaults,
        })
    }

    /// Parameters taken from the configuration.
    #[must_use]
    pub fn parameters(&self) -> VCardParameters {
        self.defaults.clone()
    }

    #[must_use]
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// ## Summary
    /// Imports a vCard document.
    ///
    /// With `existing`, fields whose properties the card lacks keep their
    /// value. A document holding several cards imports the first one and
    /// records a warning; use [`Self::import_stream`] to read all of them.
    ///
    /// ## Errors
    /// Returns [`VCardError::MaximumSizeExceeded`] when the input is larger
    /// than `params.max_vcard_size` and [`VCardError::NoVCard`] when it holds
    /// no card at all.
    #[tracing::instrument(skip(self, input, existing, params), fields(input_len = input.len()))]
    pub fn import_vcard(
        &self,
        input: &[u8],
        existing: Option<Contact>,
        params: &VCardParameters,
    ) -> VCardResult<ImportResult> {
        let size = input.len() as u64;
        if let Some(limit) = params.max_vcard_size
            && size > limit
        {
            return Err(VCardError::MaximumSizeExceeded { size, limit });
        }

        let mut warnings = Warnings::new();
        let text = decode_document(input, params.charset.as_deref(), &mut warnings);

        let outcome = parse_lenient(&text);
        for issue in &outcome.issues {
            warnings.push(
                Warning::new(
                    WarningCode::MalformedInput,
                    format!("{}: {}", issue.kind, issue.message),
                )
                .at_line(issue.line),
            );
        }

        let count = outcome.cards.len();
        let card = outcome.cards.into_iter().next().ok_or(VCardError::NoVCard)?;
        if count > 1 {
            warnings.push(Warning::new(
                WarningCode::MalformedInput,
                format!("input holds {count} vCards, only the first was imported"),
            ));
        }

        let mut result = self.import_parsed(card, existing, params, warnings);
        if params.keep_original_vcard {
            result.original_vcard = Some(if params.remove_image_from_kept_vcard {
                Self::strip_photo(input)
            } else {
                input.to_vec()
            });
        }
        Ok(result)
    }

    /// Imports a card that was already parsed.
    #[must_use]
    pub fn import_card(
        &self,
        card: &VCard,
        existing: Option<Contact>,
        params: &VCardParameters,
    ) -> ImportResult {
        self.import_parsed(card.clone(), existing, params, Warnings::new())
    }

    fn import_parsed(
        &self,
        card: VCard,
        existing: Option<Contact>,
        params: &VCardParameters,
        mut warnings: Warnings,
    ) -> ImportResult {
        let policy = VersionPolicy::resolve(&card, &mut warnings);
        let mut ctx = ImportContext::new(
            policy,
            ImageSource {
                fetcher: self.fetcher.as_ref(),
                max_size: params.max_image_size,
            },
        );
        ctx.warnings = warnings;

        let mut contact = existing.unwrap_or_default();
        self.registry.import(&card, &mut contact, &mut ctx);

        let mut warnings = ctx.warnings;
        if !params.include_line_numbers {
            warnings.strip_line_numbers();
        }

        ImportResult {
            contact,
            warnings,
            vcard: card,
            original_vcard: None,
        }
    }

    /// ## Summary
    /// Exports a contact as a card of `params.version`.
    ///
    /// With `existing`, the contact is merged into that card: owned
    /// properties are updated in place and everything else is kept.
    ///
    /// ## Errors
    /// Returns [`VCardError::Core`] if the contact fails validation.
    pub fn export_contact(
        &self,
        contact: &Contact,
        existing: Option<VCard>,
        params: &VCardParameters,
    ) -> VCardResult<VCard> {
        self.export_contact_with_warnings(contact, existing, params)
            .map(|result| result.vcard)
    }

    /// ## Summary
    /// Like [`Self::export_contact`], also returning export warnings.
    ///
    /// ## Errors
    /// Returns [`VCardError::Core`] if the contact fails validation.
    #[tracing::instrument(skip_all, fields(version = %params.version.as_str(), merge = existing.is_some()))]
    pub fn export_contact_with_warnings(
        &self,
        contact: &Contact,
        existing: Option<VCard>,
        params: &VCardParameters,
    ) -> VCardResult<ExportResult> {
        contact.validate()?;

        let mut card = existing.unwrap_or_else(|| VCard::with_version(params.version));
        let mut ctx = ExportContext::new(VersionPolicy::from(params.version));
        self.registry.export(contact, &mut card, &mut ctx);

        Ok(ExportResult {
            vcard: card,
            warnings: ctx.warnings,
        })
    }

    /// Serializes a card with CRLF line endings and 75-octet folding.
    #[must_use]
    pub fn write_vcard(card: &VCard) -> Vec<u8> {
        serialize_single(card).into_bytes()
    }

    /// ## Summary
    /// Removes every `PHOTO` content line from a raw document.
    ///
    /// Folded continuation lines and quoted-printable soft breaks of the
    /// photo go with it, as does the blank line 2.1 writers put after inline
    /// base64 data. All other bytes are kept as they are.
    #[must_use]
    pub fn strip_photo(original: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(original.len());
        let mut skipping = false;
        let mut soft_break = false;

        for line in original.split_inclusive(|b| *b == b'\n') {
            let content = line.trim_ascii_end();
            if skipping {
                let continues = soft_break
                    || line.first().is_some_and(|b| matches!(b, b' ' | b'\t'))
                    || content.is_empty();
                if continues {
                    soft_break = soft_break && content.ends_with(b"=");
                    continue;
                }
                skipping = false;
            }

            if is_photo_line(content) {
                skipping = true;
                soft_break = is_quoted_printable(content) && content.ends_with(b"=");
                continue;
            }
            out.extend_from_slice(line);
        }
        out
    }

    /// ## Summary
    /// Lazily imports every card of a multi-card document.
    ///
    /// Only the card being imported is held in memory.
    #[must_use]
    pub fn import_stream<R: BufRead>(
        &self,
        reader: R,
        params: VCardParameters,
    ) -> VCardImportIterator<R> {
        VCardImportIterator::new(self.clone(), reader, params)
    }
}

/// Whether a raw content line is a `PHOTO` property, grouped or not.
fn is_photo_line(line: &[u8]) -> bool {
    let end = line
        .iter()
        .position(|b| matches!(b, b':' | b';'))
        .unwrap_or(line.len());
    let name = &line[..end];
    let name = name
        .iter()
        .rposition(|b| *b == b'.')
        .map_or(name, |dot| &name[dot + 1..]);
    name.trim_ascii().eq_ignore_ascii_case(b"PHOTO")
}

fn is_quoted_printable(line: &[u8]) -> bool {
    let header = line
        .iter()
        .position(|b| *b == b':')
        .map_or(line, |colon| &line[..colon]);
    header
        .windows(b"QUOTED-PRINTABLE".len())
        .any(|w| w.eq_ignore_ascii_case(b"QUOTED-PRINTABLE"))
}
