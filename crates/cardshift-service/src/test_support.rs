//! Helpers shared by the unit tests of this crate.

use cardshift_core::contact::Contact;
use cardshift_rfc::rfc::vcard::{VCard, VCardVersion, parse_single, serialize_single};

use crate::codec::photo::ImageSource;
use crate::fetch::{FetchError, FetchedImage, ImageFetcher};
use crate::mapping::{ExportContext, ImportContext, VCardMapping};
use crate::policy::VersionPolicy;
use crate::warning::Warnings;

/// Fails every request; for tests that must not touch the network.
pub struct NoFetch;

impl ImageFetcher for NoFetch {
    fn fetch(&self, _url: &reqwest::Url, _max_size: Option<u64>) -> Result<FetchedImage, FetchError> {
        Err(FetchError::Status(404))
    }
}

/// Parses a card from its body lines, which must end in CRLF.
pub fn card(version: &str, body: &str) -> VCard {
    parse_single(&format!(
        "BEGIN:VCARD\r\nVERSION:{version}\r\n{body}END:VCARD\r\n"
    ))
    .unwrap()
}

pub fn import_with(
    mappings: &[&dyn VCardMapping],
    card: &VCard,
    contact: &mut Contact,
) -> Warnings {
    let mut ctx = ImportContext::new(
        VersionPolicy::from(card.version),
        ImageSource { fetcher: &NoFetch, max_size: None },
    );
    for mapping in mappings {
        mapping.import(card, contact, &mut ctx);
    }
    ctx.warnings
}

pub fn export_with(
    mappings: &[&dyn VCardMapping],
    contact: &Contact,
    card: &mut VCard,
) -> Warnings {
    let mut ctx = ExportContext::new(VersionPolicy::from(card.version));
    for mapping in mappings {
        mapping.export(contact, card, &mut ctx);
    }
    ctx.warnings
}

/// Exports into a fresh card of `version` and returns the text.
pub fn export_string(mappings: &[&dyn VCardMapping], contact: &Contact, version: VCardVersion) -> String {
    let mut card = VCard::with_version(version);
    export_with(mappings, contact, &mut card);
    serialize_single(&card)
}
