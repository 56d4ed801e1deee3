//! Cardshift - integration test support.
//!
//! Re-exports the workspace crates and provides the sample cards and the
//! offline image fetcher the integration tests share.

use std::collections::HashMap;
use std::sync::Arc;

use cardshift_core::config::Settings;
use cardshift_service::fetch::{FetchError, FetchedImage, ImageFetcher};
use cardshift_service::VCardService;

pub use cardshift_core as core;
pub use cardshift_rfc as rfc;
pub use cardshift_service as service;

/// A minimal JPEG: SOI, a JFIF APP0 segment and EOI.
pub const ERIKA_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

/// [`ERIKA_JPEG`] in base64.
pub const ERIKA_JPEG_BASE64: &str = "/9j/4AAQSkZJRgABAQAAAQABAAD/2Q==";

/// Where the 3.0 sample card points its `PHOTO`.
pub const ERIKA_PHOTO_URL: &str = "http://commons.wikimedia.org/wiki/File:Erika_Mustermann_2010.jpg";

pub const ERIKA_V21: &str = "BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Mustermann;Erika;;Dr.\r\n\
FN:Dr. Erika Mustermann\r\n\
ORG:Wikimedia\r\n\
TITLE:Redaktion Gestaltung\r\n\
PHOTO;ENCODING=BASE64;JPEG:/9j/4AAQSkZJRgABAQAAAQABAAD/2Q==\r\n\
TEL;WORK;VOICE:+49 221 9999123\r\n\
TEL;HOME;VOICE:+49 221 1234567\r\n\
ADR;HOME;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:;;Heidestra=C3=9Fe 17;K=C3=B6ln;;51147;Deutschland\r\n\
LABEL;HOME;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Heidestra=C3=9Fe 17=0D=0A51147 K=C3=B6ln=0D=0ADeutschland\r\n\
EMAIL;PREF;INTERNET:erika@mustermann.de\r\n\
REV:20140301T221110Z\r\n\
END:VCARD\r\n";

pub const ERIKA_V30: &str = "BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Mustermann;Erika;;Dr.;\r\n\
FN:Dr. Erika Mustermann\r\n\
ORG:Wikimedia\r\n\
ROLE:Kommunikation\r\n\
TITLE:Redaktion & Gestaltung\r\n\
PHOTO;VALUE=uri;TYPE=JPEG:http://commons.wikimedia.org/wiki/File:Erika_Mustermann_2010.jpg\r\n\
TEL;TYPE=WORK,VOICE:+49 221 9999123\r\n\
TEL;TYPE=HOME,VOICE:+49 221 1234567\r\n\
ADR;TYPE=HOME:;;Heidestraße 17;Köln;;51147;Deutschland\r\n\
LABEL;TYPE=HOME:Heidestraße 17\\n51147 Köln\\nDeutschland\r\n\
EMAIL;TYPE=PREF,INTERNET:erika@mustermann.de\r\n\
URL:http://de.wikipedia.org/\r\n\
REV:2014-03-01T22:11:10Z\r\n\
END:VCARD\r\n";

pub const ERIKA_V40: &str = "BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
N:Mustermann;Erika;;Dr.;\r\n\
FN:Dr. Erika Mustermann\r\n\
ORG:Wikimedia\r\n\
ROLE:Kommunikation\r\n\
TITLE:Redaktion & Gestaltung\r\n\
PHOTO:data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD/2Q==\r\n\
TEL;TYPE=work,voice;VALUE=uri:tel:+49 221 9999123\r\n\
TEL;TYPE=home,voice;VALUE=uri:tel:+49 221 1234567\r\n\
ADR;TYPE=home;LABEL=\"Heidestraße 17^n51147 Köln^nDeutschland\":;;Heidestraße 17;Köln;;51147;Deutschland\r\n\
EMAIL:erika@mustermann.de\r\n\
REV:20140301T221110Z\r\n\
END:VCARD\r\n";

/// Serves images from memory; every other URL answers 404.
#[derive(Default)]
pub struct FixtureFetcher {
    images: HashMap<String, FetchedImage>,
}

impl FixtureFetcher {
    /// A fetcher serving the photo of the 3.0 sample card.
    #[must_use]
    pub fn erika() -> Self {
        Self::default().with_image(ERIKA_PHOTO_URL, ERIKA_JPEG, "image/jpeg")
    }

    #[must_use]
    pub fn with_image(mut self, url: &str, data: &[u8], content_type: &str) -> Self {
        self.images.insert(
            url.to_string(),
            FetchedImage {
                data: data.to_vec(),
                content_type: Some(content_type.to_string()),
            },
        );
        self
    }
}

impl ImageFetcher for FixtureFetcher {
    fn fetch(&self, url: &reqwest::Url, max_size: Option<u64>) -> Result<FetchedImage, FetchError> {
        tracing::debug!(%url, "Serving fixture image");
        let image = self
            .images
            .get(url.as_str())
            .ok_or(FetchError::Status(404))?;
        if let Some(limit) = max_size
            && image.data.len() as u64 > limit
        {
            return Err(FetchError::TooLarge { limit });
        }
        Ok(image.clone())
    }
}

/// ## Summary
/// Builds a service with default settings and the [`FixtureFetcher::erika`]
/// fetcher.
///
/// ## Panics
/// Panics if the default settings are rejected.
#[must_use]
#[expect(clippy::expect_used)]
pub fn service() -> VCardService {
    VCardService::with_fetcher(&Settings::default(), Arc::new(FixtureFetcher::erika()))
        .expect("default settings are valid")
}
