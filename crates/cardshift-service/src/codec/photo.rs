//! Contact images: inline data, `data:` URIs and fetched references.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;

use cardshift_rfc::rfc::vcard::core::encodings;
use cardshift_rfc::rfc::vcard::{VCardProperty, VCardValue};

use crate::fetch::{FetchError, ImageFetcher};
use crate::warning::{Warning, WarningCode, Warnings};

/// A decoded contact image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Where an image may be loaded from during one import.
pub struct ImageSource<'a> {
    pub fetcher: &'a dyn ImageFetcher,
    pub max_size: Option<u64>,
}

/// ## Summary
/// Decodes the image of a `PHOTO` property.
///
/// Inline data and `data:` URIs are decoded directly; other URLs go through
/// the fetcher, except `file:` which is always rejected. Images over the
/// size limit are dropped with a single [`WarningCode::ImageTooLarge`].
#[tracing::instrument(skip_all, fields(line = ?prop.line))]
pub fn decode_photo(
    prop: &VCardProperty,
    source: &ImageSource<'_>,
    warnings: &mut Warnings,
) -> Option<Image> {
    let (data, embedded_type) = match &prop.value {
        VCardValue::Binary(data) => (data.clone(), None),
        VCardValue::Unknown(_) if prop.encoding().is_some_and(encodings::is_base64) => {
            warnings.push(
                Warning::new(WarningCode::InvalidImage, "inline image is not valid base64").at(prop),
            );
            return None;
        }
        VCardValue::Uri(uri) | VCardValue::Text(uri) | VCardValue::Unknown(uri) => {
            let uri = uri.trim();
            if uri.is_empty() {
                return None;
            }
            if uri.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:")) {
                let Some((media_type, data)) = parse_data_uri(uri) else {
                    warnings.push(
                        Warning::new(WarningCode::InvalidImage, "malformed data URI").at(prop),
                    );
                    return None;
                };
                (data, media_type)
            } else {
                let image = fetch_reference(prop, uri, source, warnings)?;
                (image.data, image.content_type)
            }
        }
        _ => return None,
    };

    if data.is_empty() {
        warnings.push(Warning::new(WarningCode::InvalidImage, "image data is empty").at(prop));
        return None;
    }
    if let Some(limit) = source.max_size
        && data.len() as u64 > limit
    {
        warnings.push(too_large(prop, limit));
        return None;
    }

    let content_type = declared_content_type(prop)
        .or(embedded_type)
        .or_else(|| sniff_content_type(&data).map(str::to_string));

    Some(Image { data, content_type })
}

fn fetch_reference(
    prop: &VCardProperty,
    uri: &str,
    source: &ImageSource<'_>,
    warnings: &mut Warnings,
) -> Option<Image> {
    let url = match Url::parse(uri) {
        Ok(url) => url,
        Err(e) => {
            warnings.push(
                Warning::new(
                    WarningCode::ImageUnavailable,
                    format!("invalid image URL {uri:?}: {e}"),
                )
                .at(prop),
            );
            return None;
        }
    };

    if url.scheme().eq_ignore_ascii_case("file") {
        warnings.push(
            Warning::new(
                WarningCode::ImageRejected,
                format!("refusing to load local image {url}"),
            )
            .at(prop),
        );
        return None;
    }

    match source.fetcher.fetch(&url, source.max_size) {
        Ok(image) => Some(Image {
            data: image.data,
            content_type: image.content_type,
        }),
        Err(FetchError::TooLarge { limit }) => {
            warnings.push(too_large(prop, limit));
            None
        }
        Err(e) => {
            warnings.push(
                Warning::new(
                    WarningCode::ImageUnavailable,
                    format!("could not load image from {url}: {e}"),
                )
                .at(prop),
            );
            None
        }
    }
}

fn too_large(prop: &VCardProperty, limit: u64) -> Warning {
    Warning::new(
        WarningCode::ImageTooLarge,
        format!("image exceeds the limit of {limit} bytes and was dropped"),
    )
    .at(prop)
}

/// Content type named by `MEDIATYPE` or a `TYPE` image subtype.
fn declared_content_type(prop: &VCardProperty) -> Option<String> {
    if let Some(media_type) = prop.get_param_value("MEDIATYPE")
        && !media_type.trim().is_empty()
    {
        return Some(media_type.trim().to_ascii_lowercase());
    }

    prop.types().first().map(|t| match t.as_str() {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        t if t.contains('/') => t.to_string(),
        t => format!("image/{t}"),
    })
}

/// Guesses an image type from its leading bytes.
#[must_use]
pub fn sniff_content_type(data: &[u8]) -> Option<&'static str> {
    match data {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'B', b'M', ..] => Some("image/bmp"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

/// Splits a `data:` URI into its media type and decoded bytes.
#[must_use]
pub fn parse_data_uri(uri: &str) -> Option<(Option<String>, Vec<u8>)> {
    let rest = uri.get(5..)?;
    let (header, payload) = rest.split_once(',')?;

    let mut parts = header.split(';');
    let media_type = parts
        .next()
        .map(|m| m.trim().to_ascii_lowercase())
        .filter(|m| !m.is_empty());
    let is_base64 = parts.any(|p| p.trim().eq_ignore_ascii_case("base64"));

    let data = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        STANDARD.decode(compact).ok()?
    } else {
        payload.as_bytes().to_vec()
    };
    Some((media_type, data))
}

/// Encodes an image as a `data:` URI.
#[must_use]
pub fn data_uri(data: &[u8], content_type: Option<&str>) -> String {
    let media_type = content_type
        .or_else(|| sniff_content_type(data))
        .unwrap_or("application/octet-stream");
    format!("data:{media_type};base64,{}", STANDARD.encode(data))
}
