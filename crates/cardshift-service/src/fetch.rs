//! Fetching images referenced by URL.

use std::io::Read;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

/// An image downloaded from a `PHOTO` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub data: Vec<u8>,
    /// `Content-Type` of the response, without parameters.
    pub content_type: Option<String>,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Image exceeds the limit of {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered with status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolves image references. Implementations must enforce `max_size`
/// themselves so oversized bodies are never fully buffered.
pub trait ImageFetcher: Send + Sync {
    /// ## Summary
    /// Downloads the image at `url`.
    ///
    /// ## Errors
    /// Returns [`FetchError::TooLarge`] when the body exceeds `max_size` and
    /// another [`FetchError`] when the image cannot be retrieved.
    fn fetch(&self, url: &Url, max_size: Option<u64>) -> Result<FetchedImage, FetchError>;
}

/// Blocking HTTP(S) fetcher with a request timeout.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: reqwest::blocking::Client,
}

impl HttpImageFetcher {
    /// ## Summary
    /// Creates a fetcher whose requests give up after `timeout`.
    ///
    /// ## Errors
    /// Returns [`FetchError::Http`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(cardshift_core::constants::PRODUCT_NAME)
            .build()?;
        Ok(Self { client })
    }
}

impl ImageFetcher for HttpImageFetcher {
    #[tracing::instrument(skip(self), fields(url = %url))]
    fn fetch(&self, url: &Url, max_size: Option<u64>) -> Result<FetchedImage, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
        }

        tracing::debug!("Fetching image");
        let response = self.client.get(url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        if let (Some(limit), Some(length)) = (max_size, response.content_length())
            && length > limit
        {
            return Err(FetchError::TooLarge { limit });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty());

        let mut data = Vec::new();
        match max_size {
            Some(limit) => {
                response.take(limit.saturating_add(1)).read_to_end(&mut data)?;
                if data.len() as u64 > limit {
                    return Err(FetchError::TooLarge { limit });
                }
            }
            None => {
                let mut response = response;
                response.read_to_end(&mut data)?;
            }
        }

        tracing::debug!(bytes = data.len(), ?content_type, "Fetched image");
        Ok(FetchedImage { data, content_type })
    }
}
