//! Contact ↔ vCard transcoding.
//!
//! [`VCardService`] is the entry point. It imports vCard 2.1, 3.0 and 4.0
//! documents into [`Contact`](cardshift_core::contact::Contact) records,
//! exports contacts back (optionally merging into the card they came from)
//! and reports recoverable problems as [`Warning`]s instead of failing.

pub mod codec;
pub mod error;
pub mod fetch;
pub mod mapping;
pub mod policy;
pub mod registry;
pub mod service;
pub mod stream;
pub mod warning;

#[cfg(test)]
mod test_support;

pub use error::{VCardError, VCardResult};
pub use fetch::{FetchError, FetchedImage, HttpImageFetcher, ImageFetcher};
pub use policy::VersionPolicy;
pub use registry::MappingRegistry;
pub use service::{ExportResult, ImportResult, VCardParameters, VCardService};
pub use stream::VCardImportIterator;
pub use warning::{Severity, Warning, WarningCode, WarningSource, Warnings};
