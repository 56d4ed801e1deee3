//! Lazy import of multi-card documents.

use std::io::BufRead;

use crate::error::{VCardError, VCardResult};
use crate::service::{ImportResult, VCardParameters, VCardService};

const BEGIN: &[u8] = b"BEGIN:VCARD";
const END: &[u8] = b"END:VCARD";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Imports the cards of a document one at a time.
///
/// Each item is the result of importing one card. An oversized card yields
/// [`VCardError::MaximumSizeExceeded`] and iteration goes on with the next
/// one; a read error yields [`VCardError::Io`] and ends the iteration.
pub struct VCardImportIterator<R> {
    service: VCardService,
    reader: R,
    params: VCardParameters,
    peeked: Option<VCardResult<ImportResult>>,
    done: bool,
    at_start: bool,
}

impl<R: BufRead> VCardImportIterator<R> {
    pub(crate) fn new(service: VCardService, reader: R, params: VCardParameters) -> Self {
        Self {
            service,
            reader,
            params,
            peeked: None,
            done: false,
            at_start: true,
        }
    }

    /// Whether another item follows. Reads ahead by at most one card.
    pub fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.read_next();
        }
        self.peeked.is_some()
    }

    fn read_next(&mut self) -> Option<VCardResult<ImportResult>> {
        let document = match self.read_document()? {
            Ok(document) => document,
            Err(e) => return Some(Err(e)),
        };
        Some(self.service.import_vcard(&document, None, &self.params))
    }

    /// Reads the raw lines of the next card, from its `BEGIN:VCARD` to the
    /// matching `END:VCARD`. Lines between cards are skipped.
    fn read_document(&mut self) -> Option<VCardResult<Vec<u8>>> {
        if self.done {
            return None;
        }

        let limit = self.params.max_vcard_size;
        let mut document = Vec::new();
        let mut size: u64 = 0;
        let mut depth = 0_usize;
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = match self.reader.read_until(b'\n', &mut line) {
                Ok(read) => read,
                Err(e) => {
                    tracing::warn!(error = %e, "Reading vCard stream failed");
                    self.done = true;
                    return Some(Err(VCardError::Io(e)));
                }
            };
            if read == 0 {
                self.done = true;
                // An unterminated card is handed to the parser, which closes it.
                return (depth > 0).then(|| finish(document, size, limit));
            }

            let mut content = line.trim_ascii();
            if std::mem::take(&mut self.at_start) {
                content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
            }

            match depth {
                _ if content.eq_ignore_ascii_case(BEGIN) => depth += 1,
                0 => continue,
                _ if content.eq_ignore_ascii_case(END) => depth -= 1,
                _ => {}
            }

            size += read as u64;
            if limit.is_none_or(|limit| size <= limit) {
                document.extend_from_slice(&line);
            } else if !document.is_empty() {
                document = Vec::new();
            }

            if depth == 0 {
                return Some(finish(document, size, limit));
            }
        }
    }
}

fn finish(document: Vec<u8>, size: u64, limit: Option<u64>) -> VCardResult<Vec<u8>> {
    match limit {
        Some(limit) if size > limit => {
            tracing::debug!(size, limit, "Skipping oversized vCard");
            Err(VCardError::MaximumSizeExceeded { size, limit })
        }
        _ => Ok(document),
    }
}

impl<R: BufRead> Iterator for VCardImportIterator<R> {
    type Item = VCardResult<ImportResult>;

    fn next(&mut self) -> Option<Self::Item> {
        self.peeked.take().or_else(|| self.read_next())
    }
}
