//! Error types for the PDF fragment source.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every variant is a
//! per-document condition the caller can report, skip, or retry without
//! aborting a batch.

use thiserror::Error;

/// Error type for opening a PDF and decoding its pages into fragments.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Error reading PDF bytes from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a parseable PDF, or a page's content stream could
    /// not be decoded.
    #[error("PDF decode error: {0}")]
    Decode(String),

    /// The document is encrypted or password-protected. Decryption is out of
    /// scope; callers skip these.
    #[error("document is encrypted")]
    Encrypted,

    /// A page index past the end of the document was requested.
    #[error("page {index} out of range: document has {count} pages")]
    PageOutOfRange {
        /// Requested 0-based page index.
        index: usize,
        /// Number of pages in the document.
        count: usize,
    },
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Decode(err.to_string())
    }
}
