//! courtset-parse: PDF decoding into positioned text fragments.
//!
//! This crate is the upstream collaborator of the courtset core: it opens a
//! PDF with [`lopdf`], walks each page's content stream, and yields the
//! per-page [`TextFragment`] lists that layout reconstruction consumes.
//! Layout decisions are never delegated to the PDF library — all join/break
//! inference happens downstream from fragment geometry.

pub mod content;
pub mod encoding;
pub mod error;
pub mod state;

pub use error::ExtractError;

use lopdf::{Document, ObjectId};
use tracing::debug;

use courtset_core::TextFragment;

/// A PDF document opened for fragment extraction.
///
/// # Example
///
/// ```ignore
/// let source = PdfSource::open("decision.pdf")?;
/// for index in 0..source.page_count() {
///     let fragments = source.page_fragments(index)?;
/// }
/// ```
#[derive(Debug)]
pub struct PdfSource {
    doc: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfSource {
    /// Open a PDF file from disk.
    ///
    /// Encrypted documents are rejected with [`ExtractError::Encrypted`];
    /// unparseable bytes with [`ExtractError::Decode`].
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, ExtractError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Open a PDF from an in-memory byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        let doc =
            Document::load_mem(bytes).map_err(|e| ExtractError::Decode(e.to_string()))?;
        Self::from_document(doc)
    }

    fn from_document(doc: Document) -> Result<Self, ExtractError> {
        if doc.is_encrypted() {
            return Err(ExtractError::Encrypted);
        }
        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        debug!(pages = page_ids.len(), "opened PDF");
        Ok(Self { doc, page_ids })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Extract the positioned fragments of the page at `index` (0-based), in
    /// content-stream emission order.
    pub fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>, ExtractError> {
        let page_id = *self
            .page_ids
            .get(index)
            .ok_or(ExtractError::PageOutOfRange {
                index,
                count: self.page_ids.len(),
            })?;
        content::page_fragments(&self.doc, page_id)
    }
}
