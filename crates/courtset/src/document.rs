//! End-to-end document extraction: PDF file to cleaned text and records.

use std::path::Path;

use tracing::debug;

use courtset_core::{LayoutOptions, document_text, normalize, page_text, reconstruct_page};
use courtset_parse::PdfSource;

use crate::error::DatasetError;
use crate::filename::parse_filename;
use crate::record::DatasetRecord;

/// Options for document extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Geometry thresholds for layout reconstruction.
    pub layout: LayoutOptions,
    /// Skip the normalization pass, keeping raw reconstructed text.
    pub raw: bool,
}

/// A fully extracted document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    /// Page-marked, newline-joined, (optionally) normalized text.
    pub text: String,
    /// Number of pages in the source PDF.
    pub page_count: usize,
}

/// Extract the text of one PDF file.
///
/// Pages are reconstructed independently (thresholds are page-local by
/// design), joined under `--- Page N ---` markers with a blank line between
/// pages, then normalized unless `options.raw` is set.
pub fn extract_document(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<ExtractedDocument, DatasetError> {
    let source = PdfSource::open(path)?;
    extract_from_source(&source, options)
}

/// Extract the text of a PDF already held in memory.
pub fn extract_from_bytes(
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<ExtractedDocument, DatasetError> {
    let source = PdfSource::from_bytes(bytes)?;
    extract_from_source(&source, options)
}

fn extract_from_source(
    source: &PdfSource,
    options: &ExtractOptions,
) -> Result<ExtractedDocument, DatasetError> {
    let page_count = source.page_count();
    let mut pages = Vec::with_capacity(page_count);

    for index in 0..page_count {
        let fragments = source.page_fragments(index)?;
        let lines = reconstruct_page(&fragments, &options.layout);
        debug!(
            page = index + 1,
            fragments = fragments.len(),
            lines = lines.len(),
            "reconstructed page"
        );
        pages.push(page_text(index + 1, &lines));
    }

    let joined = document_text(&pages);
    let text = if options.raw {
        joined
    } else {
        normalize(&joined)
    };

    Ok(ExtractedDocument { text, page_count })
}

/// Build a dataset record from one PDF file.
///
/// Parses the case number and decision date from the filename, extracts and
/// normalizes the text, and applies the `min_chars` minimum-content policy.
/// Every failure is a distinguishable [`DatasetError`] so batch callers can
/// skip and report per file.
pub fn build_record(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
    min_chars: usize,
) -> Result<DatasetRecord, DatasetError> {
    let path = path.as_ref();
    let parts = parse_filename(path)?;
    let document = extract_document(path, options)?;
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    DatasetRecord::assemble(parts, document.text, source_file, min_chars)
}
