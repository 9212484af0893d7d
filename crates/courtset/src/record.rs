//! Dataset records and the minimum-content policy.

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::filename::FilenameParts;

/// Minimum character count for a usable record. Normalized text below this
/// almost always means the extraction failed (scanned image, empty pages).
pub const MIN_TEXT_CHARS: usize = 100;

/// One labeled document in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Case identifier from the filename.
    pub case_number: String,
    /// Decision date from the filename, `YYYY-MM-DD`.
    pub decision_date: String,
    /// Normalized document text.
    pub text: String,
    /// Name of the source PDF, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
}

impl DatasetRecord {
    /// Assemble a record from parsed filename parts and normalized text.
    ///
    /// Rejects text with fewer than `min_chars` characters with
    /// [`DatasetError::InsufficientContent`] — the policy lives here, at
    /// record assembly, not in the normalizer.
    pub fn assemble(
        parts: FilenameParts,
        text: String,
        source_file: Option<String>,
        min_chars: usize,
    ) -> Result<Self, DatasetError> {
        let len = text.chars().count();
        if len < min_chars {
            return Err(DatasetError::InsufficientContent {
                len,
                min: min_chars,
            });
        }
        Ok(Self {
            case_number: parts.case_number,
            decision_date: parts.decision_date,
            text,
            source_file,
        })
    }

    /// The deduplication key for this record.
    pub fn dedup_key(&self) -> String {
        normalize_case_key(&self.case_number)
    }
}

/// Normalize a case identifier for deduplication: trim, collapse internal
/// whitespace runs to single spaces, uppercase.
///
/// No transliteration — Cyrillic and Latin identifiers that differ only in
/// script are distinct cases.
pub fn normalize_case_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
