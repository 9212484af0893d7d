//! Error types for the dataset pipeline.
//!
//! Per-document failures (bad filename, too little text, undecodable PDF)
//! are distinguishable so batch callers can skip and report them without
//! aborting the run.

use thiserror::Error;

use courtset_parse::ExtractError;

/// Error type for dataset building, import, and export.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// PDF decoding failed (unparseable, encrypted, I/O).
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The filename does not follow the `<case>_<YYYY-MM-DD>.pdf` contract.
    #[error("unrecognized filename {name:?}: expected <case>_<YYYY-MM-DD>.pdf")]
    BadFilename {
        /// The offending file name.
        name: String,
    },

    /// The normalized text is too short to be a usable record — almost
    /// always a failed extraction (scanned image, empty pages).
    #[error("extracted text too short: {len} chars (minimum {min})")]
    InsufficientContent {
        /// Character count of the normalized text.
        len: usize,
        /// The minimum that was required.
        min: usize,
    },

    /// I/O error reading or writing dataset files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record failed to serialize to JSON.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A line of an imported JSONL file is not a valid record.
    #[error("invalid JSON on line {line}: {source}")]
    Import {
        /// 1-based line number in the imported file.
        line: usize,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
