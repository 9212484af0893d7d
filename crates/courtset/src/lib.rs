//! courtset: build labeled text datasets from legal-decision PDFs.
//!
//! A PDF goes through four stages: decode into positioned text fragments
//! (`courtset-parse`), reconstruct logical lines from fragment geometry and
//! normalize the text (`courtset-core`), assemble a record labeled with the
//! case number and decision date from the filename, and accumulate records
//! into a deduplicated [`Dataset`] serialized as line-delimited JSON.
//!
//! # Example
//!
//! ```ignore
//! use courtset::{Dataset, ExtractOptions, MIN_TEXT_CHARS, build_record};
//!
//! let mut dataset = Dataset::new();
//! for path in pdf_paths {
//!     match build_record(&path, &ExtractOptions::default(), MIN_TEXT_CHARS) {
//!         Ok(record) => {
//!             dataset.insert(record);
//!         }
//!         Err(err) => eprintln!("skipping {}: {err}", path.display()),
//!     }
//! }
//! courtset::export::write_jsonl_file(dataset.records(), &output)?;
//! ```

pub mod dataset;
pub mod document;
pub mod error;
pub mod export;
pub mod filename;
pub mod record;

pub use courtset_core::{LayoutOptions, TextFragment, normalize, reconstruct_page};
pub use courtset_parse::{ExtractError, PdfSource};

pub use dataset::Dataset;
pub use document::{ExtractOptions, ExtractedDocument, build_record, extract_document,
    extract_from_bytes};
pub use error::DatasetError;
pub use export::{read_jsonl_file, write_csv_summary_file, write_jsonl_file};
pub use filename::{FilenameParts, parse_filename};
pub use record::{DatasetRecord, MIN_TEXT_CHARS, normalize_case_key};
