//! courtset-core: Backend-independent data types and algorithms.
//!
//! This crate provides the foundational types ([`TextFragment`], [`PageMetrics`])
//! and the two pure transformations at the heart of courtset: layout
//! reconstruction (positioned fragments to logical lines) and text
//! normalization. It performs no I/O and holds no state — both algorithms are
//! deterministic functions over in-memory data.

pub mod fragment;
pub mod layout;
pub mod normalize;

pub use fragment::{DEFAULT_FONT_SIZE, TextFragment, WIDTH_PER_CHAR_RATIO, average_font_size};
pub use layout::{LayoutOptions, PageMetrics, document_text, page_text, reconstruct_page};
pub use normalize::normalize;
