//! Positioned text fragments as emitted by a PDF content stream.
//!
//! A fragment is one text-showing run: possibly a single glyph cluster,
//! possibly several characters, and frequently *less* than a full word —
//! renderers split words across runs for kerning and font substitution.
//! Width and height are optional because degenerate runs carry no usable
//! geometry; estimation fallbacks live here so the layout code never has
//! to probe for missing fields.

/// Fallback font size (in 12pt-equivalent page units) when a page has no
/// fragments with a usable height.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Estimated glyph advance per character, as a fraction of the font size.
/// Used when a fragment carries no measured width.
pub const WIDTH_PER_CHAR_RATIO: f64 = 0.6;

/// One positioned text run from a PDF page content stream.
///
/// `origin_x`/`origin_y` are the baseline origin in page coordinate space
/// (glyph space, not top-left). Fragments arrive in content-stream emission
/// order, which is reading order in well-formed documents but is not
/// guaranteed to be monotonic in y.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFragment {
    /// Text content of the run.
    pub text: String,
    /// Baseline x origin.
    pub origin_x: f64,
    /// Baseline y origin.
    pub origin_y: f64,
    /// Rendered width, if the producer measured one.
    pub width: Option<f64>,
    /// Rendered glyph height (or font size proxy), if available.
    pub height: Option<f64>,
}

impl TextFragment {
    /// Create a fragment with no measured geometry beyond its origin.
    pub fn new(text: impl Into<String>, origin_x: f64, origin_y: f64) -> Self {
        Self {
            text: text.into(),
            origin_x,
            origin_y,
            width: None,
            height: None,
        }
    }

    /// Create a fragment with measured width and height.
    pub fn with_size(
        text: impl Into<String>,
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            text: text.into(),
            origin_x,
            origin_y,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Whether this fragment's text is empty after trimming.
    ///
    /// Blank fragments contribute no characters to reconstructed lines but
    /// still act as position markers for gap computation.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The measured height, if finite and positive.
    pub fn usable_height(&self) -> Option<f64> {
        self.height.filter(|h| h.is_finite() && *h > 0.0)
    }

    /// The measured width, or a text-length estimate scaled by the page's
    /// average font size when the measurement is absent or degenerate.
    pub fn estimated_width(&self, average_font_size: f64) -> f64 {
        match self.width {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => self.text.chars().count() as f64 * average_font_size * WIDTH_PER_CHAR_RATIO,
        }
    }

    /// The estimated x coordinate where this fragment ends.
    pub fn end_x(&self, average_font_size: f64) -> f64 {
        self.origin_x + self.estimated_width(average_font_size)
    }
}

/// Mean height across fragments with a usable height, or `fallback` when
/// no fragment carries one.
///
/// Computed per page: thresholds derived from this value scale the layout
/// algorithm to each page's actual type size, which a fixed absolute
/// threshold cannot do across a corpus where font size varies 2–3×.
pub fn average_font_size(fragments: &[TextFragment], fallback: f64) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for fragment in fragments {
        if let Some(h) = fragment.usable_height() {
            sum += h;
            count += 1;
        }
    }
    if count == 0 { fallback } else { sum / count as f64 }
}
