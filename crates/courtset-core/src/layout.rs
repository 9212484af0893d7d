//! Layout reconstruction: positioned fragments to logical lines.
//!
//! PDF renderers frequently split a single visual word into multiple
//! text-showing runs at sub-pixel offsets; the gap between such runs is near
//! zero or even negative (overlap), while genuine inter-word gaps approximate
//! one space width (~0.2–0.3× the font size for typical proportional fonts).
//! Reconstruction therefore decides, per adjacent fragment pair, whether the
//! pair belongs to the same word, is separated by a space, or starts a new
//! line — using thresholds relative to the page's own average font size.

use crate::fragment::{DEFAULT_FONT_SIZE, TextFragment, average_font_size};

/// Options for layout reconstruction.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Horizontal gap above which adjacent same-line fragments are separate
    /// words, as a fraction of the page's average font size.
    pub word_gap_ratio: f64,
    /// Baseline delta above which a fragment starts a new line, as a fraction
    /// of the page's average font size.
    pub line_break_ratio: f64,
    /// Font size assumed when a page carries no usable glyph heights.
    pub fallback_font_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            word_gap_ratio: 0.2,
            line_break_ratio: 0.4,
            fallback_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Per-page geometry thresholds, derived from the page's fragments.
///
/// Recomputed for every page: absolute thresholds fail across documents
/// with different font sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    /// Mean usable fragment height, or the configured fallback.
    pub average_font_size: f64,
    /// Gaps wider than this separate words.
    pub word_gap_threshold: f64,
    /// Baseline deltas larger than this separate lines.
    pub line_break_threshold: f64,
}

impl PageMetrics {
    /// Derive metrics for one page.
    pub fn compute(fragments: &[TextFragment], options: &LayoutOptions) -> Self {
        let size = average_font_size(fragments, options.fallback_font_size);
        Self {
            average_font_size: size,
            word_gap_threshold: size * options.word_gap_ratio,
            line_break_threshold: size * options.line_break_ratio,
        }
    }
}

/// Position state for the previously seen fragment.
#[derive(Debug, Clone, Copy)]
struct LastPosition {
    x: f64,
    y: f64,
    x_end: f64,
}

/// Reconstruct the logical lines of one page from its fragments.
///
/// Fragments are consumed in content-stream order. For each fragment the
/// decision against the previous position is:
///
/// - new line when `|Δy| > line_break_threshold`, or when `x < last.x`
///   (a hard-left carriage return at the same baseline, e.g. justified-text
///   page continuation);
/// - same line with an inserted space when the gap from the previous
///   fragment's end exceeds `word_gap_threshold`;
/// - bare concatenation otherwise — the runs are parts of one word that the
///   renderer split.
///
/// Blank fragments (trimmed-empty text) contribute no characters but still
/// update the last-seen position. Every non-blank fragment contributes
/// exactly once to exactly one output line. Missing geometry is estimated,
/// never an error; an empty input yields an empty vec.
pub fn reconstruct_page(fragments: &[TextFragment], options: &LayoutOptions) -> Vec<String> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let metrics = PageMetrics::compute(fragments, options);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    let mut last: Option<LastPosition> = None;

    for fragment in fragments {
        let x = fragment.origin_x;
        let y = fragment.origin_y;
        let x_end = fragment.end_x(metrics.average_font_size);

        if fragment.is_blank() {
            // Position marker only: keeps the gap computation honest when a
            // renderer emits a literal space run between words.
            last = Some(LastPosition { x, y, x_end });
            continue;
        }

        match last {
            Some(prev) => {
                let delta_y = (y - prev.y).abs();
                let gap = x - prev.x_end;

                if delta_y > metrics.line_break_threshold || x < prev.x {
                    if !current_line.is_empty() {
                        lines.push(std::mem::take(&mut current_line));
                    }
                    current_line.push_str(&fragment.text);
                } else if gap > metrics.word_gap_threshold {
                    if !current_line.is_empty() {
                        current_line.push(' ');
                    }
                    current_line.push_str(&fragment.text);
                } else {
                    current_line.push_str(&fragment.text);
                }
            }
            None => current_line.push_str(&fragment.text),
        }

        last = Some(LastPosition { x, y, x_end });
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Join one page's reconstructed lines under a page marker.
///
/// `page_number` is 1-indexed. A page with no lines yields just the marker.
pub fn page_text(page_number: usize, lines: &[String]) -> String {
    let mut out = format!("--- Page {page_number} ---");
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

/// Join page texts into a single document, blank-line separated.
pub fn document_text(pages: &[String]) -> String {
    pages.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f64, y: f64, width: f64, height: f64) -> TextFragment {
        TextFragment::with_size(text, x, y, width, height)
    }

    #[test]
    fn empty_page_yields_no_lines() {
        assert!(reconstruct_page(&[], &LayoutOptions::default()).is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let fragments = vec![
            frag("Дело", 0.0, 700.0, 30.0, 12.0),
            frag("№", 35.0, 700.0, 8.0, 12.0),
            frag("А40-1", 47.0, 700.0, 40.0, 12.0),
        ];
        let opts = LayoutOptions::default();
        let first = reconstruct_page(&fragments, &opts);
        for _ in 0..10 {
            assert_eq!(reconstruct_page(&fragments, &opts), first);
        }
    }

    #[test]
    fn small_gap_joins_word() {
        // gap ≈ 0.5, far below the threshold for a 12-unit average font
        let fragments = vec![
            frag("рассмотре", 0.0, 100.0, 50.0, 12.0),
            frag("л", 50.5, 100.0, 6.0, 12.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["рассмотрел".to_string()]);
    }

    #[test]
    fn negative_gap_joins_word() {
        // Overlapping runs (kerning) must not get a space.
        let fragments = vec![
            frag("су", 0.0, 100.0, 14.0, 12.0),
            frag("д", 13.2, 100.0, 7.0, 12.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["суд".to_string()]);
    }

    #[test]
    fn large_gap_separates_words() {
        // gap 6 > threshold 2.4 at average font 12
        let fragments = vec![
            frag("истец", 0.0, 100.0, 40.0, 12.0),
            frag("ответчик", 46.0, 100.0, 60.0, 12.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["истец ответчик".to_string()]);
    }

    #[test]
    fn baseline_delta_breaks_line() {
        let fragments = vec![
            frag("решил", 200.0, 100.0, 40.0, 12.0),
            frag("взыскать", 210.0, 86.0, 60.0, 12.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["решил".to_string(), "взыскать".to_string()]);
    }

    #[test]
    fn hard_left_return_breaks_line_at_same_baseline() {
        // x moves left with a small Δy: still a new line.
        let fragments = vec![
            frag("конец", 300.0, 100.0, 40.0, 12.0),
            frag("начало", 20.0, 99.0, 45.0, 12.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["конец".to_string(), "начало".to_string()]);
    }

    #[test]
    fn blank_fragment_is_position_marker_only() {
        // avg font 14 → word gap threshold 2.8; подал sits 6.6 past the
        // blank's estimated end, so a space is inserted.
        let fragments = vec![
            frag("Иванов", 0.0, 100.0, 60.0, 14.0),
            TextFragment::new(" ", 60.0, 100.0),
            frag("подал", 75.0, 100.0, 50.0, 14.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines, vec!["Иванов подал".to_string()]);
    }

    #[test]
    fn missing_geometry_never_errors() {
        let fragments = vec![
            TextFragment::new("без", 0.0, 50.0),
            TextFragment::new("геометрии", 40.0, 50.0),
        ];
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("без"));
        assert!(lines[0].contains("геометрии"));
    }

    #[test]
    fn all_blank_page_yields_no_lines() {
        let fragments = vec![
            TextFragment::new(" ", 0.0, 10.0),
            TextFragment::new("", 5.0, 10.0),
        ];
        assert!(reconstruct_page(&fragments, &LayoutOptions::default()).is_empty());
    }

    #[test]
    fn non_whitespace_chars_are_conserved() {
        let fragments = vec![
            frag("в", 0.0, 200.0, 6.0, 11.0),
            frag("составе", 8.0, 200.0, 42.0, 11.0),
            TextFragment::new("  ", 50.0, 200.0),
            frag("судьи", 58.0, 200.0, 30.0, 11.0),
            frag("Петровой", 10.0, 186.0, 50.0, 11.0),
        ];
        let input_chars: usize = fragments
            .iter()
            .map(|f| f.text.chars().filter(|c| !c.is_whitespace()).count())
            .sum();
        let lines = reconstruct_page(&fragments, &LayoutOptions::default());
        let output_chars: usize = lines
            .iter()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).count())
            .sum();
        assert_eq!(input_chars, output_chars);
    }

    #[test]
    fn custom_ratios_shift_the_word_boundary() {
        let fragments = vec![
            frag("а", 0.0, 100.0, 6.0, 12.0),
            frag("б", 10.0, 100.0, 6.0, 12.0),
        ];
        // gap 4.0: a space at ratio 0.2 (threshold 2.4), a join at 0.5 (6.0).
        let tight = LayoutOptions::default();
        let loose = LayoutOptions {
            word_gap_ratio: 0.5,
            ..LayoutOptions::default()
        };
        assert_eq!(reconstruct_page(&fragments, &tight), vec!["а б".to_string()]);
        assert_eq!(reconstruct_page(&fragments, &loose), vec!["аб".to_string()]);
    }

    #[test]
    fn page_text_prefixes_marker() {
        let lines = vec!["первая".to_string(), "вторая".to_string()];
        assert_eq!(page_text(3, &lines), "--- Page 3 ---\nпервая\nвторая");
        assert_eq!(page_text(1, &[]), "--- Page 1 ---");
    }

    #[test]
    fn document_text_joins_pages_with_blank_line() {
        let pages = vec!["--- Page 1 ---\nа".to_string(), "--- Page 2 ---\nб".to_string()];
        assert_eq!(document_text(&pages), "--- Page 1 ---\nа\n\n--- Page 2 ---\nб");
    }
}
