//! Conservative character- and whitespace-level cleanup of reconstructed text.
//!
//! The normalizer repairs artifacts the PDF renderer introduced — control
//! bytes, spaces drifting around punctuation, typographic glyphs — without
//! re-deriving word boundaries. Inter-word spacing inside a line already
//! encodes the join/no-join decision made from geometry in [`crate::layout`]
//! and must never be altered here: collapsing multi-space runs or merging
//! adjacent short tokens were tried before and corrupted correctly-spaced
//! text.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \n]+([.,;:!?])").expect("valid regex"));

static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Normalize reconstructed document text.
///
/// Pure and total: never fails, and an empty input yields an empty string.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
///
/// Pipeline, in order:
/// 1. Unicode NFC composition.
/// 2. Strip control characters (tab, LF, CR survive).
/// 3. CRLF and lone CR to LF.
/// 4. Tab and no-break space to a single space.
/// 5. Typographic substitutions (ligatures, dashes, curly quotes,
///    ellipsis, bullet, ©/®/™). Runs before the punctuation repairs so a
///    substituted `...` is spaced the same as a literal one.
/// 6. Drop whitespace immediately before sentence punctuation, merging a
///    punctuation-led line into the one above it.
/// 7. Insert a missing space between punctuation and a following
///    letter/digit, except inside decimal numbers, dates, and times.
/// 8. Trim every line, then collapse 3+ consecutive newlines to two.
/// 9. Trim the whole document.
///
/// Minimum-content policy (rejecting too-short extractions) belongs to the
/// calling pipeline, not here.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let composed: String = text.nfc().collect();
    let stripped = strip_control_chars(&composed);
    let unixed = stripped.replace("\r\n", "\n").replace('\r', "\n");
    let spaced = unixed.replace(['\t', '\u{00A0}'], " ");
    let substituted = substitute_typography(&spaced);
    let no_space_before = SPACE_BEFORE_PUNCT.replace_all(&substituted, "$1");
    let with_space_after = insert_space_after_punct(&no_space_before);
    let trimmed_lines: String = with_space_after
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let collapsed = EXCESS_BLANK_LINES.replace_all(&trimmed_lines, "\n\n");
    collapsed.trim().to_string()
}

/// Remove control characters in 0x00–0x08, 0x0B–0x0C, 0x0E–0x1F, 0x7F–0x9F.
fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(c,
                '\u{00}'..='\u{08}'
                | '\u{0B}'
                | '\u{0C}'
                | '\u{0E}'..='\u{1F}'
                | '\u{7F}'..='\u{9F}')
        })
        .collect()
}

/// Fixed substitution table for typographic ligatures and punctuation.
fn substitute_typography(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{00AB}' | '\u{00BB}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('-'),
            '\u{00A9}' => out.push_str("(c)"),
            '\u{00AE}' => out.push_str("(r)"),
            '\u{2122}' => out.push_str("(tm)"),
            _ => out.push(c),
        }
    }
    out
}

/// Insert a space between sentence punctuation and an immediately following
/// letter or digit.
///
/// `1,5`, `10.11.2023`, and `10:30` style numerals are exempt: a `.`, `,`,
/// or `:` flanked by digits is part of the number, not a sentence boundary.
fn insert_space_after_punct(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if !matches!(c, '.' | ',' | ';' | ':' | '!' | '?') {
            continue;
        }
        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        if !next.is_alphanumeric() {
            continue;
        }
        let in_number = matches!(c, '.' | ',' | ':')
            && i > 0
            && chars[i - 1].is_ascii_digit()
            && next.is_ascii_digit();
        if !in_number {
            out.push(' ');
        }
    }

    out
}
