//! Content stream walker: decoded page operations to positioned fragments.
//!
//! Tracks the text-state subset in [`crate::state`] across the page's
//! operations and emits one [`TextFragment`] per shown string, at the text
//! matrix origin current when the string is shown. TJ positioning offsets
//! adjust the horizontal advance, so intra-word splits present near-zero
//! gaps and genuine spaces present word-sized gaps — which is exactly the
//! signal the layout reconstructor keys on.
//!
//! Malformed operators degrade gracefully: they are skipped with a debug
//! trace, never an error. Graphics transforms (`cm`) are not applied; the
//! reconstructor's thresholds are page-relative, so a uniform coordinate
//! frame per page suffices.

use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use courtset_core::{TextFragment, WIDTH_PER_CHAR_RATIO};

use crate::encoding::decode_show_string;
use crate::error::ExtractError;
use crate::state::TextState;

/// Extract the positioned text fragments of one page, in content-stream
/// emission order.
pub fn page_fragments(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Vec<TextFragment>, ExtractError> {
    let fonts = doc.get_page_fonts(page_id).unwrap_or_default();
    let data = doc
        .get_page_content(page_id)
        .map_err(|e| ExtractError::Decode(format!("page content: {e}")))?;
    let content =
        Content::decode(&data).map_err(|e| ExtractError::Decode(format!("content stream: {e}")))?;

    let mut state = TextState::new();
    let mut fragments = Vec::new();

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => state.begin_text(),
            "ET" => state.end_text(),
            "Tf" => {
                if op.operands.len() >= 2 {
                    let name = op.operands[0]
                        .as_name()
                        .map(|n| String::from_utf8_lossy(n).into_owned())
                        .unwrap_or_default();
                    let size = number(&op.operands[1]).unwrap_or(state.font_size);
                    state.set_font(name, size);
                } else {
                    debug!(operator = "Tf", "skipping malformed operator");
                }
            }
            "Tc" => {
                if let Some(spacing) = op.operands.first().and_then(number) {
                    state.char_spacing = spacing;
                }
            }
            "Tz" => {
                if let Some(scale) = op.operands.first().and_then(number) {
                    state.h_scaling = scale;
                }
            }
            "TL" => {
                if let Some(leading) = op.operands.first().and_then(number) {
                    state.leading = leading;
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    let tx = number(&op.operands[0]).unwrap_or(0.0);
                    let ty = number(&op.operands[1]).unwrap_or(0.0);
                    if op.operator == "TD" {
                        state.move_text_position_and_set_leading(tx, ty);
                    } else {
                        state.move_text_position(tx, ty);
                    }
                } else {
                    debug!(operator = %op.operator, "skipping malformed operator");
                }
            }
            "Tm" => {
                let n: Vec<f64> = op.operands.iter().take(6).filter_map(number).collect();
                if let [a, b, c, d, e, f] = n[..] {
                    state.set_text_matrix(a, b, c, d, e, f);
                } else {
                    debug!(operator = "Tm", "skipping malformed operator");
                }
            }
            "T*" => state.move_to_next_line(),
            "Tj" => {
                if let Some(operand) = op.operands.first() {
                    show_text(&mut fragments, &mut state, doc, &fonts, operand);
                }
            }
            "TJ" => {
                if let Some(Object::Array(elements)) = op.operands.first() {
                    for element in elements {
                        match element {
                            Object::Integer(_) | Object::Real(_) => {
                                if let Some(offset) = number(element) {
                                    // Offset is in thousandths of font size;
                                    // positive moves the next glyph left.
                                    let tx = -offset / 1000.0
                                        * state.font_size
                                        * (state.h_scaling / 100.0);
                                    state.advance_text_position(tx);
                                }
                            }
                            _ => show_text(&mut fragments, &mut state, doc, &fonts, element),
                        }
                    }
                }
            }
            "'" => {
                state.move_to_next_line();
                if let Some(operand) = op.operands.first() {
                    show_text(&mut fragments, &mut state, doc, &fonts, operand);
                }
            }
            "\"" => {
                // aw ac string: word spacing is not tracked, char spacing is.
                if op.operands.len() >= 3 {
                    if let Some(ac) = number(&op.operands[1]) {
                        state.char_spacing = ac;
                    }
                    state.move_to_next_line();
                    show_text(&mut fragments, &mut state, doc, &fonts, &op.operands[2]);
                }
            }
            _ => {}
        }
    }

    Ok(fragments)
}

/// Decode and emit one shown string, then advance the text position past it.
fn show_text(
    fragments: &mut Vec<TextFragment>,
    state: &mut TextState,
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    operand: &Object,
) {
    let Some(text) = decode_show_string(operand, doc, fonts, &state.font_name) else {
        return;
    };
    if text.is_empty() {
        return;
    }
    if !state.in_text_object() {
        debug!("show-text operator outside BT/ET, skipping");
        return;
    }

    let (x, y) = state.text_matrix().origin();
    let advance = text_space_advance(&text, state);
    let width = advance * state.text_matrix().x_scale();
    let height = state.effective_font_size();

    fragments.push(TextFragment {
        text,
        origin_x: x,
        origin_y: y,
        width: (width > 0.0).then_some(width),
        height: (height > 0.0).then_some(height),
    });

    state.advance_text_position(advance);
}

/// Estimated horizontal advance of `text` in text-space units.
///
/// No embedded width tables are consulted: a uniform per-character advance
/// keeps the estimate cheap, and the reconstructor's thresholds are relative,
/// so the join/separate distinction survives the approximation.
fn text_space_advance(text: &str, state: &TextState) -> f64 {
    let count = text.chars().count() as f64;
    (count * state.font_size * WIDTH_PER_CHAR_RATIO + count * state.char_spacing)
        * (state.h_scaling / 100.0)
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}
