//! Decoding of show-string bytes into Unicode text.
//!
//! Resolution order: the font's /Encoding entry via lopdf when it resolves,
//! then UTF-16BE when the bytes carry a BOM, then a single-byte fallback
//! through Windows-1251. The corpus this tool was built for is Cyrillic
//! legal text, where 1251 is the overwhelmingly common single-byte encoding;
//! every byte maps, so the fallback is total and ASCII passes through
//! unchanged.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object};

/// Decode the bytes of one `Tj`/`TJ` string operand.
///
/// `fonts` is the page's font resource map; `font_name` the resource name
/// currently selected by `Tf`. Returns `None` for non-string operands.
pub fn decode_show_string(
    operand: &Object,
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    font_name: &str,
) -> Option<String> {
    let Object::String(bytes, _) = operand else {
        return None;
    };

    if let Some(font_dict) = fonts.get(font_name.as_bytes()) {
        if let Ok(encoding) = font_dict.get_font_encoding(doc) {
            if let Ok(text) = Document::decode_text(&encoding, bytes) {
                return Some(text);
            }
        }
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        return Some(String::from_utf16_lossy(&utf16));
    }

    let (decoded, _, _) = encoding_rs::WINDOWS_1251.decode(bytes);
    Some(decoded.into_owned())
}
