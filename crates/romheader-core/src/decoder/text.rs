//! Header text decoding.
//!
//! Titles and publisher strings are stored in Shift_JIS (Windows code page
//! 932 flavor). Segments that do not decode cleanly are passed through byte
//! for byte, so a malformed title never fails the header.

use encoding_rs::SHIFT_JIS;

/// Decode `bytes` as Shift_JIS, falling back to a one-char-per-byte copy.
pub fn decode_text(bytes: &[u8]) -> String {
    match SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.into_owned(),
        None => {
            tracing::trace!(len = bytes.len(), "text not Shift_JIS, passing bytes through");
            passthrough(bytes)
        }
    }
}

fn passthrough(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
