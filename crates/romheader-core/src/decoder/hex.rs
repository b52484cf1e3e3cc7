//! Hex renderings of raw bytes.

use std::fmt::Write;

/// Two lowercase hex digits per byte, in array order.
pub fn render(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Product-code rendering: high nibble of the last byte, then the remaining
/// bytes last-to-first. One leading `0` is stripped.
///
/// The output follows the on-cartridge BCD layout, not array order: the
/// product code is stored little-endian with a fifth digit in the high
/// nibble of the following byte, so `[0x01, 0x23, 0x45]` reads `42301`.
pub fn render_be(bytes: &[u8]) -> String {
    let Some((last, rest)) = bytes.split_last() else {
        return String::new();
    };
    let mut code = String::with_capacity(bytes.len() * 2);
    code.push(nibble_high(*last));
    for byte in rest.iter().rev() {
        let _ = write!(code, "{byte:02x}");
    }
    match code.strip_prefix('0') {
        Some(stripped) => stripped.to_string(),
        None => code,
    }
}

/// Second character of the byte's two-digit rendering.
pub fn nibble_low(byte: u8) -> char {
    hex_digit(byte & 0x0f)
}

/// First character of the byte's two-digit rendering.
pub fn nibble_high(byte: u8) -> char {
    hex_digit(byte >> 4)
}

/// Big-endian integer value of up to eight bytes.
pub fn integer(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
}

fn hex_digit(value: u8) -> char {
    char::from_digit(u32::from(value), 16).unwrap_or('0')
}
