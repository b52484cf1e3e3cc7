use super::error::SegmentError;
use super::layout;
use super::range::decode_range;
use super::reader::SegmentReader;
use crate::DecodedValue;

pub const NO_SRAM: &str = "No SRAM";

/// Decode the "extra memory" block of a 16-bit header.
///
/// Layouts:
/// - tag other than `RA`: sentinel `No SRAM`
/// - kind byte `0x40`: `["EEPROM", "Unknown", [start, end, kB]]`
/// - otherwise: `[width?, backup, start, end, kB]`, where the width entry
///   is omitted for unrecognized type bytes
pub fn decode_sram(segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let reader = SegmentReader::new(segment);
    if reader.read_text(layout::SRAM_TAG)? != layout::SRAM_TAG_PRESENT {
        return Ok(DecodedValue::sentinel(NO_SRAM));
    }

    if reader.read_hex(layout::SRAM_KIND)? == layout::SRAM_KIND_EEPROM {
        let range = decode_range(reader.read_slice(layout::EEPROM_RANGE)?)?;
        return Ok(DecodedValue::list(vec![
            DecodedValue::text("EEPROM"),
            DecodedValue::text("Unknown"),
            range,
        ]));
    }

    let types = reader.read_hex(layout::SRAM_TYPE)?;
    let mut digits = types.chars();
    let kind = digits.next().unwrap_or('0');
    let addressing = digits.next().unwrap_or('0');

    let mut config = Vec::with_capacity(5);
    if let Some(width) = width(kind, addressing) {
        config.push(DecodedValue::text(width));
    }
    let backup = matches!(kind, 'e' | 'f');
    config.push(DecodedValue::text(if backup { "Yes" } else { "No" }));

    if let DecodedValue::List(range) = decode_range(reader.read_slice(layout::SRAM_RANGE)?)? {
        config.extend(range);
    }
    Ok(DecodedValue::list(config))
}

fn width(kind: char, addressing: char) -> Option<&'static str> {
    match (kind, addressing) {
        ('a' | 'e', _) => Some("16-bit"),
        ('b' | 'f', '0') => Some("8-bit even addresses"),
        ('b' | 'f', '8') => Some("8-bit odd addresses"),
        _ => None,
    }
}
