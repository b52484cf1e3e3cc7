use super::error::SegmentError;
use super::tables::{MARK3_REGIONS, REGION_BITS, REGIONS, ROM_SIZES, UNKNOWN, lookup, lookup_all};
use super::{hex, text::decode_text};
use crate::DecodedValue;

/// Decode the 16-bit region field.
///
/// Letter codes (`J`, `U`, `E`) are tried first. Only when none match is
/// the first character read as a hex bitmask (bit 0 Japan, bit 2 Americas,
/// bit 3 Europe). An empty result is valid.
pub fn decode_region(segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let code = decode_text(segment);
    let mut markets = lookup_all(REGIONS, &code);
    if markets.is_empty() {
        let letters = bitmask_letters(&code)?;
        markets = lookup_all(REGIONS, &letters);
    }
    Ok(DecodedValue::text_list(markets))
}

fn bitmask_letters(code: &str) -> Result<String, SegmentError> {
    let mask = code
        .chars()
        .next()
        .and_then(|c| c.to_digit(16))
        .ok_or_else(|| SegmentError::InvalidRegionCode {
            code: code.to_string(),
        })?;
    Ok(REGION_BITS
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, letter)| *letter)
        .collect())
}

/// 8-bit ROM size from the low nibble.
pub fn decode_rom_size(byte: u8) -> DecodedValue {
    single_lookup(ROM_SIZES, hex::nibble_low(byte))
}

/// 8-bit system/region from the high nibble.
pub fn decode_mark3_region(byte: u8) -> DecodedValue {
    single_lookup(MARK3_REGIONS, hex::nibble_high(byte))
}

fn single_lookup(table: &[(char, &'static str)], key: char) -> DecodedValue {
    match lookup(table, key) {
        Some(label) => DecodedValue::text(label),
        None => DecodedValue::sentinel(UNKNOWN),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_mark3_region, decode_region, decode_rom_size};
    use crate::DecodedValue;
    use crate::decoder::error::SegmentError;
    use crate::decoder::tables::{AMERICAS, EUROPE, JAPAN};

    #[test]
    fn letter_code() {
        let value = decode_region(b"J  ").unwrap();
        assert_eq!(value, DecodedValue::text_list([JAPAN]));
    }

    #[test]
    fn letter_codes_keep_order() {
        let value = decode_region(b"JUE").unwrap();
        assert_eq!(value, DecodedValue::text_list([JAPAN, AMERICAS, EUROPE]));
    }

    #[test]
    fn bitmask_fallback() {
        let value = decode_region(b"5  ").unwrap();
        assert_eq!(value, DecodedValue::text_list([JAPAN, AMERICAS]));
    }

    #[test]
    fn letters_win_over_bitmask() {
        // 'E' is also a hex digit (0b1110) but must be read as a letter.
        let value = decode_region(b"E  ").unwrap();
        assert_eq!(value, DecodedValue::text_list([EUROPE]));
    }

    #[test]
    fn lowercase_bitmask_digit() {
        let value = decode_region(b"f  ").unwrap();
        assert_eq!(value, DecodedValue::text_list([JAPAN, AMERICAS, EUROPE]));
    }

    #[test]
    fn empty_bitmask_is_valid() {
        let value = decode_region(b"2  ").unwrap();
        assert_eq!(value, DecodedValue::list(vec![]));
    }

    #[test]
    fn non_hex_fallback_fails() {
        let err = decode_region(b"   ").unwrap_err();
        assert!(matches!(err, SegmentError::InvalidRegionCode { .. }));
    }

    #[test]
    fn rom_size_from_low_nibble() {
        assert_eq!(decode_rom_size(0x4c), DecodedValue::text("32KB"));
        assert_eq!(decode_rom_size(0x40), DecodedValue::text("256KB"));
        assert_eq!(decode_rom_size(0x45), DecodedValue::sentinel("Unknown"));
    }

    #[test]
    fn mark3_region_from_high_nibble() {
        assert_eq!(decode_mark3_region(0x4c), DecodedValue::text("SMS Export"));
        assert_eq!(decode_mark3_region(0x7f), DecodedValue::text("Game Gear International"));
        assert_eq!(decode_mark3_region(0x1c), DecodedValue::sentinel("Unknown"));
    }
}
