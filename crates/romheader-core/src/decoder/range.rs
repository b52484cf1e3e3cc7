use super::error::SegmentError;
use super::hex;
use super::layout;
use super::reader::SegmentReader;
use crate::DecodedValue;

/// Decode an address allocation: `[start hex, end hex, size in kB]`.
///
/// The size rounds up to the next full kilobyte. The end word may be short
/// (the EEPROM form only carries three bytes of it).
pub fn decode_range(segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let reader = SegmentReader::new(segment);
    reader.require_len(layout::RANGE_MIN_LEN)?;

    let start = reader.read_slice(layout::RANGE_START)?;
    let end = reader.read_up_to(layout::RANGE_END)?;
    let span = hex::integer(end) as i64 - hex::integer(start) as i64;

    Ok(DecodedValue::list(vec![
        DecodedValue::hex(hex::render(start)),
        DecodedValue::hex(hex::render(end)),
        DecodedValue::Integer(size_kb(span)),
    ]))
}

/// Ceiling of `span / 1024`, also for inverted (negative) ranges.
fn size_kb(span: i64) -> i64 {
    span.div_euclid(1024) + i64::from(span.rem_euclid(1024) > 0)
}

#[cfg(test)]
mod tests {
    use super::{decode_range, size_kb};
    use crate::DecodedValue;
    use crate::decoder::error::SegmentError;

    #[test]
    fn rom_range_rounds_to_kilobytes() {
        let segment = [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00];
        let value = decode_range(&segment).unwrap();
        assert_eq!(
            value,
            DecodedValue::list(vec![
                DecodedValue::hex("00000000"),
                DecodedValue::hex("00040000"),
                DecodedValue::Integer(256),
            ])
        );
    }

    #[test]
    fn typical_cartridge_rom_end() {
        let segment = [0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0xff, 0xff];
        let items = decode_range(&segment).unwrap();
        assert_eq!(items.as_list().unwrap()[2], DecodedValue::Integer(512));
    }

    #[test]
    fn partial_kilobyte_rounds_up() {
        assert_eq!(size_kb(1), 1);
        assert_eq!(size_kb(1024), 1);
        assert_eq!(size_kb(1025), 2);
        assert_eq!(size_kb(0), 0);
    }

    #[test]
    fn inverted_range_uses_ceiling() {
        assert_eq!(size_kb(-1), 0);
        assert_eq!(size_kb(-1025), -1);
    }

    #[test]
    fn short_segment_is_rejected() {
        let err = decode_range(&[0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, SegmentError::TooShort { needed: 5, .. }));
    }
}
