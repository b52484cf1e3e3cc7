//! Segment decoding.
//!
//! Every header field names exactly one [`DecodeKind`]; [`decode`] dispatches
//! a byte segment to that algorithm. Decoders are pure:
//! - `layout`: offsets inside composite segments
//! - `reader`: bounds-checked access (all short reads become `TooShort`)
//! - `text`, `hex`, `tables`: shared primitives
//! - `range`, `sram`, `modem`, `region`: field algorithms
//!
//! Ambiguous input (unmatched device or region characters, undecodable
//! text, unknown table keys) resolves to empty or best-effort values.
//! Only short segments and a non-hex region fallback are errors. A segment
//! shorter than the field it claims to be is rejected before any byte is
//! read.

pub mod error;
pub mod hex;
pub mod layout;
mod modem;
mod range;
pub mod reader;
mod region;
mod sram;
pub mod tables;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::DecodedValue;
use crate::formats::{smd, sms};
use error::SegmentError;
use reader::SegmentReader;

pub use modem::NO_SUPPORT;
pub use sram::NO_SRAM;

/// Decode algorithm for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeKind {
    /// Shift_JIS text with byte passthrough.
    Text,
    /// Lowercase hex, array order.
    Hex,
    /// Product-code hex (last-to-first, one leading zero stripped).
    HexBigEndian,
    /// Low nibble of a single byte.
    NibbleLow,
    /// Per-character peripheral table.
    Device,
    /// `[start, end, kB]` address allocation.
    AllocationRange,
    /// Static RAM / EEPROM block.
    Sram,
    /// Modem block.
    Modem,
    /// Letter or bitmask region code.
    Region,
    /// 8-bit ROM size (low nibble table).
    RomSize,
    /// 8-bit system and region (high nibble table).
    Mark3Region,
}

impl DecodeKind {
    /// Resolve the decoder for a field name used by either layout.
    pub fn for_field(name: &str) -> Option<DecodeKind> {
        let kind = match name {
            "system" | "copyright" | "domestic" | "export" | "serial" => DecodeKind::Text,
            "checksum" => DecodeKind::Hex,
            "prod" => DecodeKind::HexBigEndian,
            "version" => DecodeKind::NibbleLow,
            "device" => DecodeKind::Device,
            "romrange" | "ramrange" => DecodeKind::AllocationRange,
            "extra" => DecodeKind::Sram,
            "modem" => DecodeKind::Modem,
            "region" => DecodeKind::Region,
            "size" => DecodeKind::RomSize,
            "m3region" => DecodeKind::Mark3Region,
            _ => return None,
        };
        Some(kind)
    }

    /// Shortest segment any field decoded with this algorithm may have.
    pub fn min_len(self) -> usize {
        match self {
            DecodeKind::Text => sms::layout::SYSTEM_LEN,
            DecodeKind::Hex => smd::layout::CHECKSUM_LEN,
            DecodeKind::HexBigEndian => sms::layout::PRODUCT_LEN,
            DecodeKind::NibbleLow => sms::layout::VERSION_LEN,
            DecodeKind::Device => smd::layout::DEVICE_LEN,
            DecodeKind::AllocationRange => smd::layout::RANGE_LEN,
            DecodeKind::Sram => smd::layout::EXTRA_LEN,
            DecodeKind::Modem => smd::layout::MODEM_LEN,
            DecodeKind::Region => smd::layout::REGION_LEN,
            DecodeKind::RomSize | DecodeKind::Mark3Region => sms::layout::SIZE_REGION_LEN,
        }
    }
}

/// Declared segment length of field `name`.
///
/// `system` is 16 bytes in the 16-bit layout and 8 in the 8-bit layout; the
/// 8-bit length applies here.
pub fn declared_len(name: &str) -> Option<usize> {
    let len = match name {
        "copyright" => smd::layout::COPYRIGHT_LEN,
        "domestic" | "export" => smd::layout::TITLE_LEN,
        "serial" => smd::layout::SERIAL_LEN,
        "prod" => sms::layout::PRODUCT_LEN,
        "version" => sms::layout::VERSION_LEN,
        "size" | "m3region" => sms::layout::SIZE_REGION_LEN,
        _ => DecodeKind::for_field(name)?.min_len(),
    };
    Some(len)
}

/// Decode `segment` with the algorithm registered for field `name`.
///
/// # Examples
/// ```
/// use romheader_core::{DecodedValue, decode_field};
///
/// let value = decode_field("checksum", &[0xa1, 0x0b]).unwrap();
/// assert_eq!(value, DecodedValue::hex("a10b"));
/// assert!(decode_field("checksum", &[0xa1]).is_err());
/// ```
pub fn decode_field(name: &str, segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let unknown = || SegmentError::UnknownField {
        name: name.to_string(),
    };
    let kind = DecodeKind::for_field(name).ok_or_else(unknown)?;
    let needed = declared_len(name).ok_or_else(unknown)?;
    SegmentReader::new(segment).require_len(needed)?;
    decode(kind, segment)
}

/// Decode `segment` with an explicit algorithm.
///
/// Fails with [`SegmentError::TooShort`] below [`DecodeKind::min_len`].
pub fn decode(kind: DecodeKind, segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let reader = SegmentReader::new(segment);
    reader.require_len(kind.min_len())?;
    let value = match kind {
        DecodeKind::Text => DecodedValue::Text(text::decode_text(segment)),
        DecodeKind::Hex => DecodedValue::HexString(hex::render(segment)),
        DecodeKind::HexBigEndian => DecodedValue::HexString(hex::render_be(segment)),
        DecodeKind::NibbleLow => {
            DecodedValue::HexString(hex::nibble_low(reader.read_u8(0)?).to_string())
        }
        DecodeKind::Device => {
            let code = text::decode_text(segment);
            DecodedValue::text_list(tables::lookup_all(tables::DEVICES, &code))
        }
        DecodeKind::AllocationRange => range::decode_range(segment)?,
        DecodeKind::Sram => sram::decode_sram(segment)?,
        DecodeKind::Modem => modem::decode_modem(segment)?,
        DecodeKind::Region => region::decode_region(segment)?,
        DecodeKind::RomSize => region::decode_rom_size(reader.read_u8(0)?),
        DecodeKind::Mark3Region => region::decode_mark3_region(reader.read_u8(0)?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{DecodeKind, declared_len, decode, decode_field};
    use crate::DecodedValue;
    use crate::decoder::error::SegmentError;

    #[test]
    fn every_field_name_has_one_decoder() {
        for name in [
            "system", "copyright", "domestic", "export", "serial", "checksum", "device",
            "romrange", "ramrange", "extra", "modem", "region", "prod", "version", "size",
            "m3region",
        ] {
            assert!(DecodeKind::for_field(name).is_some(), "{name}");
        }
        assert_eq!(DecodeKind::for_field("title"), None);
    }

    #[test]
    fn unknown_field_name() {
        let err = decode_field("title", b"x").unwrap_err();
        assert!(matches!(err, SegmentError::UnknownField { .. }));
    }

    #[test]
    fn device_codes_in_input_order() {
        let value = decode_field("device", b"J6M             ").unwrap();
        assert_eq!(
            value,
            DecodedValue::text_list(["3-button Controller", "6-button Controller", "Mouse"])
        );
    }

    #[test]
    fn version_is_low_nibble() {
        assert_eq!(decode_field("version", &[0x21]).unwrap(), DecodedValue::hex("1"));
        assert!(matches!(
            decode(DecodeKind::NibbleLow, &[]),
            Err(SegmentError::TooShort { .. })
        ));
    }

    #[test]
    fn decoding_is_idempotent() {
        let segment = b"MOSEGA01.150";
        let first = decode_field("modem", segment).unwrap();
        let second = decode_field("modem", segment).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn text_never_fails_on_bad_encoding() {
        let mut title = vec![b' '; 0x30];
        title[..3].copy_from_slice(&[0x83, 0xff, 0xfd]);
        let value = decode_field("domestic", &title).unwrap();
        assert!(matches!(value, DecodedValue::Text(_)));
    }

    fn too_short(result: Result<DecodedValue, SegmentError>) -> Option<(usize, usize)> {
        match result {
            Err(SegmentError::TooShort { needed, actual }) => Some((needed, actual)),
            _ => None,
        }
    }

    #[test]
    fn short_field_segments_are_rejected() {
        let cases: [(&str, &[u8], usize); 10] = [
            ("checksum", &[0xa1], 2),
            ("size", &[], 1),
            ("m3region", &[], 1),
            ("version", &[], 1),
            ("prod", &[0x07, 0x70], 3),
            ("serial", b"GM", 14),
            ("system", b"SEGA", 8),
            ("domestic", b"SONIC", 0x30),
            ("device", b"J", 16),
            ("region", b"JU", 3),
        ];
        for (name, segment, needed) in cases {
            assert_eq!(
                too_short(decode_field(name, segment)),
                Some((needed, segment.len())),
                "{name}"
            );
        }
    }

    #[test]
    fn every_kind_rejects_an_empty_segment() {
        let kinds = [
            DecodeKind::Text,
            DecodeKind::Hex,
            DecodeKind::HexBigEndian,
            DecodeKind::NibbleLow,
            DecodeKind::Device,
            DecodeKind::AllocationRange,
            DecodeKind::Sram,
            DecodeKind::Modem,
            DecodeKind::Region,
            DecodeKind::RomSize,
            DecodeKind::Mark3Region,
        ];
        for kind in kinds {
            assert_eq!(too_short(decode(kind, &[])), Some((kind.min_len(), 0)), "{kind:?}");
        }
    }

    #[test]
    fn one_byte_short_of_kind_minimum() {
        assert!(too_short(decode(DecodeKind::AllocationRange, &[0; 7])).is_some());
        assert!(too_short(decode(DecodeKind::Sram, b"RA  ")).is_some());
        assert!(too_short(decode(DecodeKind::Modem, &[b' '; 11])).is_some());
        assert!(decode(DecodeKind::Modem, &[b' '; 12]).unwrap().is_sentinel());
    }

    #[test]
    fn system_accepts_both_layout_lengths() {
        assert_eq!(declared_len("system"), Some(8));
        assert_eq!(decode_field("system", b"TMR SEGA").unwrap(), DecodedValue::text("TMR SEGA"));
        assert_eq!(
            decode_field("system", b"SEGA MEGA DRIVE ").unwrap(),
            DecodedValue::text("SEGA MEGA DRIVE ")
        );
        assert_eq!(declared_len("title"), None);
    }
}
