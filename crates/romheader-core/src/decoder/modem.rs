use super::error::SegmentError;
use super::layout;
use super::reader::SegmentReader;
use super::tables::{MODEM_SUPPORT, SUPPORT_LEVELS, UNKNOWN};
use crate::DecodedValue;

pub const NO_SUPPORT: &str = "No Support";

/// Decode the modem block: `[publisher, game number, version, Japan
/// support, export support]`, or `No Support` without the `MO` tag.
pub fn decode_modem(segment: &[u8]) -> Result<DecodedValue, SegmentError> {
    let reader = SegmentReader::new(segment);
    if reader.read_text(layout::MODEM_TAG)? != layout::MODEM_TAG_PRESENT {
        return Ok(DecodedValue::sentinel(NO_SUPPORT));
    }

    let publisher = reader.read_text(layout::MODEM_PUBLISHER)?;
    let game_number = reader.read_text(layout::MODEM_GAME_NUMBER)?;
    let version = reader.read_text(layout::MODEM_VERSION)?;
    let code = reader.read_text(layout::MODEM_SUPPORT)?;
    let [japan, export] = support_levels(&code);

    Ok(DecodedValue::text_list([
        publisher.as_str(),
        game_number.as_str(),
        version.as_str(),
        japan,
        export,
    ]))
}

fn support_levels(code: &str) -> [&'static str; 2] {
    match MODEM_SUPPORT.iter().find(|(key, _)| *key == code) {
        Some((_, [japan, export])) => [SUPPORT_LEVELS[*japan], SUPPORT_LEVELS[*export]],
        None => {
            tracing::debug!(code, "unknown modem support code");
            [UNKNOWN, UNKNOWN]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NO_SUPPORT, decode_modem};
    use crate::DecodedValue;

    #[test]
    fn no_tag_is_sentinel() {
        let value = decode_modem(b"            ").unwrap();
        assert_eq!(value, DecodedValue::sentinel(NO_SUPPORT));
    }

    #[test]
    fn decodes_publisher_and_support() {
        let value = decode_modem(b"MOSEGA01.150").unwrap();
        assert_eq!(
            value,
            DecodedValue::text_list(["SEGA", "01", "1", "Yes with mic", "Yes with mic"])
        );
    }

    #[test]
    fn export_only_support() {
        let value = decode_modem(b"MOT-1203.020").unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items[3], DecodedValue::text("No"));
        assert_eq!(items[4], DecodedValue::text("Yes"));
    }

    #[test]
    fn unknown_support_code() {
        let value = decode_modem(b"MOSEGA01.1zz").unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items[3], DecodedValue::text("Unknown"));
        assert_eq!(items[4], DecodedValue::text("Unknown"));
    }
}
