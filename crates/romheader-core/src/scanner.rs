//! Header layout detection.
//!
//! The scanner probes fixed signature ranges for the `SEGA` marker:
//! `0x100..0x110` for the 16-bit layout, then `0x7ff0..0x7ff8` and
//! `0x81f0..0x81f8` for the 8-bit layout. Probe ranges past the end of the
//! image are clamped; a range that starts past the end never matches.

use std::ops::Range;

use thiserror::Error;

use crate::decoder::text::decode_text;
use crate::formats::{Layout, SIGNATURE, Subvariant, join, smd, sms};

/// Result of a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Smd,
    /// 8-bit header at the matched signature prefix.
    Sms(Subvariant),
}

impl Detection {
    pub fn layout(self) -> Layout {
        match self {
            Detection::Smd => Layout::Smd,
            Detection::Sms(_) => Layout::Sms,
        }
    }

    pub fn subvariant(self) -> Option<Subvariant> {
        match self {
            Detection::Smd => None,
            Detection::Sms(subvariant) => Some(subvariant),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("no SEGA signature found (probed: {})", probed_list(.probed))]
    NoSignature { probed: Vec<Layout> },
}

fn probed_list(probed: &[Layout]) -> String {
    probed
        .iter()
        .map(|layout| layout.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Identify the header layout of `image`.
///
/// With a `hint`, only that layout is probed; otherwise the 16-bit layout is
/// tried before the 8-bit one.
///
/// # Examples
/// ```
/// use romheader_core::{Detection, Layout, scan};
///
/// let mut image = vec![0u8; 0x200];
/// image[0x100..0x104].copy_from_slice(b"SEGA");
/// let detection = scan(&image, None).unwrap();
/// assert_eq!(detection, Detection::Smd);
/// assert_eq!(detection.layout(), Layout::Smd);
/// ```
pub fn scan(image: &[u8], hint: Option<Layout>) -> Result<Detection, ScanError> {
    let order: &[Layout] = match hint {
        Some(Layout::Smd) => &[Layout::Smd],
        Some(Layout::Sms) => &[Layout::Sms],
        None => &[Layout::Smd, Layout::Sms],
    };

    for layout in order {
        if let Some(detection) = probe_layout(image, *layout) {
            tracing::debug!(
                layout = %detection.layout(),
                subvariant = ?detection.subvariant().map(Subvariant::tag),
                "header detected"
            );
            return Ok(detection);
        }
    }

    Err(ScanError::NoSignature {
        probed: order.to_vec(),
    })
}

fn probe_layout(image: &[u8], layout: Layout) -> Option<Detection> {
    match layout {
        Layout::Smd => has_signature(image, smd::layout::SIGNATURE_RANGE).then_some(Detection::Smd),
        Layout::Sms => Subvariant::ALL
            .into_iter()
            .find(|subvariant| has_signature(image, sms_signature_range(*subvariant)))
            .map(Detection::Sms),
    }
}

fn sms_signature_range(subvariant: Subvariant) -> Range<usize> {
    let start = join(subvariant.prefix(), sms::layout::SIGNATURE_SUFFIX);
    start..start + sms::layout::SIGNATURE_LEN
}

fn has_signature(image: &[u8], range: Range<usize>) -> bool {
    let end = range.end.min(image.len());
    let found = image
        .get(range.start..end)
        .is_some_and(|bytes| decode_text(bytes).contains(SIGNATURE));
    tracing::trace!(start = range.start, end = range.end, found, "signature probe");
    found
}

#[cfg(test)]
mod tests {
    use super::{Detection, ScanError, scan};
    use crate::formats::{Layout, Subvariant};

    fn image_with(len: usize, offset: usize, bytes: &[u8]) -> Vec<u8> {
        let mut image = vec![0xffu8; len];
        image[offset..offset + bytes.len()].copy_from_slice(bytes);
        image
    }

    #[test]
    fn detects_smd_signature() {
        let image = image_with(0x200, 0x100, b"SEGA MEGA DRIVE ");
        let detection = scan(&image, None).unwrap();
        assert_eq!(detection, Detection::Smd);
        assert_eq!(detection.subvariant(), None);
    }

    #[test]
    fn detects_32x_signature_inside_range() {
        let image = image_with(0x200, 0x100, b"SEGA 32X        ");
        assert_eq!(scan(&image, None).unwrap().layout(), Layout::Smd);
    }

    #[test]
    fn detects_sms_at_7ff0() {
        let image = image_with(0x8000, 0x7ff0, b"TMR SEGA");
        let detection = scan(&image, None).unwrap();
        assert_eq!(detection.layout(), Layout::Sms);
        assert_eq!(detection, Detection::Sms(Subvariant::Prefix7f));
    }

    #[test]
    fn detects_sms_at_81f0() {
        let image = image_with(0x8200, 0x81f0, b"TMR SEGA");
        let detection = scan(&image, None).unwrap();
        assert_eq!(detection, Detection::Sms(Subvariant::Prefix81));
    }

    #[test]
    fn prefers_7f_when_both_match() {
        let mut image = image_with(0x8200, 0x7ff0, b"TMR SEGA");
        image[0x81f0..0x81f8].copy_from_slice(b"TMR SEGA");
        let detection = scan(&image, Some(Layout::Sms)).unwrap();
        assert_eq!(detection, Detection::Sms(Subvariant::Prefix7f));
    }

    #[test]
    fn hint_restricts_probing() {
        let image = image_with(0x8000, 0x7ff0, b"TMR SEGA");
        let err = scan(&image, Some(Layout::Smd)).unwrap_err();
        assert_eq!(
            err,
            ScanError::NoSignature {
                probed: vec![Layout::Smd]
            }
        );
    }

    #[test]
    fn short_image_has_no_signature() {
        let err = scan(&[0u8; 0x80], None).unwrap_err();
        assert!(err.to_string().contains("smd, sms"));
    }

    #[test]
    fn clamped_probe_still_matches() {
        let image = image_with(0x7ff4, 0x7ff0, b"SEGA");
        let detection = scan(&image, None).unwrap();
        assert_eq!(detection, Detection::Sms(Subvariant::Prefix7f));
    }
}
