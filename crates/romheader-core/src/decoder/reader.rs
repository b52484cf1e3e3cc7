use std::ops::Range;

use super::error::SegmentError;
use super::hex;
use super::text::decode_text;

/// Bounds-checked access to one header segment.
pub struct SegmentReader<'a> {
    segment: &'a [u8],
}

impl<'a> SegmentReader<'a> {
    pub fn new(segment: &'a [u8]) -> Self {
        Self { segment }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), SegmentError> {
        if self.segment.len() < needed {
            return Err(SegmentError::TooShort {
                needed,
                actual: self.segment.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], SegmentError> {
        self.segment.get(range.clone()).ok_or(SegmentError::TooShort {
            needed: range.end,
            actual: self.segment.len(),
        })
    }

    /// Read `range`, clamping its end to the segment; the start must be in
    /// bounds and at least one byte must remain.
    pub fn read_up_to(&self, range: Range<usize>) -> Result<&'a [u8], SegmentError> {
        let end = range.end.min(self.segment.len());
        if range.start >= end {
            return Err(SegmentError::TooShort {
                needed: range.start + 1,
                actual: self.segment.len(),
            });
        }
        self.read_slice(range.start..end)
    }

    pub fn read_text(&self, range: Range<usize>) -> Result<String, SegmentError> {
        Ok(decode_text(self.read_slice(range)?))
    }

    pub fn read_hex(&self, range: Range<usize>) -> Result<String, SegmentError> {
        Ok(hex::render(self.read_slice(range)?))
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, SegmentError> {
        self.segment
            .get(offset)
            .copied()
            .ok_or(SegmentError::TooShort {
                needed: offset + 1,
                actual: self.segment.len(),
            })
    }
}
