//! Offsets inside composite segments (relative to the segment start).

use std::ops::Range;

pub const RANGE_START: Range<usize> = 0..4;
pub const RANGE_END: Range<usize> = 4..8;
/// An allocation range needs the full start word and at least one end byte.
pub const RANGE_MIN_LEN: usize = RANGE_START.end + 1;

pub const SRAM_TAG: Range<usize> = 0..2;
pub const SRAM_TAG_PRESENT: &str = "RA";
pub const SRAM_TYPE: Range<usize> = 2..3;
pub const SRAM_KIND: Range<usize> = 3..4;
pub const SRAM_KIND_EEPROM: &str = "40";
pub const SRAM_RANGE: Range<usize> = 4..12;
pub const EEPROM_RANGE: Range<usize> = 4..11;

pub const MODEM_TAG: Range<usize> = 0..2;
pub const MODEM_TAG_PRESENT: &str = "MO";
pub const MODEM_PUBLISHER: Range<usize> = 2..6;
pub const MODEM_GAME_NUMBER: Range<usize> = 6..8;
pub const MODEM_VERSION: Range<usize> = 9..10;
pub const MODEM_SUPPORT: Range<usize> = 10..12;
