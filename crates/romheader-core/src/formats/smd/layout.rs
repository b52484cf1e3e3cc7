use std::ops::Range;

pub const SIGNATURE_RANGE: Range<usize> = 0x100..0x110;

pub const SYSTEM_OFFSET: usize = 0x100;
pub const SYSTEM_LEN: usize = 0x10;
pub const COPYRIGHT_OFFSET: usize = 0x110;
pub const COPYRIGHT_LEN: usize = 0x10;
pub const DOMESTIC_TITLE_OFFSET: usize = 0x120;
pub const EXPORT_TITLE_OFFSET: usize = 0x150;
pub const TITLE_LEN: usize = 0x30;
pub const SERIAL_OFFSET: usize = 0x180;
pub const SERIAL_LEN: usize = 0xe;
pub const CHECKSUM_OFFSET: usize = 0x18e;
pub const CHECKSUM_LEN: usize = 0x2;
pub const DEVICE_OFFSET: usize = 0x190;
pub const DEVICE_LEN: usize = 0x10;
pub const ROM_RANGE_OFFSET: usize = 0x1a0;
pub const RAM_RANGE_OFFSET: usize = 0x1a8;
pub const RANGE_LEN: usize = 0x8;
pub const EXTRA_OFFSET: usize = 0x1b0;
pub const EXTRA_LEN: usize = 0xc;
pub const MODEM_OFFSET: usize = 0x1bc;
pub const MODEM_LEN: usize = 0xc;
pub const REGION_OFFSET: usize = 0x1f0;
pub const REGION_LEN: usize = 0x3;
