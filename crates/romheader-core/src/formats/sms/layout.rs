pub const SIGNATURE_SUFFIX: u8 = 0xf0;
pub const SIGNATURE_LEN: usize = 0x8;

pub const SYSTEM_SUFFIX: u8 = 0xf0;
pub const SYSTEM_LEN: usize = 0x8;
pub const CHECKSUM_SUFFIX: u8 = 0xfa;
pub const CHECKSUM_LEN: usize = 0x2;
pub const PRODUCT_SUFFIX: u8 = 0xfc;
pub const PRODUCT_LEN: usize = 0x3;
pub const VERSION_SUFFIX: u8 = 0xfe;
pub const VERSION_LEN: usize = 0x1;
/// Size and region share the last header byte (low and high nibble).
pub const SIZE_REGION_SUFFIX: u8 = 0xff;
pub const SIZE_REGION_LEN: usize = 0x1;
