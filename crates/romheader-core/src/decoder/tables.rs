//! Fixed lookup tables.

/// Peripheral codes (device field), one character per supported device.
pub const DEVICES: &[(char, &str)] = &[
    ('O', "SMS Controller"),
    ('4', "Multitap"),
    ('6', "6-button Controller"),
    ('A', "Analog"),
    ('B', "Trackball"),
    ('C', "CD-ROM"),
    ('F', "Floppy"),
    ('G', "Lightgun"),
    ('J', "3-button Controller"),
    ('K', "Keyboard"),
    ('L', "Activator"),
    ('M', "Mouse"),
    ('P', "Printer"),
    ('R', "Serial RS-232"),
    ('T', "Tablet"),
];

pub const JAPAN: &str = "Japan, South Korea, Taiwan";
pub const AMERICAS: &str = "N. America, Brazil";
pub const EUROPE: &str = "Europe, Hong Kong, Australia";

/// Letter region codes.
pub const REGIONS: &[(char, &str)] = &[('J', JAPAN), ('U', AMERICAS), ('E', EUROPE)];

/// Region bitmask bits (post-1995 single hex digit form) and the letter
/// each one stands for.
pub const REGION_BITS: &[(u32, char)] = &[(0x1, 'J'), (0x4, 'U'), (0x8, 'E')];

/// 8-bit ROM size, keyed by the low nibble of the last header byte.
pub const ROM_SIZES: &[(char, &str)] = &[
    ('a', "8KB"),
    ('b', "16KB"),
    ('c', "32KB"),
    ('d', "48KB"),
    ('e', "64KB"),
    ('f', "128KB"),
    ('0', "256KB"),
    ('1', "512KB"),
    ('2', "1024KB"),
];

/// 8-bit system and region, keyed by the high nibble of the last header byte.
pub const MARK3_REGIONS: &[(char, &str)] = &[
    ('3', "SMS Japan"),
    ('4', "SMS Export"),
    ('5', "Game Gear Japan"),
    ('6', "Game Gear Export"),
    ('7', "Game Gear International"),
];

pub const SUPPORT_LEVELS: [&str; 3] = ["No", "Yes", "Yes with mic"];

/// Modem support code -> (Japan level, export level) indices into
/// `SUPPORT_LEVELS`.
pub const MODEM_SUPPORT: &[(&str, [usize; 2])] = &[
    ("00", [1, 0]),
    ("10", [2, 0]),
    ("20", [0, 1]),
    ("30", [0, 2]),
    ("40", [1, 1]),
    ("50", [2, 2]),
    ("60", [1, 2]),
    ("70", [2, 1]),
];

/// Fallback for single-key tables with no entry.
pub const UNKNOWN: &str = "Unknown";

/// Look up every character of `code` in `table`, skipping characters with
/// no entry. Matches keep input order (duplicates included).
pub fn lookup_all(table: &[(char, &'static str)], code: &str) -> Vec<&'static str> {
    code.chars().filter_map(|c| lookup(table, c)).collect()
}

pub fn lookup(table: &[(char, &'static str)], key: char) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, label)| *label)
}
