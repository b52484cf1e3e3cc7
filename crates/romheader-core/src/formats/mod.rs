//! Cartridge header layouts.
//!
//! Each layout keeps its byte offsets in a `layout` module (source of truth).
//! The registry builder turns those offsets into ordered field descriptors;
//! the scanner probes the signature ranges to pick a layout.
//!
//! Two layouts exist:
//! - `smd`: 16-bit Mega Drive / Genesis / 32X header at fixed offsets
//!   `0x100..0x200`.
//! - `sms`: 8-bit Master System / Game Gear header, found either at
//!   `0x7ff0` or `0x81f0`. Offsets are built from a one-byte prefix
//!   (`0x7f` or `0x81`) and a one-byte suffix.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod smd;
pub mod sms;

/// Signature marker present in every official header.
pub const SIGNATURE: &str = "SEGA";

/// Header layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// 16-bit Mega Drive / Genesis / 32X.
    Smd,
    /// 8-bit Master System / Mark III / Game Gear.
    Sms,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Smd => "smd",
            Layout::Sms => "sms",
        }
    }

    /// Human-readable image type, as printed by the CLI.
    pub fn description(self) -> &'static str {
        match self {
            Layout::Smd => "16-bit image",
            Layout::Sms => "8-bit image",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the two SMS signature locations matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subvariant {
    #[serde(rename = "7f")]
    Prefix7f,
    #[serde(rename = "81")]
    Prefix81,
}

impl Subvariant {
    /// Probe order used by the scanner.
    pub const ALL: [Subvariant; 2] = [Subvariant::Prefix7f, Subvariant::Prefix81];

    /// High byte shared by every offset of this variant.
    pub fn prefix(self) -> u8 {
        match self {
            Subvariant::Prefix7f => 0x7f,
            Subvariant::Prefix81 => 0x81,
        }
    }

    /// Two-character tag (`"7f"` or `"81"`).
    pub fn tag(self) -> &'static str {
        match self {
            Subvariant::Prefix7f => "7f",
            Subvariant::Prefix81 => "81",
        }
    }
}

impl fmt::Display for Subvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Join a prefix byte and a suffix byte into an absolute offset
/// (`0x7f` + `0xf0` -> `0x7ff0`).
pub fn join(prefix: u8, suffix: u8) -> usize {
    (usize::from(prefix) << 8) | usize::from(suffix)
}
