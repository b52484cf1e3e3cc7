//! 8-bit (Master System / Mark III / Game Gear) header.
//!
//! The 16-byte header sits at either `0x7ff0` or `0x81f0`; offsets are
//! expressed as suffixes joined to the matched prefix byte.

pub mod layout;
