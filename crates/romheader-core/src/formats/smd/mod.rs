//! 16-bit (Mega Drive / Genesis / 32X) header.
//!
//! All fields live at fixed absolute offsets in `0x100..0x1f3`. The
//! signature range doubles as the "system" field.

pub mod layout;
