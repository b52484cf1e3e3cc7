//! Sega cartridge header decoding.
//!
//! This crate decodes the metadata embedded in Sega ROM images: the 16-bit
//! Mega Drive / Genesis / 32X header and the 8-bit Master System / Game Gear
//! header. The pipeline is byte-oriented and side-effect free:
//! scanner (layout detection) -> registry (field table) -> decoder (per
//! field algorithm) -> assembled [`Header`]. File access belongs to the
//! caller.
//!
//! Invariants:
//! - Each field name maps to exactly one decode algorithm.
//! - A field whose bytes fall outside the image fails before any read.
//! - 8-bit offsets come from a single matched signature location.
//! - Header assembly is all-or-nothing; no partial header is exposed.
//!
//! # Examples
//! ```
//! use romheader_core::{DecodedValue, populate};
//!
//! let mut image = vec![b' '; 0x200];
//! image[0x100..0x110].copy_from_slice(b"SEGA MEGA DRIVE ");
//! image[0x1f0] = b'J';
//!
//! let header = populate(&image, None)?;
//! let region = &header.lookup_field("region")?.value;
//! assert_eq!(region, &DecodedValue::text_list(["Japan, South Korea, Taiwan"]));
//! # Ok::<(), romheader_core::HeaderError>(())
//! ```

use serde::{Deserialize, Serialize};

mod decoder;
mod formats;
mod header;
mod inspect;
mod registry;
mod scanner;
mod value;

pub use decoder::error::SegmentError;
pub use decoder::{DecodeKind, NO_SRAM, NO_SUPPORT, declared_len, decode, decode_field};
pub use formats::{Layout, Subvariant};
pub use header::{Header, HeaderEntry, HeaderError, populate};
pub use inspect::inspect_image;
pub use registry::{FieldDescriptor, FieldRegistry, Labels};
pub use scanner::{Detection, ScanError, scan};
pub use value::DecodedValue;

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller supplies none.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded header report for one image.
///
/// # Examples
/// ```
/// use romheader_core::make_stub_report;
///
/// let report = make_stub_report("sonic.md", 524288);
/// assert_eq!(report.report_version, romheader_core::REPORT_VERSION);
/// assert!(report.header.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp attached to the report.
    pub generated_at: String,
    /// Input image metadata.
    pub input: InputInfo,
    /// Detected layout; absent for unofficial images.
    pub image: Option<ImageInfo>,
    /// Decoded fields in registry order; absent for unofficial images.
    pub header: Option<Vec<FieldReport>>,
    /// Why no header could be decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unofficial_reason: Option<String>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input image metadata embedded in reports.
///
/// # Examples
/// ```
/// use romheader_core::InputInfo;
///
/// let input = InputInfo {
///     path: "sonic.md".to_string(),
///     bytes: 524288,
/// };
/// assert_eq!(input.bytes, 524288);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided by the caller.
    pub path: String,
    /// Image size in bytes.
    pub bytes: u64,
}

/// Layout detected by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subvariant: Option<Subvariant>,
}

/// One decoded field with its descriptor metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Registry field name (e.g. "romrange").
    pub name: String,
    /// Absolute byte offset in the image.
    pub offset: usize,
    /// Field length in bytes.
    pub length: usize,
    /// Display label, or heading followed by per-item labels.
    pub labels: Vec<String>,
    pub value: DecodedValue,
}

/// Build a report with base fields filled and no header.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "romheader".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        image: None,
        header: None,
        unofficial_reason: None,
    }
}
