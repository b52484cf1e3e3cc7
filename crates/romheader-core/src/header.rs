//! Header assembly and field queries.
//!
//! A [`Header`] is built once from a [`FieldRegistry`] and a raw image, then
//! only read. Assembly is all-or-nothing: a bounds or decode failure on any
//! field aborts the whole header.

use thiserror::Error;

use crate::decoder::{decode, error::SegmentError};
use crate::formats::{Layout, Subvariant};
use crate::registry::{FieldDescriptor, FieldRegistry};
use crate::scanner::{ScanError, scan};
use crate::{DecodedValue, FieldReport};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error(
        "field '{field}' out of bounds: needs bytes {offset:#x}..{:#x}, image has {actual:#x}",
        .offset + .length
    )]
    Bounds {
        field: &'static str,
        offset: usize,
        length: usize,
        actual: usize,
    },
    #[error("field '{field}' failed to decode: {source}")]
    Decode {
        field: &'static str,
        #[source]
        source: SegmentError,
    },
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("invalid field '{name}'; valid fields: {}", .valid.join(", "))]
    UnknownField { name: String, valid: Vec<String> },
}

impl HeaderError {
    /// Whether the error means the image carries no usable official header.
    ///
    /// Callers degrade to "unofficial image" for these; an unknown field
    /// query is a caller mistake instead.
    pub fn is_unofficial(&self) -> bool {
        !matches!(self, HeaderError::UnknownField { .. })
    }
}

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub descriptor: FieldDescriptor,
    pub value: DecodedValue,
}

impl HeaderEntry {
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn to_report(&self) -> FieldReport {
        FieldReport {
            name: self.descriptor.name.to_string(),
            offset: self.descriptor.offset,
            length: self.descriptor.length,
            labels: self.descriptor.labels.to_vec(),
            value: self.value.clone(),
        }
    }
}

/// Fully decoded header of one image.
///
/// # Examples
/// ```
/// use romheader_core::{FieldRegistry, Header, Subvariant};
///
/// let mut image = vec![0u8; 0x8000];
/// image[0x7ff0..0x7ff8].copy_from_slice(b"TMR SEGA");
/// image[0x7fff] = 0x4c;
///
/// let header = Header::assemble(&FieldRegistry::sms(Subvariant::Prefix7f), &image)?;
/// assert_eq!(header.lookup_field("size")?.value.to_string(), "32KB");
/// # Ok::<(), romheader_core::HeaderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    layout: Layout,
    subvariant: Option<Subvariant>,
    entries: Vec<HeaderEntry>,
}

impl Header {
    /// Decode every registry field from `image`, in registry order.
    pub fn assemble(registry: &FieldRegistry, image: &[u8]) -> Result<Self, HeaderError> {
        let entries = registry
            .iter()
            .map(|descriptor| decode_entry(descriptor, image))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            layout = %registry.layout(),
            fields = entries.len(),
            "header assembled"
        );
        Ok(Self {
            layout: registry.layout(),
            subvariant: registry.subvariant(),
            entries,
        })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn subvariant(&self) -> Option<Subvariant> {
        self.subvariant
    }

    pub fn entries(&self) -> &[HeaderEntry] {
        &self.entries
    }

    /// Field names in registry order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(HeaderEntry::name).collect()
    }

    pub fn lookup_field(&self, name: &str) -> Result<&HeaderEntry, HeaderError> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| HeaderError::UnknownField {
                name: name.to_string(),
                valid: self.fields().into_iter().map(str::to_string).collect(),
            })
    }

    pub fn to_reports(&self) -> Vec<FieldReport> {
        self.entries.iter().map(HeaderEntry::to_report).collect()
    }
}

fn decode_entry(descriptor: &FieldDescriptor, image: &[u8]) -> Result<HeaderEntry, HeaderError> {
    let segment = image
        .get(descriptor.range())
        .ok_or(HeaderError::Bounds {
            field: descriptor.name,
            offset: descriptor.offset,
            length: descriptor.length,
            actual: image.len(),
        })?;
    let value = decode(descriptor.kind, segment).map_err(|source| HeaderError::Decode {
        field: descriptor.name,
        source,
    })?;
    tracing::trace!(field = descriptor.name, %value, "field decoded");
    Ok(HeaderEntry {
        descriptor: *descriptor,
        value,
    })
}

/// Scan `image`, pick the matching registry and assemble its header.
pub fn populate(image: &[u8], hint: Option<Layout>) -> Result<Header, HeaderError> {
    let registry = FieldRegistry::for_detection(scan(image, hint)?);
    Header::assemble(&registry, image)
}
