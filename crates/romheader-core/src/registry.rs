//! Field registries for each header layout.
//!
//! A registry is an ordered list of [`FieldDescriptor`]s. Order is the
//! display and assembly order; names are unique within a registry.

use serde::Serialize;

use crate::decoder::DecodeKind;
use crate::formats::{Layout, Subvariant, join, smd, sms};
use crate::scanner::Detection;

/// Display label(s) of a field.
///
/// Composite fields carry a heading followed by one label per list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Labels {
    Scalar(&'static str),
    Composite(&'static [&'static str]),
}

impl Labels {
    /// Scalar label, or the heading of a composite.
    pub fn heading(&self) -> &'static str {
        match *self {
            Labels::Scalar(label) => label,
            Labels::Composite(labels) => labels.first().copied().unwrap_or(""),
        }
    }

    /// Per-item labels of a composite (empty for scalars).
    pub fn items(&self) -> &'static [&'static str] {
        match *self {
            Labels::Scalar(_) => &[],
            Labels::Composite(labels) => labels.get(1..).unwrap_or(&[]),
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        match *self {
            Labels::Scalar(label) => vec![label.to_string()],
            Labels::Composite(labels) => labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// One header field: where it lives and how it is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: usize,
    pub length: usize,
    pub kind: DecodeKind,
    pub labels: Labels,
}

impl FieldDescriptor {
    const fn new(
        name: &'static str,
        offset: usize,
        length: usize,
        kind: DecodeKind,
        labels: Labels,
    ) -> Self {
        Self {
            name,
            offset,
            length,
            kind,
            labels,
        }
    }

    /// Byte range of the field within the image.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Ordered field table for one layout.
///
/// # Examples
/// ```
/// use romheader_core::{FieldRegistry, Subvariant};
///
/// let registry = FieldRegistry::sms(Subvariant::Prefix7f);
/// assert_eq!(registry.get("checksum").unwrap().offset, 0x7ffa);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    layout: Layout,
    subvariant: Option<Subvariant>,
    fields: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    /// 16-bit header fields at fixed offsets.
    pub fn smd() -> Self {
        use DecodeKind::*;
        use Labels::{Composite, Scalar};
        use smd::layout as l;

        #[rustfmt::skip]
        let fields = vec![
            FieldDescriptor::new("system", l::SYSTEM_OFFSET, l::SYSTEM_LEN, Text, Scalar("System Type")),
            FieldDescriptor::new("copyright", l::COPYRIGHT_OFFSET, l::COPYRIGHT_LEN, Text, Scalar("Copyright")),
            FieldDescriptor::new("domestic", l::DOMESTIC_TITLE_OFFSET, l::TITLE_LEN, Text, Scalar("Japan Title")),
            FieldDescriptor::new("export", l::EXPORT_TITLE_OFFSET, l::TITLE_LEN, Text, Scalar("Export Title")),
            FieldDescriptor::new("serial", l::SERIAL_OFFSET, l::SERIAL_LEN, Text, Scalar("Serial")),
            FieldDescriptor::new("checksum", l::CHECKSUM_OFFSET, l::CHECKSUM_LEN, Hex, Scalar("Checksum")),
            FieldDescriptor::new("device", l::DEVICE_OFFSET, l::DEVICE_LEN, Device, Scalar("Devices Supported")),
            FieldDescriptor::new(
                "romrange",
                l::ROM_RANGE_OFFSET,
                l::RANGE_LEN,
                AllocationRange,
                Composite(&["ROM", "Min Offset", "Max offset", "kB"]),
            ),
            FieldDescriptor::new(
                "ramrange",
                l::RAM_RANGE_OFFSET,
                l::RANGE_LEN,
                AllocationRange,
                Composite(&["RAM", "Min Offset", "Max offset", "kB"]),
            ),
            FieldDescriptor::new(
                "extra",
                l::EXTRA_OFFSET,
                l::EXTRA_LEN,
                Sram,
                Composite(&["SRAM", "Type", "Width", "Min", "Max", "kB"]),
            ),
            FieldDescriptor::new(
                "modem",
                l::MODEM_OFFSET,
                l::MODEM_LEN,
                Modem,
                Composite(&["Modem", "Publisher", "Game Number", "Version", "Japan Support", "Export Support"]),
            ),
            FieldDescriptor::new("region", l::REGION_OFFSET, l::REGION_LEN, Region, Scalar("Regions")),
        ];

        Self {
            layout: Layout::Smd,
            subvariant: None,
            fields,
        }
    }

    /// 8-bit header fields relative to the matched signature prefix.
    pub fn sms(subvariant: Subvariant) -> Self {
        use DecodeKind::*;
        use Labels::Scalar;
        use sms::layout as l;

        let at = |suffix| join(subvariant.prefix(), suffix);
        #[rustfmt::skip]
        let fields = vec![
            FieldDescriptor::new("system", at(l::SYSTEM_SUFFIX), l::SYSTEM_LEN, Text, Scalar("System Type")),
            FieldDescriptor::new("checksum", at(l::CHECKSUM_SUFFIX), l::CHECKSUM_LEN, Hex, Scalar("Checksum")),
            FieldDescriptor::new("prod", at(l::PRODUCT_SUFFIX), l::PRODUCT_LEN, HexBigEndian, Scalar("Product Number")),
            FieldDescriptor::new("version", at(l::VERSION_SUFFIX), l::VERSION_LEN, NibbleLow, Scalar("Version")),
            FieldDescriptor::new("size", at(l::SIZE_REGION_SUFFIX), l::SIZE_REGION_LEN, RomSize, Scalar("Size")),
            FieldDescriptor::new("m3region", at(l::SIZE_REGION_SUFFIX), l::SIZE_REGION_LEN, Mark3Region, Scalar("Region")),
        ];

        Self {
            layout: Layout::Sms,
            subvariant: Some(subvariant),
            fields,
        }
    }

    /// Registry for a scanner result.
    pub fn for_detection(detection: Detection) -> Self {
        match detection {
            Detection::Smd => Self::smd(),
            Detection::Sms(subvariant) => Self::sms(subvariant),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn subvariant(&self) -> Option<Subvariant> {
        self.subvariant
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Smallest image length covering every field.
    pub fn required_len(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.offset + field.length)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldRegistry, Labels};
    use crate::decoder::{DecodeKind, declared_len};
    use crate::formats::{Layout, Subvariant};
    use crate::scanner::Detection;

    #[test]
    fn smd_has_twelve_ordered_fields() {
        let registry = FieldRegistry::smd();
        assert_eq!(
            registry.names(),
            vec![
                "system", "copyright", "domestic", "export", "serial", "checksum", "device",
                "romrange", "ramrange", "extra", "modem", "region"
            ]
        );
        assert_eq!(registry.required_len(), 0x1f3);
    }

    #[test]
    fn smd_fields_stay_inside_header_block() {
        for field in FieldRegistry::smd().iter() {
            assert!(field.offset >= 0x100 && field.offset + field.length <= 0x1f3, "{}", field.name);
        }
    }

    #[test]
    fn sms_offsets_follow_prefix() {
        let low = FieldRegistry::sms(Subvariant::Prefix7f);
        let high = FieldRegistry::sms(Subvariant::Prefix81);
        assert_eq!(low.get("prod").unwrap().offset, 0x7ffc);
        assert_eq!(high.get("prod").unwrap().offset, 0x81fc);
        assert_eq!(high.required_len(), 0x8200);
        for (a, b) in low.iter().zip(high.iter()) {
            assert_eq!(b.offset - a.offset, 0x8100 - 0x7f00);
        }
    }

    #[test]
    fn size_and_region_share_offset() {
        let registry = FieldRegistry::sms(Subvariant::Prefix7f);
        let size = registry.get("size").unwrap();
        let region = registry.get("m3region").unwrap();
        assert_eq!(size.offset, region.offset);
        assert_eq!(size.kind, DecodeKind::RomSize);
        assert_eq!(region.kind, DecodeKind::Mark3Region);
    }

    #[test]
    fn descriptor_kinds_match_name_dispatch() {
        let registries = [
            FieldRegistry::smd(),
            FieldRegistry::sms(Subvariant::Prefix81),
        ];
        for registry in &registries {
            for field in registry.iter() {
                assert_eq!(DecodeKind::for_field(field.name), Some(field.kind), "{}", field.name);
            }
        }
    }

    #[test]
    fn detection_selects_matching_registry() {
        let smd = FieldRegistry::for_detection(Detection::Smd);
        assert_eq!(smd.layout(), Layout::Smd);
        assert_eq!(smd.subvariant(), None);

        let sms = FieldRegistry::for_detection(Detection::Sms(Subvariant::Prefix81));
        assert_eq!(sms.subvariant(), Some(Subvariant::Prefix81));
        assert_eq!(sms.get("checksum").unwrap().offset, 0x81fa);
    }

    #[test]
    fn field_lengths_cover_standalone_decoding() {
        for registry in [FieldRegistry::smd(), FieldRegistry::sms(Subvariant::Prefix7f)] {
            for field in registry.iter() {
                let needed = declared_len(field.name).unwrap();
                assert!(field.length >= needed, "{}", field.name);
                assert!(field.length >= field.kind.min_len(), "{}", field.name);
            }
        }
    }

    #[test]
    fn composite_labels_split_heading_and_items() {
        let registry = FieldRegistry::smd();
        let labels = registry.get("romrange").unwrap().labels;
        assert_eq!(labels.heading(), "ROM");
        assert_eq!(labels.items(), &["Min Offset", "Max offset", "kB"]);
        assert_eq!(Labels::Scalar("Serial").items().len(), 0);
    }
}
