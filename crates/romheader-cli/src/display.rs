//! Text rendering of decoded header fields.

use romheader_core::{DecodedValue, Header, HeaderEntry, Labels};

/// Lines for every field, in registry order.
pub fn render_header(header: &Header) -> Vec<String> {
    header.entries().iter().flat_map(render_entry).collect()
}

/// Lines for one field.
///
/// - list value, composite labels: heading, then `\tlabel: item` pairs
/// - list value, scalar label: label, then one `\titem` per entry
/// - otherwise: `label: value`
pub fn render_entry(entry: &HeaderEntry) -> Vec<String> {
    let labels = entry.descriptor.labels;
    match (&entry.value, labels) {
        (DecodedValue::List(items), Labels::Composite(_)) => {
            let mut lines = vec![labels.heading().to_string()];
            lines.extend(
                labels
                    .items()
                    .iter()
                    .zip(items)
                    .map(|(label, item)| format!("\t{}: {}", label, display_value(item))),
            );
            lines
        }
        (DecodedValue::List(items), Labels::Scalar(label)) => {
            let mut lines = vec![label.to_string()];
            lines.extend(items.iter().map(|item| format!("\t{}", display_value(item))));
            lines
        }
        (value, _) => vec![format!("{}: {}", labels.heading(), display_value(value))],
    }
}

/// Display form of a value; header padding is trimmed from text.
pub fn display_value(value: &DecodedValue) -> String {
    match value {
        DecodedValue::Text(text) => text.trim_end_matches(['\0', ' ']).to_string(),
        DecodedValue::List(items) => {
            let inner = items.iter().map(display_value).collect::<Vec<_>>();
            format!("[{}]", inner.join(", "))
        }
        other => other.to_string(),
    }
}
