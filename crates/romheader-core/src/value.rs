use std::fmt;

use serde::{Deserialize, Serialize};

/// Decoded value of one header field.
///
/// Serialized adjacently tagged, e.g. `{"kind":"hex_string","value":"a1b2"}`.
///
/// # Examples
/// ```
/// use romheader_core::DecodedValue;
///
/// let value = DecodedValue::list(vec![
///     DecodedValue::hex("00000000"),
///     DecodedValue::Integer(256),
/// ]);
/// assert_eq!(value.to_string(), "[00000000, 256]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DecodedValue {
    Text(String),
    HexString(String),
    Integer(i64),
    List(Vec<DecodedValue>),
    /// Fixed marker for an absent capability (e.g. "No SRAM").
    Sentinel(String),
}

impl DecodedValue {
    pub fn text(value: impl Into<String>) -> Self {
        DecodedValue::Text(value.into())
    }

    pub fn hex(value: impl Into<String>) -> Self {
        DecodedValue::HexString(value.into())
    }

    pub fn sentinel(value: impl Into<String>) -> Self {
        DecodedValue::Sentinel(value.into())
    }

    pub fn list(items: Vec<DecodedValue>) -> Self {
        DecodedValue::List(items)
    }

    /// Build a list of text items from static labels.
    pub fn text_list<'a>(items: impl IntoIterator<Item = &'a str>) -> Self {
        DecodedValue::List(items.into_iter().map(DecodedValue::text).collect())
    }

    pub fn as_list(&self) -> Option<&[DecodedValue]> {
        match self {
            DecodedValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, DecodedValue::Sentinel(_))
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Text(value)
            | DecodedValue::HexString(value)
            | DecodedValue::Sentinel(value) => f.write_str(value),
            DecodedValue::Integer(value) => write!(f, "{value}"),
            DecodedValue::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DecodedValue;

    #[test]
    fn serializes_adjacently_tagged() {
        let value = DecodedValue::hex("a1b2");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["kind"], "hex_string");
        assert_eq!(json["value"], "a1b2");
    }

    #[test]
    fn nested_list_survives_json() {
        let value = DecodedValue::list(vec![
            DecodedValue::text("EEPROM"),
            DecodedValue::list(vec![DecodedValue::Integer(1)]),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        let back: DecodedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn display_flattens_nested_lists() {
        let value = DecodedValue::list(vec![
            DecodedValue::text("EEPROM"),
            DecodedValue::list(vec![DecodedValue::hex("00200001"), DecodedValue::Integer(1)]),
        ]);
        assert_eq!(value.to_string(), "[EEPROM, [00200001, 1]]");
    }
}
