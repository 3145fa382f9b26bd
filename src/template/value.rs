//! # Template Values
//!
//! A small, schema-less tree mirroring the parsed YAML document. Accessors never
//! panic: an absent key or a value of the wrong shape is reported as `None`, so
//! callers can fall back to their documented defaults.

use std::fmt;

/// A node of the parsed template tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
    Sequence(Vec<TemplateValue>),
    /// Key/value pairs in source order.
    Mapping(Vec<(String, TemplateValue)>),
}

impl TemplateValue {
    /// Looks up `key` when this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TemplateValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, TemplateValue)]> {
        match self {
            TemplateValue::Mapping(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[TemplateValue]> {
        match self {
            TemplateValue::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TemplateValue::Null)
    }

    /// Text of a scalar value; `None` for null, sequences and mappings.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            TemplateValue::Bool(b) => Some(b.to_string()),
            TemplateValue::Number(n) => Some(n.to_string()),
            TemplateValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<serde_yaml::Value> for TemplateValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => TemplateValue::Null,
            serde_yaml::Value::Bool(b) => TemplateValue::Bool(b),
            serde_yaml::Value::Number(n) => TemplateValue::Number(n),
            serde_yaml::Value::String(s) => TemplateValue::String(s),
            serde_yaml::Value::Sequence(items) => {
                TemplateValue::Sequence(items.into_iter().map(TemplateValue::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => TemplateValue::Mapping(
                mapping
                    .into_iter()
                    .map(|(k, v)| (key_text(k), TemplateValue::from(v)))
                    .collect(),
            ),
            // Short-form intrinsics (`!Ref`, `!Sub`, ...) are kept as their inner value.
            serde_yaml::Value::Tagged(tagged) => TemplateValue::from(tagged.value),
        }
    }
}

fn key_text(key: serde_yaml::Value) -> String {
    match TemplateValue::from(key) {
        TemplateValue::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Inline (flow-style) rendering used when a value has to appear in a single table cell.
impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Null => Ok(()),
            TemplateValue::Bool(b) => write!(f, "{}", b),
            TemplateValue::Number(n) => write!(f, "{}", n),
            TemplateValue::String(s) => f.write_str(s),
            TemplateValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            TemplateValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
