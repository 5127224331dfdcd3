//! Fully concrete style output.

use indexmap::IndexMap;
use serde::Serialize;

/// A concrete value in a [`ResolvedStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// A plain property value.
    Value(String),
    /// A resolved pseudo-state block.
    Block(IndexMap<String, String>),
}

impl ResolvedValue {
    /// Shorthand for a plain value.
    pub fn value(v: impl Into<String>) -> Self {
        ResolvedValue::Value(v.into())
    }

    /// Returns the plain value, if this isn't a block.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResolvedValue::Value(v) => Some(v),
            ResolvedValue::Block(_) => None,
        }
    }
}

/// The token-free style produced for one compose request.
///
/// Created fresh per call and owned by the caller; this crate never caches or
/// shares resolved styles between requests. Serializes to a flat JSON object
/// (blocks become nested objects), preserving insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    props: IndexMap<String, ResolvedValue>,
}

impl ResolvedStyle {
    /// Creates an empty resolved style.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, value: ResolvedValue) {
        self.props.insert(name, value);
    }

    /// Returns the value for a property, if present.
    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.props.get(name)
    }

    /// Returns a plain property value as a string, if present and not a block.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ResolvedValue::as_str)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if no properties were produced.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        let mut style = ResolvedStyle::new();
        style.insert("color".to_string(), ResolvedValue::value("#444"));

        assert_eq!(style.value("color"), Some("#444"));
        assert_eq!(style.value("missing"), None);
        assert_eq!(style.len(), 1);
        assert!(!style.is_empty());
    }

    #[test]
    fn test_block_is_not_a_value() {
        let mut style = ResolvedStyle::new();
        style.insert("_hover".to_string(), ResolvedValue::Block(IndexMap::new()));
        assert_eq!(style.value("_hover"), None);
        assert!(matches!(style.get("_hover"), Some(ResolvedValue::Block(_))));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut style = ResolvedStyle::new();
        style.insert("color".to_string(), ResolvedValue::value("#444"));
        let mut block = IndexMap::new();
        block.insert("color".to_string(), "#fff".to_string());
        style.insert("_hover".to_string(), ResolvedValue::Block(block));

        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"color":"#444","_hover":{"color":"#fff"}}"##);
    }
}
