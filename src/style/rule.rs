//! Style rule fragments and merging.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::resolved::{ResolvedStyle, ResolvedValue};
use crate::token::TokenTable;

/// A single property value inside a [`StyleRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A concrete value passed through unchanged (e.g. `"2px"`, `"none"`).
    Literal(String),
    /// A reference to a semantic token, resolved against the table at
    /// composition time.
    Token(String),
    /// A nested pseudo-state block (e.g. `_hover`). Exactly one level deep:
    /// nested rules may only contain literals and token references.
    Nested(StyleRule),
}

/// An insertion-ordered map of style properties.
///
/// Rules are fragments: a component's base rule, a size fragment, a variant
/// fragment. They are merged with last-applied-wins semantics and resolved
/// against a [`TokenTable`] only after all merging is done, so a later
/// fragment can still override a property with a token reference.
///
/// # Example
///
/// ```rust
/// use undertone::StyleRule;
///
/// let rule = StyleRule::new()
///     .prop("border-width", "2px")
///     .token("color", "t_text")
///     .nested("_hover", StyleRule::new().prop("text-decoration", "none"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleRule {
    props: IndexMap<String, StyleValue>,
}

impl StyleRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a literal property value, returning the rule for chaining.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props
            .insert(name.into(), StyleValue::Literal(value.into()));
        self
    }

    /// Sets a property to a semantic token reference.
    pub fn token(mut self, name: impl Into<String>, token: impl Into<String>) -> Self {
        self.props
            .insert(name.into(), StyleValue::Token(token.into()));
        self
    }

    /// Sets a nested pseudo-state block.
    pub fn nested(mut self, name: impl Into<String>, block: StyleRule) -> Self {
        self.props
            .insert(name.into(), StyleValue::Nested(block));
        self
    }

    /// Returns the value for a property, if set.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.props.get(name)
    }

    /// Returns true if the rule has no properties.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Number of properties in this rule.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Iterates over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` over this rule, last-applied-wins.
    ///
    /// When both sides hold a nested block under the same key, the inner
    /// properties merge one level with the same rule; any other collision
    /// replaces the existing value wholesale.
    pub fn merge(&mut self, other: &StyleRule) {
        for (key, value) in &other.props {
            match (self.props.get_mut(key), value) {
                (Some(StyleValue::Nested(existing)), StyleValue::Nested(incoming)) => {
                    existing.merge(incoming);
                }
                (_, value) => {
                    self.props.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Resolves every token reference against the table under the given mode.
    ///
    /// Literals pass through untouched and are never reinterpreted as token
    /// names. Nested blocks resolve the same way, one level deep.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] for a reference absent from the
    /// table.
    pub fn resolve(&self, table: &TokenTable, mode: ColorMode) -> Result<ResolvedStyle, ThemeError> {
        let mut resolved = ResolvedStyle::new();
        for (key, value) in &self.props {
            let concrete = match value {
                StyleValue::Literal(v) => ResolvedValue::Value(v.clone()),
                StyleValue::Token(name) => {
                    ResolvedValue::Value(table.resolve(name, mode)?.to_string())
                }
                StyleValue::Nested(block) => {
                    let mut inner = IndexMap::new();
                    for (k, v) in &block.props {
                        let concrete = match v {
                            StyleValue::Literal(v) => v.clone(),
                            StyleValue::Token(name) => table.resolve(name, mode)?.to_string(),
                            // Blocks are one level deep; anything deeper is
                            // dropped rather than flattened.
                            StyleValue::Nested(_) => continue,
                        };
                        inner.insert(k.clone(), concrete);
                    }
                    ResolvedValue::Block(inner)
                }
            };
            resolved.insert(key.clone(), concrete);
        }
        Ok(resolved)
    }
}
