//! Component style specifications.

use indexmap::IndexMap;

use crate::mode::ColorMode;
use crate::style::StyleRule;

/// A variant function: produces a style fragment from the ambient inputs.
///
/// Plain function pointers keep component specs `Copy`-friendly, `Send + Sync`
/// and trivially cloneable; they also make it impossible for a variant to read
/// mode from anywhere but its arguments.
pub type VariantFn = fn(ColorMode, Option<&str>) -> StyleRule;

/// A named style variant for a component.
#[derive(Debug, Clone)]
pub enum Variant {
    /// A fixed fragment, merged as-is.
    Static(StyleRule),
    /// A fragment computed from `(mode, color_scheme)` at compose time, for
    /// variants whose values depend on the active mode (e.g. a hover state
    /// that flips between black and white alphas).
    Dynamic(VariantFn),
}

impl Variant {
    /// Produces the fragment to merge for this request.
    pub(crate) fn fragment(&self, mode: ColorMode, scheme: Option<&str>) -> StyleRule {
        match self {
            Variant::Static(rule) => rule.clone(),
            Variant::Dynamic(f) => f(mode, scheme),
        }
    }
}

impl From<StyleRule> for Variant {
    fn from(rule: StyleRule) -> Self {
        Variant::Static(rule)
    }
}

impl From<VariantFn> for Variant {
    fn from(f: VariantFn) -> Self {
        Variant::Dynamic(f)
    }
}

/// The full style specification for one component.
///
/// # Example
///
/// ```rust
/// use undertone::{ComponentStyle, StyleRule};
///
/// let button = ComponentStyle::new(StyleRule::new().prop("font-weight", "600"))
///     .size("xl", StyleRule::new().prop("h", "60px"))
///     .variant("outline", StyleRule::new().prop("border-width", "2px"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentStyle {
    pub(crate) base: StyleRule,
    pub(crate) sizes: IndexMap<String, StyleRule>,
    pub(crate) variants: IndexMap<String, Variant>,
}

impl ComponentStyle {
    /// Creates a spec with the given base rule.
    pub fn new(base: StyleRule) -> Self {
        Self {
            base,
            sizes: IndexMap::new(),
            variants: IndexMap::new(),
        }
    }

    /// Registers a size fragment, returning the spec for chaining.
    pub fn size(mut self, name: impl Into<String>, rule: StyleRule) -> Self {
        self.sizes.insert(name.into(), rule);
        self
    }

    /// Registers a variant, accepting either a [`StyleRule`] or a [`VariantFn`].
    pub fn variant(mut self, name: impl Into<String>, variant: impl Into<Variant>) -> Self {
        self.variants.insert(name.into(), variant.into());
        self
    }

    /// Returns the base rule.
    pub fn base(&self) -> &StyleRule {
        &self.base
    }

    /// Returns true if a variant with this name is registered.
    pub fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Iterates over registered size names.
    pub fn size_names(&self) -> impl Iterator<Item = &str> {
        self.sizes.keys().map(|s| s.as_str())
    }

    /// Iterates over registered variant names.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(|s| s.as_str())
    }
}
