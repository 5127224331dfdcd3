//! Component registry and style composition.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::component::spec::ComponentStyle;
use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::ResolvedStyle;
use crate::token::TokenTable;

/// Registry of component style specifications.
///
/// Populated once at startup through the builder-style [`add`](Self::add) and
/// read-only afterwards. Composition is a pure function of its arguments plus
/// the registry and token table, so concurrent `compose` calls need no
/// coordination.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentStyle>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component spec, returning the registry for chaining.
    ///
    /// Re-registering a name replaces the previous spec.
    pub fn add(mut self, name: impl Into<String>, spec: ComponentStyle) -> Self {
        self.components.insert(name.into(), spec);
        self
    }

    /// Looks up a component spec.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownComponent`] if the name isn't registered.
    pub fn get(&self, component: &str) -> Result<&ComponentStyle, ThemeError> {
        self.components
            .get(component)
            .ok_or_else(|| ThemeError::UnknownComponent {
                component: component.to_string(),
            })
    }

    /// Returns true if a component with this name is registered.
    pub fn has(&self, component: &str) -> bool {
        self.components.contains_key(component)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over registered component names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|s| s.as_str())
    }

    /// Composes the resolved style for one render request.
    ///
    /// Fragments merge in the fixed order base → size → variant with
    /// last-applied-wins; token references are substituted only after all
    /// merging, so a variant can override a property with a token and still
    /// get it resolved. A `size` that the component doesn't define contributes
    /// nothing (sizes are additive hints); an unknown `variant` is an error
    /// because the caller asked for that name specifically.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::UnknownComponent`] if `component` isn't registered.
    /// - [`ThemeError::UnknownVariant`] if `variant` names an unregistered
    ///   variant of the component.
    /// - [`ThemeError::UnknownToken`] if any fragment references a token
    ///   absent from `table`.
    pub fn compose(
        &self,
        component: &str,
        variant: Option<&str>,
        size: Option<&str>,
        scheme: Option<&str>,
        mode: ColorMode,
        table: &TokenTable,
    ) -> Result<ResolvedStyle, ThemeError> {
        let spec = self.get(component)?;

        let mut rule = spec.base.clone();

        if let Some(size) = size {
            if let Some(fragment) = spec.sizes.get(size) {
                rule.merge(fragment);
            }
        }

        if let Some(variant) = variant {
            let entry =
                spec.variants
                    .get(variant)
                    .ok_or_else(|| ThemeError::UnknownVariant {
                        component: component.to_string(),
                        variant: variant.to_string(),
                    })?;
            rule.merge(&entry.fragment(mode, scheme));
        }

        rule.resolve(table, mode)
    }

    /// Renders a name-sorted diagnostic listing of registered components with
    /// their size and variant names.
    pub fn describe(&self) -> String {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();

        let mut out = String::new();
        for name in names {
            let spec = &self.components[name];
            let sizes: Vec<&str> = spec.size_names().collect();
            let variants: Vec<&str> = spec.variant_names().collect();
            let _ = writeln!(
                out,
                "{}: sizes [{}] variants [{}]",
                name,
                sizes.join(", "),
                variants.join(", ")
            );
        }
        out
    }
}
