//! The theme façade: token table plus component registry.

use crate::component::{ComponentRegistry, ComponentStyle};
use crate::error::ThemeError;
use crate::mode::ColorMode;
use crate::style::ResolvedStyle;
use crate::token::{TokenDef, TokenTable};

/// A complete theme: semantic tokens and per-component style specs.
///
/// Immutable once built; share it freely across rendering contexts. Mode is
/// passed to every resolution call rather than stored, so one theme serves
/// light and dark rendering simultaneously.
///
/// # Example
///
/// ```rust
/// use undertone::{ColorMode, ComponentStyle, StyleRule, Theme};
///
/// let theme = Theme::builder()
///     .token_dark("t_text", "#444", "whiteAlpha.800")
///     .token("t_background", "#ffffff")
///     .component(
///         "Link",
///         ComponentStyle::new(StyleRule::new().token("color", "t_text")),
///     )
///     .build()
///     .unwrap();
///
/// let style = theme.compose("Link", None, None, None, ColorMode::Dark).unwrap();
/// assert_eq!(style.value("color"), Some("whiteAlpha.800"));
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    tokens: TokenTable,
    components: ComponentRegistry,
}

impl Theme {
    /// Starts an empty theme builder.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Creates a theme from pre-built parts.
    pub fn from_parts(tokens: TokenTable, components: ComponentRegistry) -> Self {
        Self { tokens, components }
    }

    /// Returns the token table.
    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Returns the component registry.
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Resolves a semantic token under the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] for an unregistered name.
    pub fn resolve(&self, token: &str, mode: ColorMode) -> Result<&str, ThemeError> {
        self.tokens.resolve(token, mode)
    }

    /// Composes the resolved style for one component render request.
    ///
    /// See [`ComponentRegistry::compose`] for merge order and error cases.
    pub fn compose(
        &self,
        component: &str,
        variant: Option<&str>,
        size: Option<&str>,
        scheme: Option<&str>,
        mode: ColorMode,
    ) -> Result<ResolvedStyle, ThemeError> {
        self.components
            .compose(component, variant, size, scheme, mode, &self.tokens)
    }

    /// Renders a diagnostic listing of tokens and components.
    pub fn describe(&self) -> String {
        format!("{}{}", self.tokens.describe(), self.components.describe())
    }
}

/// Fluent builder for [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    defs: Vec<TokenDef>,
    components: ComponentRegistry,
}

impl ThemeBuilder {
    /// Adds a token with no dark override.
    pub fn token(mut self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.defs.push(TokenDef::new(name, default));
        self
    }

    /// Adds a token with distinct light and dark values.
    pub fn token_dark(
        mut self,
        name: impl Into<String>,
        default: impl Into<String>,
        dark: impl Into<String>,
    ) -> Self {
        self.defs.push(TokenDef::with_dark(name, default, dark));
        self
    }

    /// Adds a batch of token definitions, e.g. deserialized from JSON.
    pub fn tokens(mut self, defs: impl IntoIterator<Item = TokenDef>) -> Self {
        self.defs.extend(defs);
        self
    }

    /// Registers a component spec.
    pub fn component(mut self, name: impl Into<String>, spec: ComponentStyle) -> Self {
        self.components = self.components.add(name, spec);
        self
    }

    /// Builds the theme.
    ///
    /// All-or-nothing: on failure nothing partially constructed escapes.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateToken`] if two tokens share a name.
    pub fn build(self) -> Result<Theme, ThemeError> {
        Ok(Theme {
            tokens: TokenTable::build(self.defs)?,
            components: self.components,
        })
    }
}
