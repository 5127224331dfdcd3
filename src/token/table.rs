//! Token table construction and mode-aware lookup.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::mode::ColorMode;

/// A semantic token definition.
///
/// The concrete values are opaque to this crate: a color string, a length,
/// whatever the consuming renderer understands. `default` is
/// always present; `dark` is optional and, when absent, dark mode inherits the
/// default value.
///
/// Definitions derive serde so token sets can be loaded from static JSON:
///
/// ```rust
/// use undertone::TokenDef;
///
/// let defs: Vec<TokenDef> = serde_json::from_str(
///     r##"[{"name": "t_text", "default": "#444", "dark": "whiteAlpha.800"},
///         {"name": "t_background", "default": "#ffffff"}]"##,
/// ).unwrap();
/// assert_eq!(defs[1].dark, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDef {
    /// Token name used in style-rule references (e.g. `t_text`).
    pub name: String,
    /// Value used in light mode, and in dark mode when `dark` is absent.
    pub default: String,
    /// Dark-mode override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

impl TokenDef {
    /// Creates a token with no dark override.
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            dark: None,
        }
    }

    /// Creates a token with distinct light and dark values.
    pub fn with_dark(
        name: impl Into<String>,
        default: impl Into<String>,
        dark: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            dark: Some(dark.into()),
        }
    }

    /// Returns the concrete value for the given mode.
    ///
    /// Dark mode with no override inherits the default. This is the documented
    /// fallback policy, not an omission.
    pub fn value_for(&self, mode: ColorMode) -> &str {
        match mode {
            ColorMode::Dark => self.dark.as_deref().unwrap_or(&self.default),
            ColorMode::Light => &self.default,
        }
    }
}

/// An immutable registry of semantic tokens.
///
/// Built once from a list of definitions and never mutated afterwards, so it
/// can be shared freely across rendering contexts without locking.
///
/// # Example
///
/// ```rust
/// use undertone::{ColorMode, TokenDef, TokenTable};
///
/// let table = TokenTable::build([
///     TokenDef::with_dark("t_text", "#444", "whiteAlpha.800"),
///     TokenDef::new("t_background", "#ffffff"),
/// ]).unwrap();
///
/// assert_eq!(table.resolve("t_text", ColorMode::Dark).unwrap(), "whiteAlpha.800");
/// // No dark override: falls back to the default.
/// assert_eq!(table.resolve("t_background", ColorMode::Dark).unwrap(), "#ffffff");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    tokens: HashMap<String, TokenDef>,
}

impl TokenTable {
    /// Builds a table from token definitions.
    ///
    /// Construction is all-or-nothing: on error no partially-filled table is
    /// observable.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateToken`] if two definitions share a name.
    pub fn build(defs: impl IntoIterator<Item = TokenDef>) -> Result<Self, ThemeError> {
        let mut tokens = HashMap::new();
        for def in defs {
            let name = def.name.clone();
            if tokens.insert(name.clone(), def).is_some() {
                return Err(ThemeError::DuplicateToken { name });
            }
        }
        Ok(Self { tokens })
    }

    /// Looks up a token definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] if the name isn't registered.
    pub fn get(&self, name: &str) -> Result<&TokenDef, ThemeError> {
        self.tokens.get(name).ok_or_else(|| ThemeError::UnknownToken {
            name: name.to_string(),
        })
    }

    /// Resolves a token to its concrete value under the given mode.
    ///
    /// Deterministic: the table is immutable, so identical arguments always
    /// yield identical results.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownToken`] if the name isn't registered.
    pub fn resolve(&self, name: &str, mode: ColorMode) -> Result<&str, ThemeError> {
        Ok(self.get(name)?.value_for(mode))
    }

    /// Returns true if a token with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over registered token names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(|s| s.as_str())
    }

    /// Renders a name-sorted diagnostic listing of every token.
    ///
    /// One line per token showing the light and dark values. This is the
    /// explicit counterpart to dumping the theme at load time; call it from
    /// tests or debug commands as needed.
    pub fn describe(&self) -> String {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();

        let mut out = String::new();
        for name in names {
            let def = &self.tokens[name];
            match &def.dark {
                Some(dark) => {
                    let _ = writeln!(out, "{}: {} (dark: {})", name, def.default, dark);
                }
                None => {
                    let _ = writeln!(out, "{}: {}", name, def.default);
                }
            }
        }
        out
    }
}
