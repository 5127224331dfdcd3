//! Theme resolution errors.

/// Error returned when building or resolving a theme fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Two token definitions share the same name.
    ///
    /// Raised at table construction time; indicates a static configuration
    /// defect and aborts the build entirely.
    DuplicateToken { name: String },
    /// A style rule references a token that doesn't exist in the table.
    UnknownToken { name: String },
    /// A style was requested for a component that was never registered.
    UnknownComponent { component: String },
    /// A variant was requested that isn't registered for the component.
    UnknownVariant { component: String, variant: String },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::DuplicateToken { name } => {
                write!(f, "duplicate token definition '{}'", name)
            }
            ThemeError::UnknownToken { name } => {
                write!(f, "reference to unknown token '{}'", name)
            }
            ThemeError::UnknownComponent { component } => {
                write!(f, "unknown component '{}'", component)
            }
            ThemeError::UnknownVariant { component, variant } => {
                write!(
                    f,
                    "component '{}' has no variant '{}'",
                    component, variant
                )
            }
        }
    }
}

impl std::error::Error for ThemeError {}
