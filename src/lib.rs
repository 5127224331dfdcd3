//! Semantic design tokens and style-variant resolution.
//!
//! `undertone` resolves abstract style tokens (`t_text`, `t_background`, ...)
//! into concrete values depending on a light/dark color mode, and composes
//! per-component styles from base rules, size fragments and variants. It is
//! the theme layer of a design system, without the rendering.
//!
//! # Quick start
//!
//! ```rust
//! use undertone::{ColorMode, ComponentStyle, StyleRule, Theme};
//!
//! let theme = Theme::builder()
//!     .token_dark("t_text", "#444", "whiteAlpha.800")
//!     .token("t_background", "#ffffff")
//!     .component(
//!         "Button",
//!         ComponentStyle::new(StyleRule::new().token("color", "t_text"))
//!             .size("xl", StyleRule::new().prop("h", "60px"))
//!             .variant("outline", StyleRule::new().prop("border-width", "2px")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let style = theme
//!     .compose("Button", Some("outline"), Some("xl"), None, ColorMode::Dark)
//!     .unwrap();
//!
//! assert_eq!(style.value("color"), Some("whiteAlpha.800"));
//! assert_eq!(style.value("h"), Some("60px"));
//! assert_eq!(style.value("border-width"), Some("2px"));
//! ```
//!
//! # Design
//!
//! - **Tokens are flat.** A token maps to a default value and an optional dark
//!   override; tokens never reference other tokens, so resolution cannot cycle.
//!   Dark mode without an override inherits the light default.
//! - **Merge first, resolve last.** `compose` merges base → size → variant with
//!   last-applied-wins, then substitutes token references in one final pass, so
//!   a late override can still name a token. Literal values are never
//!   reinterpreted as token names.
//! - **Mode is an argument.** Nothing in the resolution path reads ambient
//!   state; [`detect_color_mode`] exists for hosts that want to follow the OS
//!   setting, but `resolve` and `compose` take the mode explicitly.
//!
//! Everything is immutable after construction and `Send + Sync`; concurrent
//! composition needs no locking and every call returns an owned
//! [`ResolvedStyle`].

mod component;
mod error;
mod mode;
pub mod presets;
mod style;
mod theme;
mod token;

pub use component::{ComponentRegistry, ComponentStyle, Variant, VariantFn};
pub use error::ThemeError;
pub use mode::{detect_color_mode, set_mode_detector, ColorMode};
pub use style::{ResolvedStyle, ResolvedValue, StyleRule, StyleValue};
pub use theme::{Theme, ThemeBuilder};
pub use token::{TokenDef, TokenTable};
