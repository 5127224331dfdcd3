//! Style rules and resolved styles.
//!
//! This module provides:
//!
//! - [`StyleValue`]: A property value, either literal, token reference, or nested block
//! - [`StyleRule`]: An ordered property map with last-applied-wins merging
//! - [`ResolvedStyle`] / [`ResolvedValue`]: The fully concrete, token-free output
//!
//! Style rules support one level of nesting for pseudo-state blocks such as
//! `_hover` or `_focus`; nested blocks merge property-by-property with the same
//! last-wins rule, while any other collision replaces the value wholesale.

mod resolved;
mod rule;

pub use resolved::{ResolvedStyle, ResolvedValue};
pub use rule::{StyleRule, StyleValue};
