//! Per-component style specifications and composition.
//!
//! This module provides:
//!
//! - [`Variant`]: A static fragment or a mode-dependent variant function
//! - [`ComponentStyle`]: Base rule plus size and variant fragments
//! - [`ComponentRegistry`]: Registration and the `compose` entry point

mod registry;
mod spec;

pub use registry::ComponentRegistry;
pub use spec::{ComponentStyle, Variant, VariantFn};
