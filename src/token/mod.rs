//! Semantic token definitions and the token table.
//!
//! This module provides:
//!
//! - [`TokenDef`]: A named token with a default value and optional dark override
//! - [`TokenTable`]: An immutable registry of tokens with mode-aware resolution

mod table;

pub use table::{TokenDef, TokenTable};
