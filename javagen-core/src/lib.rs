//! Core utilities for the javagen code generator.
//!
//! This crate provides the stateless formatting primitives and naming
//! helpers used by every other javagen crate.

pub mod formatting;
mod indent;
mod utils;

pub use indent::Indent;
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_screaming_snake_case, to_snake_case};
