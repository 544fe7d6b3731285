//! Placeholder variables and their resolution.
//!
//! This module covers everything between raw `#{name}` tokens and the final
//! strings substituted into a template:
//! - Scanning text for placeholder tokens and their case modifiers
//! - The built-in variables computed for every render
//! - Resolving configured variables that reference each other

pub mod builtins;
pub mod graph;
pub mod placeholder;
pub mod table;

pub use builtins::{BUILTIN_NAMES, RenderTarget, builtin_variables, strip_extension};
pub use graph::{GraphResolution, PendingVariable, resolve_variables};
pub use placeholder::{
    CaseTransform, Placeholder, has_placeholders, scan_placeholders, substitute_tokens,
};
pub use table::VarTable;
