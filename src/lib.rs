//! Detect keys that are present in a default translation file but missing from
//! the other translation files next to it.

pub mod cli;
pub mod diff;
pub mod formatters;
pub mod loader;
pub mod traversal;
pub mod types;
