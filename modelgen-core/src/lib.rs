//! Core utilities and types for the modelgen Java model generator.
//!
//! This crate provides naming transforms and generated-file handling used
//! across the modelgen crates.

mod file;
mod naming;
mod utils;

// File operations
pub use file::{File, FileRules, GENERATED_HEADER, GeneratedFile, WriteResult};
// Naming
pub use naming::{JAVA_NAMING, NamingConvention};
// String utilities
pub use utils::{camel_to_underscore, to_camel_case, to_pascal_case};
