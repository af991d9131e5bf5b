//! Input documents for the modelgen Java model generator.
//!
//! Parses and validates the three TOML inputs of a generation run:
//!
//! - `modelgen.toml` ([`Config`]) - where inputs live and what to generate
//! - the schema snapshot ([`Context`]) - tables and columns
//! - the metadata document ([`Metadata`]) - partial updates, enums, nested
//!   structures and async-load limits
//!
//! Every problem is reported as a [`miette`] diagnostic pointing into the
//! offending file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod context;
mod error;
mod metadata;
mod target;
mod validate;

pub use config::{Config, ConfigFile, GeneratorConfig};
pub use context::{Column, Context, Table};
pub use error::{Error, Result, SourceContext};
pub use metadata::{
    AsyncDataLoadInfoProvider, AsyncLoadInfo, EnumDefinition, EnumProvider, EnumValue, Metadata,
    MetadataProvider, NestedLink, NestedNode, NestedStructure, NestedStructureProvider,
    PartialUpdate, PartialUpdateProvider,
};
pub use target::Target;
