//! Declarative generation metadata and the providers that expose it.
//!
//! All metadata lives in one TOML document:
//!
//! ```toml
//! [[partial_update]]
//! name = "birth_date_upd"
//! table = "person"
//! columns = ["birth_date"]
//!
//! [[enum]]
//! name = "person_status"
//! values = [{ code = "ACTIVE", label = "Active" }]
//!
//! [[nested_structure]]
//! name = "person_with_address"
//! root = { table = "person", nested = [{ column = "address_id", table = "address" }] }
//!
//! [async_load]
//! person = 100
//! ```
//!
//! The document is validated as a whole when loaded. Malformed metadata
//! never produces a partially filled provider.

mod async_load;
mod enums;
mod nested;
mod partial_update;

use std::{path::Path, str::FromStr};

pub use async_load::{AsyncDataLoadInfoProvider, AsyncLoadInfo};
pub use enums::{EnumDefinition, EnumProvider, EnumValue};
use indexmap::IndexMap;
pub use nested::{NestedLink, NestedNode, NestedStructure, NestedStructureProvider};
pub use partial_update::{PartialUpdate, PartialUpdateProvider};
use serde::Deserialize;

use crate::{Error, Result, validate::ParseContext};

/// A read-only source of metadata descriptors.
///
/// Descriptors are loaded once when the provider is built; `find_all` always
/// returns the same slice.
pub trait MetadataProvider {
    /// The descriptor type this provider exposes.
    type Descriptor;

    /// All descriptors in declaration order.
    fn find_all(&self) -> &[Self::Descriptor];

    /// Returns true if the provider holds no descriptors.
    fn is_empty(&self) -> bool {
        self.find_all().is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMetadata {
    #[serde(default, rename = "partial_update")]
    partial_updates: Vec<PartialUpdate>,
    #[serde(default, rename = "enum")]
    enums: Vec<EnumDefinition>,
    #[serde(default, rename = "nested_structure")]
    nested_structures: Vec<NestedStructure>,
    #[serde(default)]
    async_load: IndexMap<String, u32>,
}

/// All metadata providers for one generation run.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub partial_updates: PartialUpdateProvider,
    pub enums: EnumProvider,
    pub nested_structures: NestedStructureProvider,
    pub async_load: AsyncDataLoadInfoProvider,
}

impl FromStr for Metadata {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_metadata(s, "metadata.toml")
    }
}

impl Metadata {
    /// Parse metadata from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_metadata(&content, &path.display().to_string())
    }

    /// Parse metadata from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_metadata(content, filename)
    }
}

fn parse_metadata(content: &str, filename: &str) -> Result<Metadata> {
    let ctx = ParseContext::new(content, filename);
    let raw: RawMetadata =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    Ok(Metadata {
        partial_updates: PartialUpdateProvider::load(raw.partial_updates, &ctx)?,
        enums: EnumProvider::load(raw.enums, &ctx)?,
        nested_structures: NestedStructureProvider::load(raw.nested_structures, &ctx)?,
        async_load: AsyncDataLoadInfoProvider::load(raw.async_load, &ctx)?,
    })
}
