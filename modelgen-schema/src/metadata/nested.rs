use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::MetadataProvider;
use crate::{Result, validate::ParseContext};

/// An entity composed from several related tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NestedStructure {
    /// Entity name.
    pub name: String,
    /// Root table and its nested children.
    pub root: NestedNode,
}

/// A table inside a nested structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NestedNode {
    #[serde(rename = "table")]
    pub table_name: String,
    #[serde(default)]
    pub nested: Vec<NestedLink>,
}

/// A child table reached through a column of its parent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NestedLink {
    /// Column of the parent table that links to the child.
    pub column: String,
    #[serde(rename = "table")]
    pub table_name: String,
    #[serde(default)]
    pub nested: Vec<NestedLink>,
}

fn validate_links(links: &[NestedLink], ctx: &ParseContext) -> Result<()> {
    ctx.ensure_unique(links.iter().map(|l| l.column.as_str()), "nested column")?;
    for link in links {
        ctx.validate_name(&link.column, "nested column")?;
        ctx.validate_name(&link.table_name, "nested table")?;
        validate_links(&link.nested, &ctx.push(&link.column))?;
    }
    Ok(())
}

/// Provides nested-structure definitions keyed by entity name.
#[derive(Debug, Clone, Default)]
pub struct NestedStructureProvider {
    structures: Vec<NestedStructure>,
    by_name: HashMap<String, usize>,
}

impl NestedStructureProvider {
    pub(crate) fn load(structures: Vec<NestedStructure>, ctx: &ParseContext) -> Result<Self> {
        ctx.ensure_unique(
            structures.iter().map(|s| s.name.as_str()),
            "nested structure",
        )?;

        for structure in &structures {
            ctx.validate_name(&structure.name, "nested structure")?;
            let nested_ctx = ctx.push(&structure.name);
            nested_ctx.validate_name(&structure.root.table_name, "root table")?;
            validate_links(&structure.root.nested, &nested_ctx)?;
        }

        let by_name = structures
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        Ok(Self {
            structures,
            by_name,
        })
    }

    /// Find a nested structure by entity name.
    pub fn get(&self, name: &str) -> Option<&NestedStructure> {
        self.by_name.get(name).map(|&i| &self.structures[i])
    }

    /// Returns true if `name` is a nested structure.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All structures keyed by entity name.
    pub fn as_map(&self) -> HashMap<&str, &NestedStructure> {
        self.structures
            .iter()
            .map(|s| (s.name.as_str(), s))
            .collect()
    }
}

impl MetadataProvider for NestedStructureProvider {
    type Descriptor = NestedStructure;

    fn find_all(&self) -> &[NestedStructure] {
        &self.structures
    }
}
