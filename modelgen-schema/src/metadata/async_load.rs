use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use super::MetadataProvider;
use crate::{Result, validate::ParseContext};

/// Async data load settings for one entity (a table or a nested structure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsyncLoadInfo {
    pub entity_name: String,
    /// Maximum number of rows accepted by one async load.
    pub limit: u32,
}

/// Provides the entities that support async data load, ordered by name.
#[derive(Debug, Clone, Default)]
pub struct AsyncDataLoadInfoProvider {
    entries: Vec<AsyncLoadInfo>,
}

impl AsyncDataLoadInfoProvider {
    pub(crate) fn load(limits: IndexMap<String, u32>, ctx: &ParseContext) -> Result<Self> {
        let ctx = ctx.push("async_load");
        let mut entries = Vec::with_capacity(limits.len());

        for (entity_name, limit) in limits {
            ctx.validate_name(&entity_name, "entity")?;
            if limit == 0 {
                return Err(ctx.source_context().validation_error(format!(
                    "async load limit for '{}' must be greater than zero",
                    entity_name
                )));
            }
            entries.push(AsyncLoadInfo { entity_name, limit });
        }

        entries.sort_by(|a, b| a.entity_name.cmp(&b.entity_name));
        Ok(Self { entries })
    }

    /// Entity name to row limit, ordered by entity name.
    pub fn tables_with_async_load(&self) -> BTreeMap<&str, u32> {
        self.entries
            .iter()
            .map(|e| (e.entity_name.as_str(), e.limit))
            .collect()
    }

    /// Row limit for an entity, if it supports async load.
    pub fn limit(&self, entity_name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.entity_name == entity_name)
            .map(|e| e.limit)
    }
}

impl MetadataProvider for AsyncDataLoadInfoProvider {
    type Descriptor = AsyncLoadInfo;

    fn find_all(&self) -> &[AsyncLoadInfo] {
        &self.entries
    }
}
