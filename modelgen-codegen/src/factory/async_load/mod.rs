//! Async data load: CSV models and their filter strategies.
//!
//! An async-load entity is either a plain table or a nested structure. The
//! two are told apart by the nested structure metadata, and the class names
//! follow from that choice.

mod filter_strategy;
mod model;

pub use filter_strategy::FilterStrategyScopeFactory;
pub use model::AsyncLoadModelScopeFactory;
use modelgen_core::JAVA_NAMING;
use modelgen_schema::{Context, NestedStructureProvider};

use super::{find_table, schema_name};
use crate::error::{GenerationError, Result};

const NESTED_SUFFIX: &str = "NestedCsv";
const MODEL_SUFFIX: &str = "Model";

/// Class naming shared by the async-load factories.
#[derive(Debug, Clone, Copy)]
pub struct AsyncLoadNaming<'a> {
    nested_structures: &'a NestedStructureProvider,
}

impl<'a> AsyncLoadNaming<'a> {
    pub fn new(nested_structures: &'a NestedStructureProvider) -> Self {
        Self { nested_structures }
    }

    /// Class name stem of an entity.
    ///
    /// The backing table (the root table for nested structures) must exist.
    pub fn schema_name(&self, context: &Context, entity: &str) -> Result<String> {
        let referrer = format!("async load entity '{}'", entity);
        match self.nested_structures.get(entity) {
            Some(structure) => {
                find_table(context, &structure.root.table_name, &referrer)?;
                Ok(JAVA_NAMING.type_name(entity))
            }
            None => {
                let table = context
                    .table(entity)
                    .ok_or_else(|| GenerationError::MissingEntity {
                        entity: entity.to_string(),
                    })?;
                Ok(schema_name(table.name()))
            }
        }
    }

    /// Class name suffix of the entity's model.
    pub fn schema_suffix(&self, entity: &str) -> &'static str {
        if self.nested_structures.contains(entity) {
            NESTED_SUFFIX
        } else {
            MODEL_SUFFIX
        }
    }

    /// Full model class name of an entity.
    pub fn model_class_name(&self, context: &Context, entity: &str) -> Result<String> {
        Ok(self.schema_name(context, entity)? + self.schema_suffix(entity))
    }
}
