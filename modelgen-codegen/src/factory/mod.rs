//! Scope factories.
//!
//! One factory per [`Target`]. Each factory walks its metadata descriptors,
//! resolves them against the schema [`Context`] and produces one [`Scope`]
//! per descriptor. Any unresolved table, column or type aborts the run.

mod async_load;
mod enums;
mod fields;
mod partial_update;

pub use async_load::{AsyncLoadModelScopeFactory, AsyncLoadNaming, FilterStrategyScopeFactory};
pub use enums::EnumScopeFactory;
pub use fields::FieldResolver;
use fields::FieldSet;
pub use partial_update::PartialUpdateEntityScopeFactory;

use modelgen_core::JAVA_NAMING;
use modelgen_schema::{Column, Context, Metadata, Table, Target};

use crate::{
    constraints::CompositeConstraintProvider,
    error::{GenerationError, Result},
    scope::Scope,
    type_converter::TypeConverter,
};

/// Produces the scopes of one generation target.
pub trait ScopeFactory {
    /// The target this factory generates.
    fn target(&self) -> Target;

    /// Template the scopes are rendered with. Generated files are placed
    /// next to it.
    fn template_path(&self) -> &'static str;

    /// Build every scope for the given schema.
    fn create(&self, context: &Context) -> Result<Vec<Scope>>;
}

/// Shared inputs handed to every factory.
#[derive(Clone, Copy)]
pub struct FactoryDeps<'a> {
    pub metadata: &'a Metadata,
    pub converter: &'a dyn TypeConverter,
    pub constraints: &'a CompositeConstraintProvider,
}

impl<'a> FactoryDeps<'a> {
    pub fn resolver(&self) -> FieldResolver<'a> {
        let metadata = self.metadata;
        FieldResolver::new(self.converter, self.constraints, &metadata.enums)
    }

    /// Instantiate the factory for a target.
    pub fn factory(&self, target: Target) -> Box<dyn ScopeFactory + 'a> {
        let metadata = self.metadata;
        match target {
            Target::PartialUpdate => Box::new(PartialUpdateEntityScopeFactory::new(
                &metadata.partial_updates,
                self.resolver(),
            )),
            Target::AsyncLoadModel => Box::new(AsyncLoadModelScopeFactory::new(
                &metadata.async_load,
                AsyncLoadNaming::new(&metadata.nested_structures),
                self.resolver(),
            )),
            Target::FilterStrategy => Box::new(FilterStrategyScopeFactory::new(
                &metadata.async_load,
                AsyncLoadNaming::new(&metadata.nested_structures),
            )),
            Target::Enum => Box::new(EnumScopeFactory::new(&metadata.enums)),
        }
    }
}

pub(crate) fn find_table<'c>(context: &'c Context, name: &str, referrer: &str) -> Result<&'c Table> {
    context
        .table(name)
        .ok_or_else(|| GenerationError::MissingTable {
            table: name.to_string(),
            referrer: referrer.to_string(),
        })
}

pub(crate) fn find_column<'t>(table: &'t Table, name: &str, referrer: &str) -> Result<&'t Column> {
    table
        .column(name)
        .ok_or_else(|| GenerationError::MissingColumn {
            table: table.name().to_string(),
            column: name.to_string(),
            referrer: referrer.to_string(),
        })
}

/// Class name stem for a table: `test_schema` -> `TestSchema`.
pub fn schema_name(table_name: &str) -> String {
    JAVA_NAMING.type_name(table_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_name() {
        assert_eq!(schema_name("test_schema"), "TestSchema");
        assert_eq!(schema_name("person"), "Person");
    }

    #[test]
    fn test_factory_dispatch_covers_every_target() {
        let metadata = Metadata::default();
        let constraints = CompositeConstraintProvider::new();
        let deps = FactoryDeps {
            metadata: &metadata,
            converter: &crate::JavaTypeConverter,
            constraints: &constraints,
        };

        for target in Target::ALL {
            assert_eq!(deps.factory(target).target(), target);
        }
        assert_eq!(
            deps.factory(Target::AsyncLoadModel).template_path(),
            AsyncLoadModelScopeFactory::TEMPLATE_PATH
        );
        assert_eq!(
            deps.factory(Target::FilterStrategy).template_path(),
            FilterStrategyScopeFactory::TEMPLATE_PATH
        );
    }
}
