use modelgen_core::to_pascal_case;
use modelgen_schema::{Context, MetadataProvider, PartialUpdate, PartialUpdateProvider, Target};

use super::{FieldResolver, FieldSet, ScopeFactory, find_column, find_table, schema_name};
use crate::{
    error::{GenerationError, Result},
    scope::{ModelScope, Scope},
};

/// DTOs that update a subset of a table's columns.
pub struct PartialUpdateEntityScopeFactory<'a> {
    partial_updates: &'a PartialUpdateProvider,
    resolver: FieldResolver<'a>,
}

impl<'a> PartialUpdateEntityScopeFactory<'a> {
    pub const TEMPLATE_PATH: &'static str = "model/src/main/java/model/dto/dto.java.ftl";

    pub fn new(partial_updates: &'a PartialUpdateProvider, resolver: FieldResolver<'a>) -> Self {
        Self {
            partial_updates,
            resolver,
        }
    }

    fn scope(&self, context: &Context, update: &PartialUpdate) -> Result<ModelScope> {
        let referrer = format!("partial update '{}'", update.name);
        let table = find_table(context, &update.table_name, &referrer)?;
        let primary_key =
            table
                .primary_key_name()
                .ok_or_else(|| GenerationError::MissingPrimaryKey {
                    table: table.name().to_string(),
                    referrer: referrer.clone(),
                })?;

        let mut columns = vec![primary_key];
        for column in &update.columns {
            if !columns.contains(&column.as_str()) {
                columns.push(column.as_str());
            }
        }

        let class_name = schema_name(table.name()) + &to_pascal_case(&update.name);
        let mut fields = FieldSet::new(&class_name);
        for name in columns {
            let column = find_column(table, name, &referrer)?;
            fields.push(self.resolver.field(column)?, column.name())?;
        }
        let fields = fields.into_fields();

        Ok(ModelScope { class_name, fields })
    }
}

impl ScopeFactory for PartialUpdateEntityScopeFactory<'_> {
    fn target(&self) -> Target {
        Target::PartialUpdate
    }

    fn template_path(&self) -> &'static str {
        Self::TEMPLATE_PATH
    }

    fn create(&self, context: &Context) -> Result<Vec<Scope>> {
        self.partial_updates
            .find_all()
            .iter()
            .map(|update| self.scope(context, update).map(Scope::from))
            .collect()
    }
}
