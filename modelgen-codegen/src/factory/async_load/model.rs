use modelgen_core::JAVA_NAMING;
use modelgen_schema::{
    AsyncDataLoadInfoProvider, AsyncLoadInfo, Context, MetadataProvider, NestedLink, Table, Target,
};

use super::AsyncLoadNaming;
use crate::{
    error::Result,
    factory::{FieldResolver, FieldSet, ScopeFactory, find_column, find_table},
    scope::{ModelScope, Scope},
};

/// CSV row models for async data load.
///
/// A table entity yields all of its columns. A nested structure yields the
/// root table's columns followed by each linked table's columns, named with
/// the linking column as prefix (`address_id` + `city` -> `addressIdCity`).
pub struct AsyncLoadModelScopeFactory<'a> {
    async_load: &'a AsyncDataLoadInfoProvider,
    naming: AsyncLoadNaming<'a>,
    resolver: FieldResolver<'a>,
}

impl<'a> AsyncLoadModelScopeFactory<'a> {
    pub const TEMPLATE_PATH: &'static str =
        "model/src/main/java/model/dto/csv/asyncLoadModel.java.ftl";

    pub fn new(
        async_load: &'a AsyncDataLoadInfoProvider,
        naming: AsyncLoadNaming<'a>,
        resolver: FieldResolver<'a>,
    ) -> Self {
        Self {
            async_load,
            naming,
            resolver,
        }
    }

    fn scope(&self, context: &Context, info: &AsyncLoadInfo) -> Result<ModelScope> {
        let entity = info.entity_name.as_str();
        let class_name = self.naming.model_class_name(context, entity)?;
        let referrer = format!("async load entity '{}'", entity);
        let mut fields = FieldSet::new(&class_name);

        match self.naming.nested_structures.get(entity) {
            Some(structure) => {
                let root = find_table(context, &structure.root.table_name, &referrer)?;
                self.push_columns(&mut fields, root, None)?;
                let links = &structure.root.nested;
                self.push_links(context, &mut fields, root, links, None, &referrer)?;
            }
            None => {
                let table = find_table(context, entity, &referrer)?;
                self.push_columns(&mut fields, table, None)?;
            }
        }

        let fields = fields.into_fields();
        Ok(ModelScope { class_name, fields })
    }

    fn push_columns(
        &self,
        fields: &mut FieldSet<'_>,
        table: &Table,
        prefix: Option<&str>,
    ) -> Result<()> {
        for column in table.columns() {
            let path = match prefix {
                Some(prefix) => format!("{}_{}", prefix, column.name()),
                None => column.name().to_string(),
            };
            let field = self
                .resolver
                .named_field(JAVA_NAMING.field_name(&path), column)?;
            fields.push(field, &format!("{}.{}", table.name(), column.name()))?;
        }
        Ok(())
    }

    fn push_links(
        &self,
        context: &Context,
        fields: &mut FieldSet<'_>,
        parent: &Table,
        links: &[NestedLink],
        prefix: Option<&str>,
        referrer: &str,
    ) -> Result<()> {
        for link in links {
            find_column(parent, &link.column, referrer)?;
            let table = find_table(context, &link.table_name, referrer)?;
            let path = match prefix {
                Some(prefix) => format!("{}_{}", prefix, link.column),
                None => link.column.clone(),
            };

            self.push_columns(fields, table, Some(&path))?;
            self.push_links(context, fields, table, &link.nested, Some(&path), referrer)?;
        }
        Ok(())
    }
}

impl ScopeFactory for AsyncLoadModelScopeFactory<'_> {
    fn target(&self) -> Target {
        Target::AsyncLoadModel
    }

    fn template_path(&self) -> &'static str {
        Self::TEMPLATE_PATH
    }

    fn create(&self, context: &Context) -> Result<Vec<Scope>> {
        self.async_load
            .find_all()
            .iter()
            .map(|info| self.scope(context, info).map(Scope::from))
            .collect()
    }
}
