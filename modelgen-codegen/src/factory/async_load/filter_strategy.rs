use modelgen_schema::{AsyncDataLoadInfoProvider, Context, Target};

use super::AsyncLoadNaming;
use crate::{
    error::Result,
    factory::ScopeFactory,
    scope::{FilterStrategyScope, Scope},
};

const FILTER_STRATEGY_SUFFIX: &str = "FilterStrategy";

/// Filter strategies that cap async loads at the configured row limit.
pub struct FilterStrategyScopeFactory<'a> {
    async_load: &'a AsyncDataLoadInfoProvider,
    naming: AsyncLoadNaming<'a>,
}

impl<'a> FilterStrategyScopeFactory<'a> {
    pub const TEMPLATE_PATH: &'static str =
        "rest-api/src/main/java/restapi/filter/filterStrategy.java.ftl";

    pub fn new(async_load: &'a AsyncDataLoadInfoProvider, naming: AsyncLoadNaming<'a>) -> Self {
        Self { async_load, naming }
    }
}

impl ScopeFactory for FilterStrategyScopeFactory<'_> {
    fn target(&self) -> Target {
        Target::FilterStrategy
    }

    fn template_path(&self) -> &'static str {
        Self::TEMPLATE_PATH
    }

    fn create(&self, context: &Context) -> Result<Vec<Scope>> {
        self.async_load
            .tables_with_async_load()
            .into_iter()
            .map(|(entity, limit)| {
                let schema_name = self.naming.schema_name(context, entity)?;
                Ok(Scope::from(FilterStrategyScope {
                    class_name: format!("{}{}", schema_name, FILTER_STRATEGY_SUFFIX),
                    model_class_name: schema_name + self.naming.schema_suffix(entity),
                    limit,
                }))
            })
            .collect()
    }
}
