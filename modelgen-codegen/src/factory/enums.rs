use modelgen_core::JAVA_NAMING;
use modelgen_schema::{Context, EnumDefinition, EnumProvider, MetadataProvider, Target};

use super::ScopeFactory;
use crate::{
    error::Result,
    render::java_package,
    scope::{EnumConstant, EnumScope, Scope},
};

/// Java enums for database enum types.
pub struct EnumScopeFactory<'a> {
    enums: &'a EnumProvider,
}

impl<'a> EnumScopeFactory<'a> {
    pub const TEMPLATE_PATH: &'static str =
        "model/src/main/java/model/dto/enumeration/enum.java.ftl";

    pub fn new(enums: &'a EnumProvider) -> Self {
        Self { enums }
    }

    /// Fully qualified class of the enum generated for a SQL enum type, as
    /// referenced from fields in other packages.
    pub fn qualified_class_name(sql_name: &str) -> String {
        let class_name = JAVA_NAMING.type_name(sql_name);
        match java_package(Self::TEMPLATE_PATH) {
            Some(package) => format!("{}.{}", package, class_name),
            None => class_name,
        }
    }

    fn scope(definition: &EnumDefinition) -> EnumScope {
        EnumScope {
            class_name: JAVA_NAMING.type_name(&definition.name),
            constants: definition
                .values
                .iter()
                .map(|value| EnumConstant {
                    code: value.code.clone(),
                    label: value.label().to_string(),
                })
                .collect(),
        }
    }
}

impl ScopeFactory for EnumScopeFactory<'_> {
    fn target(&self) -> Target {
        Target::Enum
    }

    fn template_path(&self) -> &'static str {
        Self::TEMPLATE_PATH
    }

    fn create(&self, _context: &Context) -> Result<Vec<Scope>> {
        Ok(self
            .enums
            .find_all()
            .iter()
            .map(|definition| Self::scope(definition).into())
            .collect())
    }
}
