use std::collections::HashMap;

use modelgen_core::JAVA_NAMING;
use modelgen_schema::{Column, EnumProvider};

use super::EnumScopeFactory;
use crate::{
    constraints::{CompositeConstraintProvider, ConstraintProvider},
    error::{GenerationError, Result},
    scope::Field,
    type_converter::{JavaType, TypeConverter, split_array},
};

/// Turns columns into fields: type resolution plus constraints.
#[derive(Clone, Copy)]
pub struct FieldResolver<'a> {
    converter: &'a dyn TypeConverter,
    constraints: &'a CompositeConstraintProvider,
    enums: &'a EnumProvider,
}

impl<'a> FieldResolver<'a> {
    pub fn new(
        converter: &'a dyn TypeConverter,
        constraints: &'a CompositeConstraintProvider,
        enums: &'a EnumProvider,
    ) -> Self {
        Self {
            converter,
            constraints,
            enums,
        }
    }

    /// Java type of a column. Registered enum types resolve to their
    /// qualified enum class; everything else goes through the type converter.
    pub fn resolve_type(&self, column: &Column) -> Result<JavaType> {
        let (element, collection) = split_array(column.sql_type());
        match self.enums.find(element) {
            Some(definition) => Ok(JavaType {
                class_name: EnumScopeFactory::qualified_class_name(&definition.name),
                collection,
            }),
            None => self.converter.convert(column),
        }
    }

    /// Field named after the column.
    pub fn field(&self, column: &Column) -> Result<Field> {
        self.named_field(JAVA_NAMING.field_name(column.name()), column)
    }

    /// Field with an explicit name, typed and constrained by the column.
    pub fn named_field(&self, name: String, column: &Column) -> Result<Field> {
        let java_type = self.resolve_type(column)?;
        let constraints = self
            .constraints
            .constraints_for(column.sql_type(), &java_type.class_name);

        Ok(Field {
            name,
            type_name: java_type.type_string(),
            constraints,
        })
    }
}

/// Ordered fields of one class, rejecting identifier collisions.
pub(crate) struct FieldSet<'s> {
    class_name: &'s str,
    fields: Vec<Field>,
    sources: HashMap<String, String>,
}

impl<'s> FieldSet<'s> {
    pub fn new(class_name: &'s str) -> Self {
        Self {
            class_name,
            fields: Vec::new(),
            sources: HashMap::new(),
        }
    }

    /// Append a field produced from `source` (a column path used in errors).
    pub fn push(&mut self, field: Field, source: &str) -> Result<()> {
        if let Some(first) = self.sources.get(&field.name) {
            return Err(GenerationError::DuplicateField {
                class_name: self.class_name.to_string(),
                field: field.name,
                first: first.clone(),
                second: source.to_string(),
            });
        }
        self.sources.insert(field.name.clone(), source.to_string());
        self.fields.push(field);
        Ok(())
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use modelgen_schema::Metadata;

    use super::*;
    use crate::JavaTypeConverter;

    fn with_resolver(metadata: &str, f: impl FnOnce(FieldResolver<'_>)) {
        let metadata: Metadata = metadata.parse().unwrap();
        let constraints = CompositeConstraintProvider::new();
        f(FieldResolver::new(
            &JavaTypeConverter,
            &constraints,
            &metadata.enums,
        ));
    }

    #[test]
    fn test_date_field() {
        with_resolver("", |resolver| {
            let field = resolver.field(&Column::new("birth_date", "date")).unwrap();

            assert_eq!(field.name, "birthDate");
            assert_eq!(field.type_name, "java.time.LocalDate");
            assert_eq!(field.constraints.len(), 1);
        });
    }

    #[test]
    fn test_reserved_field_name_escaped() {
        with_resolver("", |resolver| {
            let field = resolver.field(&Column::new("default", "text")).unwrap();
            assert_eq!(field.name, "default_");
        });
    }

    #[test]
    fn test_enum_column_resolves_to_enum_class() {
        let metadata = r#"
            [[enum]]
            name = "person_status"
            values = [{ code = "ACTIVE" }]
        "#;
        with_resolver(metadata, |resolver| {
            let field = resolver.field(&Column::new("status", "person_status")).unwrap();
            assert_eq!(field.type_name, "model.dto.enumeration.PersonStatus");
            assert!(field.constraints.is_empty());

            let field = resolver.field(&Column::new("history", "_person_status")).unwrap();
            assert_eq!(
                field.type_name,
                "java.util.List<model.dto.enumeration.PersonStatus>"
            );
        });
    }

    #[test]
    fn test_field_set_rejects_collisions() {
        let mut set = FieldSet::new("PersonModel");
        let field = |name: &str| Field {
            name: name.to_string(),
            type_name: "java.lang.String".to_string(),
            constraints: Vec::new(),
        };

        set.push(field("addressLine"), "address_line").unwrap();
        let err = set.push(field("addressLine"), "addressLine").unwrap_err();

        assert!(matches!(
            err,
            GenerationError::DuplicateField { ref first, ref second, .. }
                if first == "address_line" && second == "addressLine"
        ));
    }
}
