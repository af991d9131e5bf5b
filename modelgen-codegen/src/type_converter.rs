//! SQL column type to Java type conversion.

use modelgen_schema::Column;

use crate::error::{GenerationError, Result};

/// Java class names the generator attaches behaviour to.
pub mod java {
    pub const LOCAL_DATE: &str = "java.time.LocalDate";
    pub const LOCAL_DATE_TIME: &str = "java.time.LocalDateTime";
    pub const LOCAL_TIME: &str = "java.time.LocalTime";
    pub const FILE: &str = "com.epam.digital.data.platform.model.core.kafka.File";
    pub const LIST: &str = "java.util.List";
}

/// A resolved Java type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    /// Fully qualified element class.
    pub class_name: String,
    /// Column holds an array of `class_name`.
    pub collection: bool,
}

impl JavaType {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            collection: false,
        }
    }

    pub fn collection_of(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            collection: true,
        }
    }

    /// The type as written in a field declaration.
    pub fn type_string(&self) -> String {
        if self.collection {
            format!("{}<{}>", java::LIST, self.class_name)
        } else {
            self.class_name.clone()
        }
    }
}

/// Split an array SQL type into its element type.
///
/// Both the internal (`_int4`) and the declared (`int4[]`) spellings are
/// recognised.
pub fn split_array(sql_type: &str) -> (&str, bool) {
    let sql_type = sql_type.trim();
    if let Some(element) = sql_type.strip_suffix("[]") {
        (element.trim_end(), true)
    } else if let Some(element) = sql_type.strip_prefix('_') {
        (element, true)
    } else {
        (sql_type, false)
    }
}

/// Maps a column to the Java type of its field.
pub trait TypeConverter: Send + Sync {
    /// Resolve the column's SQL type. Unknown types are an error.
    fn convert(&self, column: &Column) -> Result<JavaType>;
}

/// PostgreSQL to Java mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeConverter;

impl JavaTypeConverter {
    /// Look up a scalar SQL type, ignoring case.
    pub fn map_sql_type(sql_type: &str) -> Option<&'static str> {
        let class_name = match sql_type.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => "java.lang.Boolean",
            "int2" | "smallint" | "smallserial" => "java.lang.Short",
            "int4" | "int" | "integer" | "serial" => "java.lang.Integer",
            "int8" | "bigint" | "bigserial" => "java.lang.Long",
            "float4" | "real" => "java.lang.Float",
            "float8" | "double precision" => "java.lang.Double",
            "numeric" | "decimal" | "money" => "java.math.BigDecimal",
            "text" | "varchar" | "character varying" | "char" | "character" | "bpchar"
            | "citext" | "name" => "java.lang.String",
            "uuid" => "java.util.UUID",
            "date" => java::LOCAL_DATE,
            "timestamp" | "timestamp without time zone" => java::LOCAL_DATE_TIME,
            "timestamptz" | "timestamp with time zone" => "java.time.OffsetDateTime",
            "time" | "time without time zone" => java::LOCAL_TIME,
            "bytea" => "byte[]",
            "json" | "jsonb" => "com.fasterxml.jackson.databind.JsonNode",
            "type_file" => java::FILE,
            _ => return None,
        };
        Some(class_name)
    }
}

impl TypeConverter for JavaTypeConverter {
    fn convert(&self, column: &Column) -> Result<JavaType> {
        let (element, collection) = split_array(column.sql_type());
        let class_name =
            Self::map_sql_type(element).ok_or_else(|| GenerationError::UnsupportedType {
                table: column.table().to_string(),
                column: column.name().to_string(),
                sql_type: column.sql_type().to_string(),
            })?;

        Ok(JavaType {
            class_name: class_name.to_string(),
            collection,
        })
    }
}
