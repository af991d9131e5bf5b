//! Errors raised while turning metadata into scopes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scope creation.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// A lookup or type-resolution failure. Any of these aborts the whole run.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerationError {
    #[error("table '{table}' referenced by {referrer} does not exist")]
    #[diagnostic(
        code(modelgen::missing_table),
        help("check the table name against the schema snapshot")
    )]
    MissingTable { table: String, referrer: String },

    #[error("column '{column}' referenced by {referrer} does not exist in table '{table}'")]
    #[diagnostic(
        code(modelgen::missing_column),
        help("metadata column lists use database column names")
    )]
    MissingColumn {
        table: String,
        column: String,
        referrer: String,
    },

    #[error("table '{table}' has no primary key, required by {referrer}")]
    #[diagnostic(code(modelgen::missing_primary_key))]
    MissingPrimaryKey { table: String, referrer: String },

    #[error("async load entity '{entity}' is neither a table nor a nested structure")]
    #[diagnostic(code(modelgen::missing_entity))]
    MissingEntity { entity: String },

    #[error("column '{table}.{column}' has unsupported SQL type '{sql_type}'")]
    #[diagnostic(
        code(modelgen::unsupported_type),
        help("register the type as an enum in the metadata or change the column type")
    )]
    UnsupportedType {
        table: String,
        column: String,
        sql_type: String,
    },

    #[error("columns '{first}' and '{second}' of {class_name} both map to field '{field}'")]
    #[diagnostic(code(modelgen::duplicate_field))]
    DuplicateField {
        class_name: String,
        field: String,
        first: String,
        second: String,
    },

    #[error("more than one class renders to '{}'", .path.display())]
    #[diagnostic(
        code(modelgen::duplicate_output),
        help("rename one of the metadata entries so the class names differ")
    )]
    DuplicateOutput { path: PathBuf },
}
