//! Schema snapshot parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use super::{Column, Context, Table};
use crate::{Error, Result, validate::ParseContext};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchema {
    #[serde(default)]
    tables: Vec<RawTable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    name: String,
    primary_key: Option<String>,
    #[serde(default)]
    columns: Vec<RawColumn>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumn {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default = "default_nullable")]
    nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl FromStr for Context {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "schema.toml")
    }
}

impl Context {
    /// Parse a schema snapshot from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Parse a schema snapshot from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

fn parse_schema(content: &str, filename: &str) -> Result<Context> {
    let ctx = ParseContext::new(content, filename);
    let raw: RawSchema =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    ctx.ensure_unique(raw.tables.iter().map(|t| t.name.as_str()), "table")?;

    let mut tables = Vec::with_capacity(raw.tables.len());
    for raw_table in raw.tables {
        tables.push(build_table(&ctx, raw_table)?);
    }
    Ok(Context::new(tables))
}

fn build_table(ctx: &ParseContext, raw: RawTable) -> Result<Table> {
    ctx.validate_name(&raw.name, "table")?;

    let table_ctx = ctx.push(&raw.name);
    table_ctx.ensure_unique(raw.columns.iter().map(|c| c.name.as_str()), "column")?;

    let mut table = Table::new(&raw.name);
    for column in &raw.columns {
        table_ctx.validate_name(&column.name, "column")?;
        if column.sql_type.trim().is_empty() {
            return Err(table_ctx.error_at(
                format!("column '{}.{}' has an empty type", raw.name, column.name),
                &column.name,
            ));
        }

        let mut built = Column::new(&column.name, column.sql_type.trim());
        if !column.nullable {
            built = built.not_null();
        }
        table = table.with_column(built);
    }

    if let Some(pk) = &raw.primary_key {
        if table.column(pk).is_none() {
            return Err(table_ctx.error_at(
                format!(
                    "primary key '{}' is not a column of table '{}'",
                    pk, raw.name
                ),
                pk,
            ));
        }
        table = table.with_primary_key(pk);
    }

    Ok(table)
}
