//! Schema snapshot for one generation run.
//!
//! The snapshot is produced by an external schema reader and handed to
//! modelgen as TOML:
//!
//! ```toml
//! [[tables]]
//! name = "person"
//! primary_key = "id"
//!
//! [[tables.columns]]
//! name = "id"
//! type = "uuid"
//! nullable = false
//!
//! [[tables.columns]]
//! name = "birth_date"
//! type = "date"
//! ```

mod parse;

use indexmap::IndexMap;
use serde::Serialize;

/// Immutable snapshot of the introspected database schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
    tables: IndexMap<String, Table>,
}

impl Context {
    /// Build a context from tables, keeping their order.
    ///
    /// A later table with the same name replaces an earlier one; the parser
    /// rejects duplicates before getting here.
    pub fn new(tables: impl IntoIterator<Item = Table>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| (table.name.clone(), table))
                .collect(),
        }
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Look up a column by table and column name.
    pub fn column(&self, table: &str, column: &str) -> Option<&Column> {
        self.table(table).and_then(|t| t.column(column))
    }

    /// All tables in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// A table in the schema snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    name: String,
    primary_key: Option<String>,
    columns: IndexMap<String, Column>,
}

impl Table {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key: None,
            columns: IndexMap::new(),
        }
    }

    /// Set the primary key column name.
    pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    /// Append a column. The column is re-parented to this table.
    pub fn with_column(mut self, mut column: Column) -> Self {
        column.table = self.name.clone();
        self.columns.insert(column.name.clone(), column);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a column by its database name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Name of the primary key column, if the table has one.
    pub fn primary_key_name(&self) -> Option<&str> {
        self.primary_key.as_deref()
    }

    /// The primary key column, if declared and present.
    pub fn primary_key(&self) -> Option<&Column> {
        self.primary_key_name().and_then(|pk| self.column(pk))
    }
}

/// A column of a table. Never mutated by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    sql_type: String,
    nullable: bool,
    table: String,
}

impl Column {
    /// Create a nullable column with the given SQL type.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            table: String::new(),
        }
    }

    /// Mark the column as `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared SQL type name, as reported by the schema reader.
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Name of the owning table.
    pub fn table(&self) -> &str {
        &self.table
    }
}
