use serde::{Deserialize, Serialize};

use super::MetadataProvider;
use crate::{Result, validate::ParseContext};

/// A partial-update DTO definition: a named subset of a table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PartialUpdate {
    /// Descriptor name, used as the class name suffix.
    pub name: String,
    /// Backing table.
    #[serde(rename = "table")]
    pub table_name: String,
    /// Database column names to include. The primary key is always added.
    pub columns: Vec<String>,
}

/// Provides all partial-update definitions.
#[derive(Debug, Clone, Default)]
pub struct PartialUpdateProvider {
    updates: Vec<PartialUpdate>,
}

impl PartialUpdateProvider {
    pub(crate) fn load(updates: Vec<PartialUpdate>, ctx: &ParseContext) -> Result<Self> {
        ctx.ensure_unique(updates.iter().map(|u| u.name.as_str()), "partial update")?;

        for update in &updates {
            ctx.validate_name(&update.name, "partial update")?;
            let upd_ctx = ctx.push(&update.name);
            upd_ctx.validate_name(&update.table_name, "table")?;

            if update.columns.is_empty() {
                return Err(upd_ctx.error_at(
                    format!("partial update '{}' lists no columns", update.name),
                    &update.name,
                ));
            }
            for column in &update.columns {
                upd_ctx.validate_name(column, "column")?;
            }
            upd_ctx.ensure_unique(update.columns.iter().map(String::as_str), "column")?;
        }

        Ok(Self { updates })
    }
}

impl MetadataProvider for PartialUpdateProvider {
    type Descriptor = PartialUpdate;

    fn find_all(&self) -> &[PartialUpdate] {
        &self.updates
    }
}
