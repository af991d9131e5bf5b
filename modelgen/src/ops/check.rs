//! Check operation - input validation.

use std::path::Path;

use modelgen_codegen::GenerationOutput;
use modelgen_schema::{Context, Metadata, MetadataProvider};

use crate::reports::CheckReport;

/// Summarize inputs that loaded and resolved without errors.
pub fn check(
    config_path: &Path,
    context: &Context,
    metadata: &Metadata,
    output: &GenerationOutput,
) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        tables: context.table_count(),
        partial_updates: metadata.partial_updates.find_all().len(),
        enums: metadata.enums.find_all().len(),
        nested_structures: metadata.nested_structures.find_all().len(),
        async_loads: metadata.async_load.find_all().len(),
        classes: output.files().len(),
    }
}
