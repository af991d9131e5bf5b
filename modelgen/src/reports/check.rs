//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from input validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub tables: usize,
    pub partial_updates: usize,
    pub enums: usize,
    pub nested_structures: usize,
    pub async_loads: usize,
    /// Number of classes the configured targets would generate.
    pub classes: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value_indented("tables", &self.tables.to_string());
        out.key_value_indented("partial updates", &self.partial_updates.to_string());
        out.key_value_indented("enums", &self.enums.to_string());
        out.key_value_indented("nested structures", &self.nested_structures.to_string());
        out.key_value_indented("async loads", &self.async_loads.to_string());
        out.key_value_indented("classes", &self.classes.to_string());
    }
}
