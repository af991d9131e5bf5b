//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Classes produced per target, in run order.
    pub targets: Vec<TargetSummary>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Classes produced for one target.
#[derive(Debug)]
pub struct TargetSummary {
    pub target: String,
    pub classes: Vec<String>,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files created or updated, relative to the output directory.
    pub written: Vec<PathBuf>,
    /// Number of files that already had the generated content.
    pub unchanged: usize,
    /// Scope dump, if requested.
    pub scopes_file: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_targets(&self, out: &mut dyn Output) {
        for summary in &self.targets {
            out.section(&format!("{} ({})", summary.target, summary.classes.len()));
            for class in &summary.classes {
                out.list_item(class);
            }
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_targets(out);
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }
        if written.unchanged > 0 {
            out.key_value_indented("Unchanged", &written.unchanged.to_string());
        }
        if let Some(scopes_file) = &written.scopes_file {
            out.key_value("Scopes", &scopes_file.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_targets(out);
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
