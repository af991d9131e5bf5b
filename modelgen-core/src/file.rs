use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Header prepended to every generated Java source file.
pub const GENERATED_HEADER: &str = "// Generated by modelgen. Do not edit.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file under `base`
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = apply_header(self.rules().header, &self.render());
        write_if_changed(&path, &content)
    }
}

fn apply_header(header: Option<&str>, content: &str) -> String {
    match header {
        Some(header) => format!("{}\n{}", header, content),
        None => content.to_string(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Leave the file alone when it already holds exactly `content`, so that
/// repeated runs keep modification times stable.
fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(WriteResult::Unchanged);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A generated file with a path relative to the output directory
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given relative path and content (no header)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Prepend a header line when the file is written.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.rules.header = Some(header);
        self
    }

    /// Get the relative file path
    pub fn relative_path(&self) -> &Path {
        &self.path
    }

    /// Get the file content (without header)
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for File {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line prepended to the content on write
    pub header: Option<&'static str>,
}
