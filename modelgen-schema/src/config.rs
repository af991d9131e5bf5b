//! Generator configuration (`modelgen.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Context, Error, Metadata, Result, Target, validate::ParseContext};

/// Root of `modelgen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// The `[generator]` section.
///
/// Relative paths are resolved against the directory holding `modelgen.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Schema snapshot file.
    #[serde(default = "default_schema")]
    pub schema: PathBuf,
    /// Metadata file.
    #[serde(default = "default_metadata")]
    pub metadata: PathBuf,
    /// Output directory for generated sources.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Targets to generate, run in [`Target`] order regardless of listing order.
    #[serde(default = "Target::all")]
    pub targets: Vec<Target>,
    /// Also write the scope list as JSON.
    #[serde(default)]
    pub emit_scopes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            metadata: default_metadata(),
            output: default_output(),
            targets: Target::all(),
            emit_scopes: false,
        }
    }
}

fn default_schema() -> PathBuf {
    PathBuf::from("schema.toml")
}

fn default_metadata() -> PathBuf {
    PathBuf::from("metadata.toml")
}

fn default_output() -> PathBuf {
    PathBuf::from("generated")
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "modelgen.toml")
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = ParseContext::new(content, filename);
    let mut config: Config =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    if config.generator.targets.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("[generator] targets cannot be empty"));
    }
    config.generator.targets.sort();
    config.generator.targets.dedup();

    Ok(config)
}

/// A `modelgen.toml` file together with its location.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = parse_config(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Wrap an already parsed config located at `path`.
    pub fn new(path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the `[generator]` section.
    pub fn generator(&self) -> &GeneratorConfig {
        &self.config.generator
    }

    /// Resolve a configured path relative to this file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.path.parent() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }

    pub fn schema_path(&self) -> PathBuf {
        self.resolve(&self.config.generator.schema)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.resolve(&self.config.generator.metadata)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.generator.output)
    }

    /// Load the schema snapshot and metadata this config points at.
    pub fn load_inputs(&self) -> Result<(Context, Metadata)> {
        let context = Context::from_file(self.schema_path())?;
        let metadata = Metadata::from_file(self.metadata_path())?;
        Ok((context, metadata))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::MetadataProvider;

    #[test]
    fn test_defaults() {
        let config: Config = "".parse().unwrap();

        assert_eq!(config.generator.schema, PathBuf::from("schema.toml"));
        assert_eq!(config.generator.output, PathBuf::from("generated"));
        assert_eq!(config.generator.targets, Target::ALL);
        assert!(!config.generator.emit_scopes);
    }

    #[test]
    fn test_targets_sorted_and_deduplicated() {
        let config: Config = r#"
            [generator]
            targets = ["enum", "partial-update", "enum"]
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config.generator.targets,
            [Target::PartialUpdate, Target::Enum]
        );
    }

    #[test]
    fn test_empty_targets_rejected() {
        let err = r#"
            [generator]
            targets = []
        "#
        .parse::<Config>()
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = r#"
            [generator]
            targets = ["csv"]
        "#
        .parse::<Config>()
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("modelgen.toml");
        fs::write(
            &path,
            r#"
            [generator]
            schema = "db/schema.toml"
            output = "out"
            "#,
        )
        .unwrap();

        let file = ConfigFile::open(&path).unwrap();
        assert_eq!(file.schema_path(), temp.path().join("db/schema.toml"));
        assert_eq!(file.metadata_path(), temp.path().join("metadata.toml"));
        assert_eq!(file.output_dir(), temp.path().join("out"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_load_inputs() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("schema.toml"),
            r#"
            [[tables]]
            name = "person"
            columns = [{ name = "id", type = "uuid" }]
            "#,
        )
        .unwrap();
        fs::write(temp.path().join("metadata.toml"), "").unwrap();

        let file = ConfigFile::new(temp.path().join("modelgen.toml"), "".parse().unwrap());
        let (context, metadata) = file.load_inputs().unwrap();

        assert!(context.table("person").is_some());
        assert!(metadata.partial_updates.is_empty());
    }
}
