//! The generation run: every selected target, rendered in memory.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eyre::WrapErr;
use modelgen_core::{File, GeneratedFile, WriteResult};
use modelgen_schema::{Context, Metadata, Target};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    constraints::CompositeConstraintProvider,
    error::{GenerationError, Result},
    factory::FactoryDeps,
    render::render_scope,
    scope::Scope,
    type_converter::{JavaTypeConverter, TypeConverter},
};

/// File name of the scope dump written next to the generated sources.
pub const SCOPES_FILE: &str = "scopes.json";

/// Runs the scope factories and renders their scopes.
pub struct Generator<'a> {
    metadata: &'a Metadata,
    converter: Box<dyn TypeConverter>,
    constraints: CompositeConstraintProvider,
    targets: Vec<Target>,
}

impl<'a> Generator<'a> {
    /// Generator for all targets with the built-in converter and constraints.
    pub fn new(metadata: &'a Metadata) -> Self {
        Self {
            metadata,
            converter: Box::new(JavaTypeConverter),
            constraints: CompositeConstraintProvider::new(),
            targets: Target::all(),
        }
    }

    /// Restrict the run to the given targets. They still run in [`Target`] order.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        let mut targets: Vec<_> = targets.into_iter().collect();
        targets.sort();
        targets.dedup();
        self.targets = targets;
        self
    }

    pub fn with_converter(mut self, converter: impl TypeConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn with_constraints(mut self, constraints: CompositeConstraintProvider) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    fn deps(&self) -> FactoryDeps<'_> {
        FactoryDeps {
            metadata: self.metadata,
            converter: self.converter.as_ref(),
            constraints: &self.constraints,
        }
    }

    /// Run every selected factory. The first failure aborts the run.
    pub fn create_scopes(&self, context: &Context) -> Result<Vec<TargetScopes>> {
        let deps = self.deps();
        self.targets
            .iter()
            .map(|&target| {
                let factory = deps.factory(target);
                let scopes = factory.create(context)?;
                info!("{}: {} scope(s)", target, scopes.len());
                for scope in &scopes {
                    debug!("{}: {}", target, scope.class_name());
                }
                Ok(TargetScopes {
                    target,
                    template_path: factory.template_path(),
                    scopes,
                })
            })
            .collect()
    }

    /// Create and render all scopes. Nothing is written to disk.
    pub fn run(&self, context: &Context) -> Result<GenerationOutput> {
        let targets = self.create_scopes(context)?;

        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for group in &targets {
            for scope in &group.scopes {
                let file = render_scope(scope, group.template_path);
                if !seen.insert(file.relative_path().to_path_buf()) {
                    return Err(GenerationError::DuplicateOutput {
                        path: file.relative_path().to_path_buf(),
                    });
                }
                files.push(file);
            }
        }
        info!("rendered {} file(s)", files.len());

        Ok(GenerationOutput { targets, files })
    }
}

/// Scopes produced for one target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetScopes {
    pub target: Target,
    pub template_path: &'static str,
    pub scopes: Vec<Scope>,
}

/// Everything a run produced, held in memory until written.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    targets: Vec<TargetScopes>,
    files: Vec<File>,
}

/// Outcome of writing a [`GenerationOutput`].
#[derive(Debug, Clone, Default)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

impl GenerationOutput {
    pub fn targets(&self) -> &[TargetScopes] {
        &self.targets
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn scope_count(&self) -> usize {
        self.targets.iter().map(|t| t.scopes.len()).sum()
    }

    /// The scope list as pretty JSON.
    pub fn scopes_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.targets)
    }

    /// Write every generated file under `output_dir`.
    pub fn write(&self, output_dir: &Path) -> eyre::Result<WriteSummary> {
        let mut summary = WriteSummary::default();
        for file in &self.files {
            let path = file.relative_path().to_path_buf();
            match file.write(output_dir)? {
                WriteResult::Unchanged => summary.unchanged.push(path),
                WriteResult::Written => summary.written.push(path),
            }
        }
        Ok(summary)
    }

    /// Write the scope dump as `scopes.json` under `output_dir`.
    pub fn write_scopes(&self, output_dir: &Path) -> eyre::Result<WriteResult> {
        let json = self
            .scopes_json()
            .wrap_err("failed to serialize scopes")?;
        File::new(SCOPES_FILE, json + "\n").write(output_dir)
    }
}
