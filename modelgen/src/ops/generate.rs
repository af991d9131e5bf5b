//! Generate operation - writing a finished generation run.

use std::path::Path;

use eyre::{Context, Result};
use modelgen_codegen::{GenerationOutput, generator::SCOPES_FILE};
use tracing::info;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, TargetSummary, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to write `scopes.json` next to the sources.
    pub emit_scopes: bool,
}

/// Execute the generate operation.
///
/// The output is already fully rendered, so either every file is written or
/// the run failed before this point.
pub fn generate(output: &GenerationOutput, opts: GenerateOptions) -> Result<GenerateReport> {
    let targets = output
        .targets()
        .iter()
        .map(|group| TargetSummary {
            target: group.target.to_string(),
            classes: group
                .scopes
                .iter()
                .map(|s| s.class_name().to_string())
                .collect(),
        })
        .collect();

    let result = if opts.dry_run {
        let files = output
            .files()
            .iter()
            .map(|f| PreviewFile {
                path: f.relative_path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let summary = output
            .write(opts.output_dir)
            .wrap_err("Failed to write generated sources")?;
        info!(
            "wrote {} file(s), {} unchanged",
            summary.written.len(),
            summary.unchanged.len()
        );

        let scopes_file = if opts.emit_scopes {
            output.write_scopes(opts.output_dir)?;
            Some(opts.output_dir.join(SCOPES_FILE))
        } else {
            None
        };

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: summary.written,
            unchanged: summary.unchanged.len(),
            scopes_file,
        })
    };

    Ok(GenerateReport { targets, result })
}

#[cfg(test)]
mod tests {
    use modelgen_codegen::Generator;
    use modelgen_schema::{Context, Metadata};
    use tempfile::TempDir;

    use super::*;

    fn output() -> GenerationOutput {
        let context: Context = r#"
            [[tables]]
            name = "person"
            primary_key = "id"
            columns = [{ name = "id", type = "uuid" }, { name = "birth_date", type = "date" }]
        "#
        .parse()
        .unwrap();
        let metadata: Metadata = r#"
            [[partial_update]]
            name = "birth_date_upd"
            table = "person"
            columns = ["birth_date"]
        "#
        .parse()
        .unwrap();

        Generator::new(&metadata).run(&context).unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = generate(
            &output(),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: true,
                emit_scopes: true,
            },
        )
        .unwrap();

        assert!(matches!(report.result, GenerationResult::Preview(ref p) if p.files.len() == 1));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_with_scopes() {
        let temp = TempDir::new().unwrap();
        let report = generate(
            &output(),
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: false,
                emit_scopes: true,
            },
        )
        .unwrap();

        assert_eq!(report.targets[0].classes, ["PersonBirthDateUpd"]);
        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.written.len(), 1);
        assert!(temp.path().join("scopes.json").exists());
        assert!(
            temp.path()
                .join("model/src/main/java/model/dto/PersonBirthDateUpd.java")
                .exists()
        );
    }
}
