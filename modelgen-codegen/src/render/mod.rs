//! Rendering scopes into Java source files.
//!
//! Each scope becomes `<template dir>/<ClassName>.java`, with the package
//! taken from the template path below `src/main/java/`.

mod java;

use std::path::{Path, PathBuf};

pub use java::{EnumClass, FilterStrategyClass, ModelClass};
use modelgen_core::{File, GENERATED_HEADER};

use crate::{
    builder::{CodeBuilder, Renderable},
    factory::AsyncLoadModelScopeFactory,
    scope::Scope,
};

const SOURCE_ROOT: &str = "src/main/java/";

/// Output path of a class rendered with the given template.
pub fn output_path(template_path: &str, class_name: &str) -> PathBuf {
    let dir = Path::new(template_path).parent().unwrap_or(Path::new(""));
    dir.join(format!("{}.java", class_name))
}

/// Java package implied by a template path, if it sits under a source root.
///
/// `model/src/main/java/model/dto/dto.java.ftl` -> `model.dto`
pub fn java_package(template_path: &str) -> Option<String> {
    let (_, relative) = template_path.split_once(SOURCE_ROOT)?;
    let (dir, _) = relative.rsplit_once('/')?;
    Some(dir.replace('/', "."))
}

fn render_node(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::java();
    builder.emit(node);
    builder.build()
}

/// Render a scope into an in-memory file.
pub fn render_scope(scope: &Scope, template_path: &str) -> File {
    let package = java_package(template_path);
    let package = package.as_deref();

    let content = match scope {
        Scope::Model(scope) => render_node(&ModelClass { package, scope }),
        Scope::FilterStrategy(scope) => {
            let model_package = java_package(AsyncLoadModelScopeFactory::TEMPLATE_PATH);
            render_node(&FilterStrategyClass {
                package,
                model_package: model_package.as_deref(),
                scope,
            })
        }
        Scope::Enum(scope) => render_node(&EnumClass { package, scope }),
    };

    File::new(output_path(template_path, scope.class_name()), content)
        .with_header(GENERATED_HEADER)
}
