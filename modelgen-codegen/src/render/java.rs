//! Java source nodes for each scope kind.

use crate::{
    builder::{CodeFragment, Renderable},
    scope::{Constraint, EnumScope, Field, FilterStrategyScope, ModelScope},
};

/// `package` declaration followed by a blank line.
fn package_header(package: Option<&str>) -> Vec<CodeFragment> {
    match package {
        Some(package) => vec![
            CodeFragment::line(format!("package {};", package)),
            CodeFragment::blank(),
        ],
        None => Vec::new(),
    }
}

fn annotation(constraint: &Constraint) -> String {
    if constraint.content.is_empty() {
        return constraint.name.clone();
    }
    let args: Vec<_> = constraint
        .content
        .iter()
        .map(|c| format!("{} = {}", c.key, c.value))
        .collect();
    format!("{}({})", constraint.name, args.join(", "))
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// A DTO with private fields and accessors.
pub struct ModelClass<'s> {
    pub package: Option<&'s str>,
    pub scope: &'s ModelScope,
}

impl ModelClass<'_> {
    fn field_declaration(field: &Field) -> Vec<CodeFragment> {
        field
            .constraints
            .iter()
            .map(|c| CodeFragment::line(annotation(c)))
            .chain([CodeFragment::line(format!(
                "private {} {};",
                field.type_name, field.name
            ))])
            .collect()
    }

    fn accessors(field: &Field) -> Vec<CodeFragment> {
        let property = capitalize(&field.name);
        vec![
            CodeFragment::blank(),
            CodeFragment::braced(
                format!("public {} get{}() {{", field.type_name, property),
                vec![CodeFragment::line(format!("return {};", field.name))],
            ),
            CodeFragment::blank(),
            CodeFragment::braced(
                format!(
                    "public void set{}({} {}) {{",
                    property, field.type_name, field.name
                ),
                vec![CodeFragment::line(format!(
                    "this.{} = {};",
                    field.name, field.name
                ))],
            ),
        ]
    }
}

impl Renderable for ModelClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let fields = &self.scope.fields;
        let mut body = Vec::new();
        if !fields.is_empty() {
            body.push(CodeFragment::blank());
        }
        body.extend(fields.iter().flat_map(Self::field_declaration));
        body.extend(fields.iter().flat_map(Self::accessors));

        let mut fragments = package_header(self.package);
        fragments.push(CodeFragment::braced(
            format!("public class {} {{", self.scope.class_name),
            body,
        ));
        fragments
    }
}

/// A filter strategy bound to a model class.
pub struct FilterStrategyClass<'s> {
    pub package: Option<&'s str>,
    /// Package of the async-load models.
    pub model_package: Option<&'s str>,
    pub scope: &'s FilterStrategyScope,
}

impl Renderable for FilterStrategyClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let model = match self.model_package {
            Some(package) => format!("{}.{}", package, self.scope.model_class_name),
            None => self.scope.model_class_name.clone(),
        };

        let mut fragments = package_header(self.package);
        fragments.push(CodeFragment::braced(
            format!("public class {} {{", self.scope.class_name),
            vec![
                CodeFragment::blank(),
                CodeFragment::line(format!(
                    "public static final Class<{}> MODEL = {}.class;",
                    model, model
                )),
                CodeFragment::line(format!(
                    "public static final int LIMIT = {};",
                    self.scope.limit
                )),
                CodeFragment::blank(),
                CodeFragment::javadoc("Returns true if a load of the given size is accepted."),
                CodeFragment::braced(
                    "public boolean accepts(int rowCount) {",
                    vec![CodeFragment::line("return rowCount <= LIMIT;")],
                ),
            ],
        ));
        fragments
    }
}

/// A Java enum whose constants carry a label.
pub struct EnumClass<'s> {
    pub package: Option<&'s str>,
    pub scope: &'s EnumScope,
}

impl Renderable for EnumClass<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let class_name = &self.scope.class_name;
        let last = self.scope.constants.len().saturating_sub(1);
        let constants = self.scope.constants.iter().enumerate().map(|(i, c)| {
            let terminator = if i == last { ";" } else { "," };
            CodeFragment::line(format!(
                "{}({}){}",
                c.code,
                string_literal(&c.label),
                terminator
            ))
        });

        let mut body = vec![CodeFragment::blank()];
        body.extend(constants);
        body.extend([
            CodeFragment::blank(),
            CodeFragment::line("private final String label;"),
            CodeFragment::blank(),
            CodeFragment::braced(
                format!("{}(String label) {{", class_name),
                vec![CodeFragment::line("this.label = label;")],
            ),
            CodeFragment::blank(),
            CodeFragment::braced(
                "public String getLabel() {",
                vec![CodeFragment::line("return label;")],
            ),
        ]);

        let mut fragments = package_header(self.package);
        fragments.push(CodeFragment::braced(
            format!("public enum {} {{", class_name),
            body,
        ));
        fragments
    }
}
