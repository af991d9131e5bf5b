//! Scopes: the template-ready data produced by the scope factories.
//!
//! Every scope describes exactly one generated Java source file. Scopes are
//! plain serializable values so they can also be handed to an external
//! template engine as JSON.

use serde::Serialize;

/// One attribute of a [`Constraint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub key: String,
    pub value: String,
}

impl Content {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An annotation attached to a field, e.g.
/// `@XmlJavaTypeAdapter(value = LocalDateXmlAdapter.class)`.
///
/// The name is the fully qualified annotation (with the leading `@`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub name: String,
    pub content: Vec<Content>,
}

impl Constraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
        }
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.content.push(Content::new(key, value));
        self
    }
}

/// A field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Java identifier.
    pub name: String,
    /// Fully qualified Java type, e.g. `java.util.List<java.lang.String>`.
    #[serde(rename = "type")]
    pub type_name: String,
    pub constraints: Vec<Constraint>,
}

/// A DTO class: partial-update DTOs and async-load models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelScope {
    pub class_name: String,
    pub fields: Vec<Field>,
}

/// A filter strategy for one async-load model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStrategyScope {
    pub class_name: String,
    /// The model class whose rows are filtered.
    pub model_class_name: String,
    /// Maximum number of rows per async load.
    pub limit: u32,
}

/// A single enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumConstant {
    pub code: String,
    pub label: String,
}

/// A Java enum for a database enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumScope {
    pub class_name: String,
    pub constants: Vec<EnumConstant>,
}

/// Any scope a factory can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Scope {
    Model(ModelScope),
    FilterStrategy(FilterStrategyScope),
    Enum(EnumScope),
}

impl Scope {
    /// Name of the class this scope renders to.
    pub fn class_name(&self) -> &str {
        match self {
            Scope::Model(scope) => &scope.class_name,
            Scope::FilterStrategy(scope) => &scope.class_name,
            Scope::Enum(scope) => &scope.class_name,
        }
    }
}

impl From<ModelScope> for Scope {
    fn from(scope: ModelScope) -> Self {
        Scope::Model(scope)
    }
}

impl From<FilterStrategyScope> for Scope {
    fn from(scope: FilterStrategyScope) -> Self {
        Scope::FilterStrategy(scope)
    }
}

impl From<EnumScope> for Scope {
    fn from(scope: EnumScope) -> Self {
        Scope::Enum(scope)
    }
}
