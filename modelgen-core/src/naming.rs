//! Java naming conventions for generated classes and fields.

use crate::{to_camel_case, to_pascal_case};

/// Naming rules for one target language.
///
/// Defines how database names become type and field names, and how reserved
/// words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table or entity name to a type name (e.g., "test_schema" -> "TestSchema")
    pub table_to_type: fn(&str) -> String,
    /// Transform a column name to a field name (e.g., "birth_date" -> "birthDate")
    pub column_to_field: fn(&str) -> String,
    /// Reserved words of the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.table_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.column_to_field)(name);
        self.safe_name(&transformed)
    }
}

fn escape_with_trailing_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    table_to_type: to_pascal_case,
    column_to_field: to_camel_case,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "true",
        "try",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_with_trailing_underscore,
};
