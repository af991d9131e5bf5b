//! Validation context and utilities shared by the schema and metadata parsers.

use std::{collections::HashSet, sync::Arc};

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Wraps the source text and filename together with the current path through
/// the document, so nested validation can report where a problem sits.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "metadata.toml");
/// ctx.validate_name("birth_date_upd", "partial update")?;
///
/// let nested = ctx.push("person_with_address").push("address_id");
/// nested.validate_name("address", "nested table")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["person_with_address", "address_id"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "column in 'birth_date_upd'" or just "table" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of the first quoted occurrence of `name` in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_quoted_span(self.source.src(), name, 0)
    }

    /// Validation error pointing at `name` when it can be located.
    pub fn error_at(&self, message: impl Into<String>, name: &str) -> Box<crate::Error> {
        self.source
            .validation_error_at(message, self.find_span(name))
    }

    /// Validate that a name is a usable database or descriptor identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Fail on the first name that appears twice, pointing at the second occurrence.
    pub fn ensure_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name) {
                return Err(self.source.duplicate_error(
                    name,
                    self.context_for(kind),
                    find_quoted_span(self.source.src(), name, 1),
                ));
            }
        }
        Ok(())
    }
}

/// Find the span of the `occurrence`-th (0-based) quoted `name` in the TOML
/// source, i.e. the text between the quotes of `"name"` or `'name'`.
pub(crate) fn find_quoted_span(src: &str, name: &str, occurrence: usize) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    for quote in ['"', '\''] {
        let pattern = format!("{quote}{name}{quote}");
        if let Some((pos, _)) = src.match_indices(&pattern).nth(occurrence) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Validate that a name is a valid identifier (dashes allowed between words).
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    let mut prev_was_dash = false;
    for c in chars {
        if c == '-' {
            if prev_was_dash {
                return Some("name cannot contain consecutive dashes");
            }
            prev_was_dash = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            prev_was_dash = false;
        } else {
            return Some("name must contain only letters, numbers, underscores, and dashes");
        }
    }

    if prev_was_dash {
        return Some("name cannot end with a dash");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("person").is_none());
        assert!(validate_identifier("birth_date").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("address_line2").is_none());
        assert!(validate_identifier("birth-date-upd").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("has space").is_some());
        assert!(validate_identifier("double--dash").is_some());
        assert!(validate_identifier("trailing-").is_some());
        assert!(validate_identifier("dotted.name").is_some());
    }

    #[test]
    fn test_find_quoted_span() {
        let src = r#"name = "person"
table = "person""#;
        let first = find_quoted_span(src, "person", 0).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(first.len(), 6);

        let second = find_quoted_span(src, "person", 1).unwrap();
        assert_eq!(second.offset(), 25);

        assert!(find_quoted_span(src, "person", 2).is_none());
        assert!(find_quoted_span(src, "missing", 0).is_none());
    }

    #[test]
    fn test_ensure_unique() {
        let ctx = ParseContext::new(r#"a = "x"\nb = "x""#, "test.toml");
        assert!(ctx.ensure_unique(["x", "y"], "table").is_ok());

        let err = ctx.ensure_unique(["x", "y", "x"], "table").unwrap_err();
        assert!(matches!(*err, crate::Error::Duplicate { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "test.toml");
        assert_eq!(ctx.context_for("table"), "table");

        let nested = ctx.push("person").push("columns");
        assert_eq!(nested.context_for("column"), "column in 'person.columns'");
    }
}
