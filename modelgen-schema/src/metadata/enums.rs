use std::collections::HashMap;

use modelgen_core::JAVA_NAMING;
use serde::{Deserialize, Serialize};

use super::MetadataProvider;
use crate::{Result, validate::ParseContext};

/// A database enum type and its constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDefinition {
    /// SQL type name of the enum (as it appears in column types).
    pub name: String,
    /// Constants in declaration order.
    pub values: Vec<EnumValue>,
}

/// A single enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EnumValue {
    /// Stored value; becomes the Java constant name.
    pub code: String,
    /// Human-readable label. Defaults to the code.
    pub label: Option<String>,
}

impl EnumValue {
    /// The label, falling back to the code.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }
}

/// Provides enum definitions, looked up by SQL type name.
#[derive(Debug, Clone, Default)]
pub struct EnumProvider {
    enums: Vec<EnumDefinition>,
    by_name: HashMap<String, usize>,
}

impl EnumProvider {
    pub(crate) fn load(enums: Vec<EnumDefinition>, ctx: &ParseContext) -> Result<Self> {
        ctx.ensure_unique(enums.iter().map(|e| e.name.as_str()), "enum")?;

        for definition in &enums {
            ctx.validate_name(&definition.name, "enum")?;
            let enum_ctx = ctx.push(&definition.name);

            if definition.values.is_empty() {
                return Err(enum_ctx.error_at(
                    format!("enum '{}' has no values", definition.name),
                    &definition.name,
                ));
            }
            for value in &definition.values {
                enum_ctx.validate_name(&value.code, "enum value")?;
                if value.code.contains('-') {
                    return Err(enum_ctx.error_at(
                        format!("enum value '{}' cannot contain dashes", value.code),
                        &value.code,
                    ));
                }
                if JAVA_NAMING.is_reserved(&value.code) {
                    return Err(enum_ctx.error_at(
                        format!("enum value '{}' is a reserved Java keyword", value.code),
                        &value.code,
                    ));
                }
            }
            enum_ctx.ensure_unique(
                definition.values.iter().map(|v| v.code.as_str()),
                "enum value",
            )?;
        }

        let by_name = enums
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Ok(Self { enums, by_name })
    }

    /// Find the enum registered for a SQL type name.
    pub fn find(&self, sql_type: &str) -> Option<&EnumDefinition> {
        self.by_name.get(sql_type).map(|&i| &self.enums[i])
    }

    /// Returns true if `sql_type` names a registered enum.
    pub fn is_enum(&self, sql_type: &str) -> bool {
        self.by_name.contains_key(sql_type)
    }
}

impl MetadataProvider for EnumProvider {
    type Descriptor = EnumDefinition;

    fn find_all(&self) -> &[EnumDefinition] {
        &self.enums
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Metadata};

    #[test]
    fn test_enum_lookup() {
        let metadata: Metadata = r#"
            [[enum]]
            name = "person_status"
            values = [
                { code = "ACTIVE", label = "Active" },
                { code = "BLOCKED" },
            ]
        "#
        .parse()
        .unwrap();

        let status = metadata.enums.find("person_status").unwrap();
        assert_eq!(status.values[0].label(), "Active");
        assert_eq!(status.values[1].label(), "BLOCKED");
        assert!(metadata.enums.is_enum("person_status"));
        assert!(!metadata.enums.is_enum("text"));
    }

    #[test]
    fn test_enum_without_values_rejected() {
        let err = r#"
            [[enum]]
            name = "empty_enum"
            values = []
        "#
        .parse::<Metadata>()
        .unwrap_err();

        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_enum_dashed_code_rejected() {
        let err = r#"
            [[enum]]
            name = "status"
            values = [{ code = "NOT-ACTIVE" }]
        "#
        .parse::<Metadata>()
        .unwrap_err();

        assert!(
            matches!(*err, Error::Validation { ref message, .. } if message.contains("dashes"))
        );
    }

    #[test]
    fn test_enum_reserved_code_rejected() {
        let err = r#"
            [[enum]]
            name = "kind"
            values = [{ code = "default", label = "Default kind" }]
        "#
        .parse::<Metadata>()
        .unwrap_err();

        assert!(
            matches!(*err, Error::Validation { ref message, .. } if message.contains("reserved"))
        );
    }

    #[test]
    fn test_enum_duplicate_code_rejected() {
        let err = r#"
            [[enum]]
            name = "status"
            values = [{ code = "A" }, { code = "A" }]
        "#
        .parse::<Metadata>()
        .unwrap_err();

        assert!(matches!(*err, Error::Duplicate { .. }));
    }
}
