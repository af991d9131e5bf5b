use super::ConstraintProvider;
use crate::{scope::Constraint, type_converter::java};

const VALID: &str = "@javax.validation.Valid";

/// Cascades bean validation into fields that are themselves validated DTOs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationConstraintProvider;

impl ConstraintProvider for ValidationConstraintProvider {
    fn constraints_for(&self, _sql_type: &str, resolved_type: &str) -> Vec<Constraint> {
        if resolved_type == java::FILE {
            vec![Constraint::new(VALID)]
        } else {
            Vec::new()
        }
    }
}
