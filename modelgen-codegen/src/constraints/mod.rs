//! Field constraint providers.
//!
//! A [`ConstraintProvider`] inspects a column's SQL type and resolved Java
//! type and returns the annotations the field needs. The
//! [`CompositeConstraintProvider`] asks every registered provider in
//! registration order and concatenates their answers.

mod marshaling;
mod validation;

pub use marshaling::MarshalingConstraintProvider;
pub use validation::ValidationConstraintProvider;

use crate::scope::Constraint;

/// Computes constraints for a field. Must be pure; an empty vector means no
/// constraint applies.
pub trait ConstraintProvider: Send + Sync {
    fn constraints_for(&self, sql_type: &str, resolved_type: &str) -> Vec<Constraint>;
}

/// Ordered collection of constraint providers.
pub struct CompositeConstraintProvider {
    providers: Vec<Box<dyn ConstraintProvider>>,
}

impl CompositeConstraintProvider {
    /// Composite with the built-in providers: marshaling, then validation.
    pub fn new() -> Self {
        Self::empty()
            .with_provider(MarshalingConstraintProvider)
            .with_provider(ValidationConstraintProvider)
    }

    /// Composite with no providers.
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Register a provider after the ones already present.
    pub fn with_provider(mut self, provider: impl ConstraintProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for CompositeConstraintProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintProvider for CompositeConstraintProvider {
    fn constraints_for(&self, sql_type: &str, resolved_type: &str) -> Vec<Constraint> {
        self.providers
            .iter()
            .flat_map(|p| p.constraints_for(sql_type, resolved_type))
            .collect()
    }
}

impl std::fmt::Debug for CompositeConstraintProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeConstraintProvider")
            .field("providers", &self.providers.len())
            .finish()
    }
}
