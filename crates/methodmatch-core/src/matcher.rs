//! A single immutable method matcher.

use std::fmt;

use crate::criteria::{NameCriterion, ParametersCriterion, TypeCriterion};
use crate::semantic::{MethodSubject, Symbol, Type};

/// One rule: owner-type criteria AND name criteria AND parameter criteria,
/// each kind OR'd internally.
///
/// Built through [`MethodMatcherBuilder`](crate::MethodMatcherBuilder), so
/// every kind is non-empty. Immutable and `Send + Sync`.
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    types: Vec<TypeCriterion>,
    names: Vec<NameCriterion>,
    parameters: Vec<ParametersCriterion>,
}

impl MethodMatcher {
    pub(crate) fn new(
        types: Vec<TypeCriterion>,
        names: Vec<NameCriterion>,
        parameters: Vec<ParametersCriterion>,
    ) -> Self {
        Self {
            types,
            names,
            parameters,
        }
    }

    /// Owner-type alternatives.
    #[must_use]
    pub fn type_criteria(&self) -> &[TypeCriterion] {
        &self.types
    }

    /// Name alternatives.
    #[must_use]
    pub fn name_criteria(&self) -> &[NameCriterion] {
        &self.names
    }

    /// Signature alternatives.
    #[must_use]
    pub fn parameter_criteria(&self) -> &[ParametersCriterion] {
        &self.parameters
    }

    /// Tests a tree node.
    ///
    /// The node's call-site type, when it has one, stands in for the
    /// declaring type. Unresolved nodes never match.
    #[must_use]
    pub fn matches<S: MethodSubject + ?Sized>(&self, subject: &S) -> bool {
        let Some(symbol) = subject.resolve_symbol() else {
            tracing::trace!("subject has no symbol");
            return false;
        };
        let call_site = subject.call_site_type();
        self.matches_resolved(&*symbol, call_site.as_deref())
    }

    /// Tests a symbol directly against its declaring type.
    #[must_use]
    pub fn matches_symbol(&self, symbol: &dyn Symbol) -> bool {
        self.matches_resolved(symbol, None)
    }

    fn matches_resolved(&self, symbol: &dyn Symbol, call_site: Option<&dyn Type>) -> bool {
        if symbol.is_unknown() || !symbol.is_method() {
            return false;
        }
        let owner = if call_site.is_none() {
            symbol.owner()
        } else {
            None
        };
        let Some(ty) = call_site.or(owner.as_deref()) else {
            tracing::trace!(name = symbol.name(), "symbol has no owner");
            return false;
        };

        // Owner first: it rejects most candidates.
        self.types.iter().any(|c| c.satisfies(ty))
            && self.names.iter().any(|c| c.satisfies(symbol.name()))
            && {
                let params = symbol.parameter_types();
                self.parameters.iter().any(|c| c.satisfies(&params))
            }
    }
}

impl fmt::Display for MethodMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(items: &[T]) -> String {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        }
        let types = join(&self.types);
        let names = join(&self.names);
        let parameters = join(&self.parameters);
        write!(f, "{types} #{names} {parameters}")
    }
}
