//! Predicates over ordered parameter-type lists.

use std::fmt;
use std::sync::Arc;

use super::types::{TypeCriterion, TypePredicate};
use crate::semantic::Type;

/// Caller-supplied predicate over a whole parameter list.
pub type ParametersPredicate =
    Arc<dyn for<'a, 'b> Fn(&'a [Box<dyn Type + 'b>]) -> bool + Send + Sync>;

/// One complete signature alternative.
///
/// A matcher holds several of these and accepts a parameter list when any
/// of them does, which is how one rule covers several overloads.
#[derive(Clone)]
pub enum ParametersCriterion {
    /// Exactly zero parameters.
    NoParameters,
    /// Any parameter list, empty included.
    AnyParameters,
    /// Same length, each position satisfying its criterion.
    ExactSequence(Vec<TypeCriterion>),
    /// At least as long, leading positions satisfying their criteria.
    PrefixSequence(Vec<TypeCriterion>),
    /// Same length, each position accepted by its predicate.
    PredicateSequence(Vec<TypePredicate>),
    /// The whole list accepted by one predicate, any arity.
    Predicate(ParametersPredicate),
}

impl ParametersCriterion {
    /// Exact sequence of fully qualified type names.
    #[must_use]
    pub fn exact<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ExactSequence(type_names.into_iter().map(TypeCriterion::is).collect())
    }

    /// Prefix sequence of fully qualified type names.
    #[must_use]
    pub fn prefix<I, S>(type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PrefixSequence(type_names.into_iter().map(TypeCriterion::is).collect())
    }

    /// Whether this is the [`ParametersCriterion::AnyParameters`] variant.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::AnyParameters)
    }

    /// Tests an ordered parameter-type list against this alternative.
    #[must_use]
    pub fn satisfies(&self, params: &[Box<dyn Type + '_>]) -> bool {
        match self {
            Self::NoParameters => params.is_empty(),
            Self::AnyParameters => true,
            Self::ExactSequence(criteria) => {
                params.len() == criteria.len() && leading_satisfy(criteria, params)
            }
            Self::PrefixSequence(criteria) => {
                params.len() >= criteria.len() && leading_satisfy(criteria, params)
            }
            Self::PredicateSequence(predicates) => {
                params.len() == predicates.len()
                    && predicates
                        .iter()
                        .zip(params)
                        .all(|(predicate, param)| predicate(&**param))
            }
            Self::Predicate(predicate) => predicate(params),
        }
    }
}

fn leading_satisfy(criteria: &[TypeCriterion], params: &[Box<dyn Type + '_>]) -> bool {
    criteria
        .iter()
        .zip(params)
        .all(|(criterion, param)| criterion.satisfies(&**param))
}

impl fmt::Debug for ParametersCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParameters => f.write_str("NoParameters"),
            Self::AnyParameters => f.write_str("AnyParameters"),
            Self::ExactSequence(c) => f.debug_tuple("ExactSequence").field(c).finish(),
            Self::PrefixSequence(c) => f.debug_tuple("PrefixSequence").field(c).finish(),
            Self::PredicateSequence(p) => write!(f, "PredicateSequence(len={})", p.len()),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for ParametersCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(criteria: &[TypeCriterion]) -> String {
            criteria
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
        match self {
            Self::NoParameters => f.write_str("()"),
            Self::AnyParameters => f.write_str("(..)"),
            Self::ExactSequence(c) => write!(f, "({})", join(c)),
            Self::PrefixSequence(c) if c.is_empty() => f.write_str("(..)"),
            Self::PrefixSequence(c) => write!(f, "({}, ..)", join(c)),
            Self::PredicateSequence(p) => {
                write!(f, "({})", vec!["<predicate>"; p.len()].join(", "))
            }
            Self::Predicate(_) => f.write_str("(<predicate>..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeTable;

    fn params<'a>(table: &'a TypeTable, names: &[&str]) -> Vec<Box<dyn Type + 'a>> {
        names
            .iter()
            .map(|n| Box::new(table.get(n)) as Box<dyn Type + 'a>)
            .collect()
    }

    #[test]
    fn no_parameters() {
        let table = TypeTable::new();
        assert!(ParametersCriterion::NoParameters.satisfies(&params(&table, &[])));
        assert!(!ParametersCriterion::NoParameters.satisfies(&params(&table, &["int"])));
    }

    #[test]
    fn any_parameters() {
        let table = TypeTable::new();
        assert!(ParametersCriterion::AnyParameters.satisfies(&params(&table, &[])));
        assert!(ParametersCriterion::AnyParameters.satisfies(&params(&table, &["int", "long"])));
    }

    #[test]
    fn exact_sequence_checks_arity_and_order() {
        let table = TypeTable::new();
        let criterion = ParametersCriterion::exact(["int", "long"]);
        assert!(criterion.satisfies(&params(&table, &["int", "long"])));
        assert!(!criterion.satisfies(&params(&table, &["long", "int"])));
        assert!(!criterion.satisfies(&params(&table, &["int"])));
        assert!(!criterion.satisfies(&params(&table, &["int", "long", "int"])));
    }

    #[test]
    fn prefix_sequence_leaves_tail_unconstrained() {
        let table = TypeTable::new();
        let criterion = ParametersCriterion::prefix(["int"]);
        assert!(criterion.satisfies(&params(&table, &["int"])));
        assert!(criterion.satisfies(&params(&table, &["int", "long"])));
        assert!(criterion.satisfies(&params(&table, &["int", "java.lang.Object", "double"])));
        assert!(!criterion.satisfies(&params(&table, &[])));
        assert!(!criterion.satisfies(&params(&table, &["long"])));
    }

    #[test]
    fn predicate_sequence() {
        let table = TypeTable::new();
        let is_int: TypePredicate = Arc::new(|t: &dyn Type| t.is("int"));
        let not_int: TypePredicate = Arc::new(|t: &dyn Type| !t.is("int"));
        let criterion = ParametersCriterion::PredicateSequence(vec![is_int, not_int]);
        assert!(criterion.satisfies(&params(&table, &["int", "long"])));
        assert!(!criterion.satisfies(&params(&table, &["int", "int"])));
        assert!(!criterion.satisfies(&params(&table, &["int"])));
    }

    #[test]
    fn list_predicate_sees_every_arity() {
        fn not_unary(params: &[Box<dyn Type + '_>]) -> bool {
            params.len() != 1
        }
        let table = TypeTable::new();
        let criterion = ParametersCriterion::Predicate(Arc::new(not_unary));
        assert!(criterion.satisfies(&params(&table, &[])));
        assert!(!criterion.satisfies(&params(&table, &["int"])));
        assert!(criterion.satisfies(&params(&table, &["int", "long"])));
        assert_eq!(criterion.to_string(), "(<predicate>..)");
    }

    #[test]
    fn unknown_parameter_only_satisfies_any() {
        let table = TypeTable::new();
        let unknown = params(&table, &["not.Declared"]);
        assert!(!ParametersCriterion::exact(["not.Declared"]).satisfies(&unknown));
        assert!(ParametersCriterion::ExactSequence(vec![TypeCriterion::Any]).satisfies(&unknown));
    }

    #[test]
    fn display_forms() {
        assert_eq!(ParametersCriterion::NoParameters.to_string(), "()");
        assert_eq!(ParametersCriterion::exact(["int", "long"]).to_string(), "(int, long)");
        assert_eq!(ParametersCriterion::prefix(["int"]).to_string(), "(int, ..)");
    }
}
