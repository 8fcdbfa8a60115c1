//! Predicates over method names.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::semantic::CONSTRUCTOR_NAME;

/// Shared, thread-safe predicate over a method name.
pub type NamePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A criterion a method name must satisfy.
///
/// String-based forms are case-sensitive and never accept
/// [`CONSTRUCTOR_NAME`]; constructors are only reachable through
/// [`NameCriterion::Constructor`].
#[derive(Clone)]
pub enum NameCriterion {
    /// One of these exact names.
    ExactOneOf(BTreeSet<String>),
    /// Names starting with this prefix.
    Prefix(String),
    /// Any name, constructors included.
    Any,
    /// Caller-supplied predicate, sees every name.
    Predicate(NamePredicate),
    /// Constructors.
    Constructor,
}

impl NameCriterion {
    /// Matches exactly one of `names`.
    #[must_use]
    pub fn one_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ExactOneOf(names.into_iter().map(Into::into).collect())
    }

    /// Whether this is the [`NameCriterion::Any`] variant.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Tests `name` against this criterion.
    #[must_use]
    pub fn satisfies(&self, name: &str) -> bool {
        match self {
            Self::ExactOneOf(names) => name != CONSTRUCTOR_NAME && names.contains(name),
            Self::Prefix(prefix) => name != CONSTRUCTOR_NAME && name.starts_with(prefix.as_str()),
            Self::Any => true,
            Self::Predicate(predicate) => predicate(name),
            Self::Constructor => name == CONSTRUCTOR_NAME,
        }
    }
}

impl fmt::Debug for NameCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactOneOf(names) => f.debug_tuple("ExactOneOf").field(names).finish(),
            Self::Prefix(prefix) => f.debug_tuple("Prefix").field(prefix).finish(),
            Self::Any => f.write_str("Any"),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Constructor => f.write_str("Constructor"),
        }
    }
}

impl fmt::Display for NameCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactOneOf(names) => {
                let joined: Vec<&str> = names.iter().map(String::as_str).collect();
                f.write_str(&joined.join("|"))
            }
            Self::Prefix(prefix) => write!(f, "{prefix}*"),
            Self::Any => f.write_str("*"),
            Self::Predicate(_) => f.write_str("<predicate>"),
            Self::Constructor => f.write_str(CONSTRUCTOR_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_names_are_case_sensitive() {
        let criterion = NameCriterion::one_of(["a", "b"]);
        assert!(criterion.satisfies("a"));
        assert!(criterion.satisfies("b"));
        assert!(!criterion.satisfies("A"));
        assert!(!criterion.satisfies("aa"));
    }

    #[test]
    fn prefix() {
        let criterion = NameCriterion::Prefix("a".to_string());
        assert!(criterion.satisfies("a"));
        assert!(criterion.satisfies("aa"));
        assert!(!criterion.satisfies("ba"));
    }

    #[test]
    fn strings_never_reach_constructor() {
        assert!(!NameCriterion::one_of([CONSTRUCTOR_NAME]).satisfies(CONSTRUCTOR_NAME));
        assert!(!NameCriterion::Prefix("<".to_string()).satisfies(CONSTRUCTOR_NAME));
        assert!(NameCriterion::Constructor.satisfies(CONSTRUCTOR_NAME));
        assert!(!NameCriterion::Constructor.satisfies("init"));
    }

    #[test]
    fn any_and_predicate_see_everything() {
        assert!(NameCriterion::Any.satisfies(CONSTRUCTOR_NAME));
        assert!(NameCriterion::Any.satisfies("f"));
        let predicate = NameCriterion::Predicate(Arc::new(|n: &str| n.eq_ignore_ascii_case("B")));
        assert!(predicate.satisfies("b"));
        assert!(!predicate.satisfies("a"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(NameCriterion::one_of(["b", "a"]).to_string(), "a|b");
        assert_eq!(NameCriterion::Prefix("get".into()).to_string(), "get*");
        assert_eq!(NameCriterion::Constructor.to_string(), "<init>");
    }
}
