//! Predicates over the owner type and parameter types.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::semantic::Type;

/// Shared, thread-safe predicate over a [`Type`].
pub type TypePredicate = Arc<dyn Fn(&dyn Type) -> bool + Send + Sync>;

/// A criterion a single type must satisfy.
#[derive(Clone)]
pub enum TypeCriterion {
    /// Any type, including the unknown sentinel.
    Any,
    /// Exactly this fully qualified name.
    Exact(String),
    /// This type or any type inheriting from it, transitively.
    SubtypeOf(String),
    /// Caller-supplied predicate. No hierarchy walk is performed.
    Predicate(TypePredicate),
}

impl TypeCriterion {
    /// Matches any type.
    #[must_use]
    pub fn any() -> Self {
        Self::Any
    }

    /// Matches the type with exactly this fully qualified name.
    #[must_use]
    pub fn is(fully_qualified_name: impl Into<String>) -> Self {
        Self::Exact(fully_qualified_name.into())
    }

    /// Matches the named type and all its subtypes.
    #[must_use]
    pub fn subtype_of(fully_qualified_name: impl Into<String>) -> Self {
        Self::SubtypeOf(fully_qualified_name.into())
    }

    /// Matches types accepted by `predicate`.
    #[must_use]
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&dyn Type) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether this is the [`TypeCriterion::Any`] variant.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Tests `candidate` against this criterion.
    #[must_use]
    pub fn satisfies(&self, candidate: &dyn Type) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(name) => candidate.is(name),
            Self::SubtypeOf(name) => is_subtype_of(candidate, name),
            Self::Predicate(predicate) => predicate(candidate),
        }
    }
}

impl fmt::Debug for TypeCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Exact(name) => f.debug_tuple("Exact").field(name).finish(),
            Self::SubtypeOf(name) => f.debug_tuple("SubtypeOf").field(name).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for TypeCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(name) => f.write_str(name),
            Self::SubtypeOf(name) => write!(f, "{name}+"),
            Self::Predicate(_) => f.write_str("<predicate>"),
        }
    }
}

/// Reflexive, transitive subtype test over the supertype DAG.
///
/// Each erased name is expanded at most once, so diamonds in interface
/// inheritance cost linear time and cycles in a broken hierarchy still
/// terminate. Unknown types are neither matched nor expanded.
#[must_use]
pub fn is_subtype_of(candidate: &dyn Type, fully_qualified_name: &str) -> bool {
    if candidate.is_unknown() {
        return false;
    }
    if candidate.fully_qualified_name() == fully_qualified_name {
        return true;
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(candidate.fully_qualified_name().to_string());
    let found = walk_supertypes(candidate, fully_qualified_name, &mut visited);
    if !found {
        tracing::trace!(
            candidate = candidate.fully_qualified_name(),
            target = fully_qualified_name,
            visited = visited.len(),
            "subtype walk exhausted"
        );
    }
    found
}

fn walk_supertypes(ty: &dyn Type, target: &str, visited: &mut HashSet<String>) -> bool {
    for supertype in ty.direct_supertypes() {
        if supertype.is_unknown() || !visited.insert(supertype.fully_qualified_name().to_string())
        {
            continue;
        }
        if supertype.fully_qualified_name() == target
            || walk_supertypes(&*supertype, target, visited)
        {
            return true;
        }
    }
    false
}
