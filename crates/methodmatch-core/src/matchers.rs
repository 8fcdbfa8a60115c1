//! OR-combinator over method matchers, the entry point used by rules.

use std::sync::Arc;

use crate::builder::MethodMatcherBuilder;
use crate::matcher::MethodMatcher;
use crate::semantic::{MethodSubject, Symbol};

/// Any-of combinator over [`MethodMatcher`]s.
///
/// Holds no matcher at all for [`MethodMatchers::empty`], which never
/// matches. Cloning is cheap and shares the underlying matchers, so one
/// instance can serve many rules and worker threads.
#[derive(Debug, Clone, Default)]
pub struct MethodMatchers {
    matchers: Vec<Arc<MethodMatcher>>,
}

impl MethodMatchers {
    /// Starts building a single matcher.
    pub fn create() -> MethodMatcherBuilder {
        MethodMatcherBuilder::new()
    }

    /// A combinator that matches nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Matches when any of `matchers` matches.
    ///
    /// Nested combinators are flattened; `or` of nothing is [`empty`](Self::empty).
    #[must_use]
    pub fn or<I>(matchers: I) -> Self
    where
        I: IntoIterator<Item = MethodMatchers>,
    {
        Self {
            matchers: matchers.into_iter().flat_map(|m| m.matchers).collect(),
        }
    }

    /// Whether this combinator matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Number of single matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Iterates over the single matchers.
    pub fn iter(&self) -> impl Iterator<Item = &MethodMatcher> {
        self.matchers.iter().map(AsRef::as_ref)
    }

    /// Tests a tree node. Stops at the first matching child.
    #[must_use]
    pub fn matches<S: MethodSubject + ?Sized>(&self, subject: &S) -> bool {
        self.matchers.iter().any(|m| m.matches(subject))
    }

    /// Tests a symbol. Stops at the first matching child.
    #[must_use]
    pub fn matches_symbol(&self, symbol: &dyn Symbol) -> bool {
        self.matchers.iter().any(|m| m.matches_symbol(symbol))
    }
}

impl From<MethodMatcher> for MethodMatchers {
    fn from(matcher: MethodMatcher) -> Self {
        Self {
            matchers: vec![Arc::new(matcher)],
        }
    }
}

impl FromIterator<MethodMatchers> for MethodMatchers {
    fn from_iter<I: IntoIterator<Item = MethodMatchers>>(iter: I) -> Self {
        Self::or(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MethodDef, SiteKind, TypeTable};
    use crate::MatcherError;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn matchers_are_shareable() {
        assert_send_sync::<MethodMatchers>();
        assert_send_sync::<MethodMatcher>();
    }

    fn f_of(owner: &str) -> Result<MethodMatchers, MatcherError> {
        MethodMatchers::create()
            .of_type(owner)
            .name("f")
            .with_any_parameters()
            .build()
    }

    #[test]
    fn empty_matches_nothing() {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        let f = table.declare_method(MethodDef::new("A", "f", &[]));
        let site = table.site(1, SiteKind::Invocation, Some(f), None);

        let empty = MethodMatchers::empty();
        assert!(empty.is_empty());
        assert!(!empty.matches(&site));
        assert!(!empty.matches_symbol(&table.method_ref(f)));
        assert!(MethodMatchers::or([]).is_empty());
    }

    #[test]
    fn or_flattens_and_matches_any_child() -> Result<(), MatcherError> {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        table.declare_class("B", &[]);
        table.declare_class("C", &[]);
        let a = table.declare_method(MethodDef::new("A", "f", &[]));
        let c = table.declare_method(MethodDef::new("C", "f", &[]));

        let inner = MethodMatchers::or([f_of("A")?, f_of("B")?]);
        let combined = MethodMatchers::or([inner, MethodMatchers::empty()]);
        assert_eq!(combined.len(), 2);

        assert!(combined.matches(&table.site(1, SiteKind::Invocation, Some(a), None)));
        assert!(!combined.matches(&table.site(2, SiteKind::Invocation, Some(c), None)));
        Ok(())
    }

    #[test]
    fn reuse_across_threads() -> Result<(), MatcherError> {
        let mut table = TypeTable::new();
        table.declare_class("A", &[]);
        let f = table.declare_method(MethodDef::new("A", "f", &[]));
        let matchers = f_of("A")?;

        std::thread::scope(|scope| {
            for line in 0..4 {
                let matchers = matchers.clone();
                let table = &table;
                scope.spawn(move || {
                    let site = table.site(line, SiteKind::Invocation, Some(f), None);
                    assert!(matchers.matches(&site));
                });
            }
        });
        Ok(())
    }
}
