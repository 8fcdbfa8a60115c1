//! Builder for [`MethodMatcher`] with per-kind freeze validation.

use std::sync::Arc;

use crate::criteria::{NameCriterion, ParametersCriterion, TypeCriterion, TypePredicate};
use crate::error::{CriterionKind, MatcherError};
use crate::matcher::MethodMatcher;
use crate::matchers::MethodMatchers;
use crate::semantic::Type;

/// Build state of one criterion kind.
///
/// `Unset → Configured` on the first specific criterion, `Unset → Frozen`
/// on an "any" criterion. Nothing can be added to a frozen slot and an
/// "any" criterion cannot join a configured one.
#[derive(Debug, Clone)]
enum Slot<T> {
    Unset,
    Configured(Vec<T>),
    Frozen(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> Slot<T> {
    fn push(&mut self, criterion: T, is_any: bool, kind: CriterionKind) -> Result<(), MatcherError> {
        match (std::mem::take(self), is_any) {
            (Self::Unset, true) => *self = Self::Frozen(criterion),
            (Self::Unset, false) => *self = Self::Configured(vec![criterion]),
            (Self::Configured(mut criteria), false) => {
                criteria.push(criterion);
                *self = Self::Configured(criteria);
            }
            (previous @ (Self::Configured(_) | Self::Frozen(_)), _) => {
                *self = previous;
                return Err(MatcherError::ConflictingAny { kind });
            }
        }
        Ok(())
    }

    fn finish(self, kind: CriterionKind) -> Result<Vec<T>, MatcherError> {
        match self {
            Self::Unset => Err(MatcherError::Incomplete { kind }),
            Self::Configured(criteria) => Ok(criteria),
            Self::Frozen(any) => Ok(vec![any]),
        }
    }
}

/// Fluent builder for a single method matcher.
///
/// Obtain one from [`MethodMatchers::create`]. Criteria of the same kind are
/// OR'd; the three kinds are AND'ed. The first misuse is remembered and
/// returned by [`build`](Self::build), later calls cannot hide it.
///
/// ```ignore
/// let matcher = MethodMatchers::create()
///     .of_sub_type("java.sql.Statement")
///     .names(["execute", "executeQuery"])
///     .with_any_parameters()
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until `build()` is called"]
pub struct MethodMatcherBuilder {
    types: Slot<TypeCriterion>,
    names: Slot<NameCriterion>,
    parameters: Slot<ParametersCriterion>,
    error: Option<MatcherError>,
}

impl MethodMatcherBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(mut self, result: Result<(), MatcherError>) -> Self {
        if let Err(err) = result {
            tracing::debug!(error = %err, "method matcher misconfigured");
            self.error.get_or_insert(err);
        }
        self
    }

    // ── owner type ──────────────────────────────

    /// Adds a type criterion.
    pub fn of_type_criterion(mut self, criterion: TypeCriterion) -> Self {
        let is_any = criterion.is_any();
        let result = self.types.push(criterion, is_any, CriterionKind::Type);
        self.record(result)
    }

    /// Owner is exactly the named type.
    pub fn of_type(self, fully_qualified_name: impl Into<String>) -> Self {
        self.of_type_criterion(TypeCriterion::is(fully_qualified_name))
    }

    /// Owner is exactly one of the named types.
    pub fn of_types<I, S>(self, fully_qualified_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fully_qualified_names
            .into_iter()
            .fold(self, |builder, name| builder.of_type(name))
    }

    /// Owner is the named type or one of its subtypes.
    pub fn of_sub_type(self, fully_qualified_name: impl Into<String>) -> Self {
        self.of_type_criterion(TypeCriterion::subtype_of(fully_qualified_name))
    }

    /// Owner is one of the named types or one of their subtypes.
    pub fn of_sub_types<I, S>(self, fully_qualified_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        fully_qualified_names
            .into_iter()
            .fold(self, |builder, name| builder.of_sub_type(name))
    }

    /// Any owner type. Exclusive with other type criteria.
    pub fn of_any_type(self) -> Self {
        self.of_type_criterion(TypeCriterion::Any)
    }

    /// Owner accepted by `predicate`.
    pub fn of_type_matching<F>(self, predicate: F) -> Self
    where
        F: Fn(&dyn Type) -> bool + Send + Sync + 'static,
    {
        self.of_type_criterion(TypeCriterion::matching(predicate))
    }

    // ── name ────────────────────────────────────

    /// Adds a name criterion.
    pub fn name_criterion(mut self, criterion: NameCriterion) -> Self {
        let is_any = criterion.is_any();
        let result = self.names.push(criterion, is_any, CriterionKind::Name);
        self.record(result)
    }

    /// Method is named exactly `name`.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.name_criterion(NameCriterion::one_of([name]))
    }

    /// Method is named exactly one of `names`.
    pub fn names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_criterion(NameCriterion::one_of(names))
    }

    /// Method name starts with `prefix`.
    pub fn start_with_name(self, prefix: impl Into<String>) -> Self {
        self.name_criterion(NameCriterion::Prefix(prefix.into()))
    }

    /// Any method name. Exclusive with other name criteria.
    pub fn any_name(self) -> Self {
        self.name_criterion(NameCriterion::Any)
    }

    /// Method name accepted by `predicate`.
    pub fn name_matching<F>(self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.name_criterion(NameCriterion::Predicate(Arc::new(predicate)))
    }

    /// Constructors.
    pub fn constructor(self) -> Self {
        self.name_criterion(NameCriterion::Constructor)
    }

    // ── parameters ──────────────────────────────

    /// Adds a signature alternative.
    pub fn parameters_criterion(mut self, criterion: ParametersCriterion) -> Self {
        let is_any = criterion.is_any();
        let result = self
            .parameters
            .push(criterion, is_any, CriterionKind::Parameters);
        self.record(result)
    }

    /// Alternative: no parameters.
    pub fn without_parameters(self) -> Self {
        self.parameters_criterion(ParametersCriterion::NoParameters)
    }

    /// Alternative: exactly these parameter types, by fully qualified name.
    ///
    /// An empty list is the same as [`without_parameters`](Self::without_parameters).
    pub fn with_parameters<I, S>(self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let criteria: Vec<TypeCriterion> = type_names.into_iter().map(TypeCriterion::is).collect();
        self.with_parameter_criteria(criteria)
    }

    /// Alternative: exactly these parameter criteria.
    pub fn with_parameter_criteria<I>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = TypeCriterion>,
    {
        let criteria: Vec<TypeCriterion> = criteria.into_iter().collect();
        if criteria.is_empty() {
            self.without_parameters()
        } else {
            self.parameters_criterion(ParametersCriterion::ExactSequence(criteria))
        }
    }

    /// Alternative: one predicate per parameter position.
    pub fn with_parameters_matching<I>(self, predicates: I) -> Self
    where
        I: IntoIterator<Item = TypePredicate>,
    {
        let predicates: Vec<TypePredicate> = predicates.into_iter().collect();
        self.parameters_criterion(ParametersCriterion::PredicateSequence(predicates))
    }

    /// Alternative: the whole parameter list accepted by `predicate`,
    /// whatever its length.
    pub fn with_parameters_where<F>(self, predicate: F) -> Self
    where
        F: for<'a, 'b> Fn(&'a [Box<dyn Type + 'b>]) -> bool + Send + Sync + 'static,
    {
        self.parameters_criterion(ParametersCriterion::Predicate(Arc::new(predicate)))
    }

    /// Alternative: leading parameter types, trailing ones unconstrained.
    pub fn start_with_parameters<I, S>(self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let criteria = type_names.into_iter().map(TypeCriterion::is).collect();
        self.parameters_criterion(ParametersCriterion::PrefixSequence(criteria))
    }

    /// Alternative: leading parameters accepted by these predicates.
    pub fn start_with_parameters_matching<I>(self, predicates: I) -> Self
    where
        I: IntoIterator<Item = TypePredicate>,
    {
        let criteria = predicates.into_iter().map(TypeCriterion::Predicate).collect();
        self.parameters_criterion(ParametersCriterion::PrefixSequence(criteria))
    }

    /// Any parameter list. Exclusive with other parameter criteria.
    pub fn with_any_parameters(self) -> Self {
        self.parameters_criterion(ParametersCriterion::AnyParameters)
    }

    // ── build ───────────────────────────────────

    /// Validates and builds a single [`MethodMatcher`].
    ///
    /// # Errors
    ///
    /// Returns the first recorded misuse, or [`MatcherError::Incomplete`]
    /// for the first kind (type, name, parameters) left unset.
    pub fn build_matcher(self) -> Result<MethodMatcher, MatcherError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let matcher = MethodMatcher::new(
            self.types.finish(CriterionKind::Type)?,
            self.names.finish(CriterionKind::Name)?,
            self.parameters.finish(CriterionKind::Parameters)?,
        );
        tracing::debug!(matcher = %matcher, "built method matcher");
        Ok(matcher)
    }

    /// Validates and builds a [`MethodMatchers`] holding this one matcher.
    ///
    /// # Errors
    ///
    /// See [`build_matcher`](Self::build_matcher).
    pub fn build(self) -> Result<MethodMatchers, MatcherError> {
        self.build_matcher().map(MethodMatchers::from)
    }
}
