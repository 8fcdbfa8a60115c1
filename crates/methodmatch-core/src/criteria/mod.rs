//! Leaf criteria combined by a [`MethodMatcher`](crate::MethodMatcher).
//!
//! Each matcher holds one OR'd set per kind: owner type, name, parameters.

pub mod names;
pub mod parameters;
pub mod types;

pub use names::{NameCriterion, NamePredicate};
pub use parameters::{ParametersCriterion, ParametersPredicate};
pub use types::{is_subtype_of, TypeCriterion, TypePredicate};
