//! # methodmatch-core
//!
//! Declarative method matchers over an already-resolved semantic model.
//!
//! A [`MethodMatcher`] combines three kinds of criteria: the owner type
//! (exact, subtype-inclusive, any or predicate), the method name (exact,
//! prefix, any, predicate or constructor) and the parameter signature
//! (none, any, exact, prefix or predicate sequence). Alternatives within a
//! kind are OR'd, the kinds are AND'ed, and [`MethodMatchers`] OR's whole
//! matchers together.
//!
//! This crate provides:
//!
//! - [`MethodMatcherBuilder`] for assembling matchers with validation
//! - the [`semantic`] boundary traits a host model implements
//! - a reference in-memory [`model`] with TOML snapshot files
//! - [`declarative`] matcher groups loaded from `[[matcher]]` tables
//! - [`MatchReport`] for collecting findings
//!
//! ## Example
//!
//! ```
//! use methodmatch_core::model::{MethodDef, SiteKind, TypeTable};
//! use methodmatch_core::MethodMatchers;
//!
//! let mut table = TypeTable::new();
//! table.declare_class("pkg.A", &[]);
//! let f = table.declare_method(MethodDef::new("pkg.A", "f", &["int"]));
//!
//! let matchers = MethodMatchers::create()
//!     .of_sub_type("pkg.A")
//!     .name("f")
//!     .with_parameters(["int"])
//!     .build()?;
//!
//! let call = table.site(3, SiteKind::Invocation, Some(f), Some("pkg.A"));
//! assert!(matchers.matches(&call));
//! # Ok::<(), methodmatch_core::MatcherError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod matcher;
mod matchers;
mod types;

pub mod criteria;
pub mod declarative;
pub mod model;
pub mod semantic;

pub use builder::MethodMatcherBuilder;
pub use config::{Config, ConfigError, Settings};
pub use error::{CriterionKind, MatcherError};
pub use matcher::MethodMatcher;
pub use matchers::MethodMatchers;
pub use semantic::{MethodSubject, Symbol, Type, CONSTRUCTOR_NAME};
pub use types::{Finding, Location, MatchReport, Severity};
