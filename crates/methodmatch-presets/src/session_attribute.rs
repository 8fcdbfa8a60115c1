//! Matchers for objects stored in an HTTP session.
//!
//! Session attributes may be serialized by the container, so whatever
//! reaches `HttpSession.setAttribute` should be serializable.

use methodmatch_core::criteria::TypeCriterion;
use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for session-attribute.
pub const CODE: &str = "S2441";

/// Catalog name for session-attribute.
pub const NAME: &str = "session-attribute";

/// Catalog entry for session-attribute.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Non-serializable objects should not be stored in \"HttpSession\" objects",
    message: "Make sure the stored object is serializable or don't store it in the session.",
    severity: Severity::Warning,
    build: matchers,
};

/// Builds the session-attribute matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    MethodMatchers::create()
        .of_type("javax.servlet.http.HttpSession")
        .name("setAttribute")
        .with_parameter_criteria([TypeCriterion::is("java.lang.String"), TypeCriterion::Any])
        .build()
}
