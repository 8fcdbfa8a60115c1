//! Matchers for `String` methods whose first argument is a regular expression.

use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for inappropriate-regexp.
pub const CODE: &str = "S2639";

/// Catalog name for inappropriate-regexp.
pub const NAME: &str = "inappropriate-regexp";

/// Catalog entry for inappropriate-regexp.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Inappropriate regular expressions should not be used",
    message: "Correct this regular expression.",
    severity: Severity::Error,
    build: matchers,
};

/// Builds the inappropriate-regexp matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    MethodMatchers::create()
        .of_type("java.lang.String")
        .names(["replaceAll", "replaceFirst"])
        .with_any_parameters()
        .build()
}
