//! Matchers for reads of the process environment.
//!
//! # Detected Patterns
//!
//! - `System.getenv(..)`
//! - `ProcessBuilder.environment()`
//! - `Runtime.exec(..)`, which may pass an environment to the child

use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for env-variables.
pub const CODE: &str = "S5304";

/// Catalog name for env-variables.
pub const NAME: &str = "env-variables";

/// Catalog entry for env-variables.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Using environment variables is security-sensitive",
    message: "Make sure that environment variables are used safely here.",
    severity: Severity::Warning,
    build: matchers,
};

/// Builds the env-variables matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    Ok(MethodMatchers::or([
        MethodMatchers::create()
            .of_type("java.lang.System")
            .name("getenv")
            .with_any_parameters()
            .build()?,
        MethodMatchers::create()
            .of_type("java.lang.ProcessBuilder")
            .name("environment")
            .without_parameters()
            .build()?,
        MethodMatchers::create()
            .of_type("java.lang.Runtime")
            .name("exec")
            .with_any_parameters()
            .build()?,
    ]))
}
