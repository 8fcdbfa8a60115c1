//! Matchers for random floating point sources.
//!
//! A random `double` in `[0, 1)` cast to `int` is always `0`; callers who
//! want a random integer should ask for one.

use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for random-float-to-int.
pub const CODE: &str = "S2140";

/// Catalog name for random-float-to-int.
pub const NAME: &str = "random-float-to-int";

const NEXT_FLOAT: &str = "nextFloat";
const NEXT_DOUBLE: &str = "nextDouble";

const RANDOM_SOURCES: &[&str] = &[
    "java.util.Random",
    "org.apache.commons.lang.math.JVMRandom",
    "org.apache.commons.lang.math.RandomUtils",
    "org.apache.commons.lang3.RandomUtils",
];

/// Catalog entry for random-float-to-int.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Methods of \"Random\" that return floating point values should not be used in random integer generation",
    message: "Use \"nextInt()\" instead.",
    severity: Severity::Warning,
    build: matchers,
};

/// Builds the random-float-to-int matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    Ok(MethodMatchers::or([
        MethodMatchers::create()
            .of_type("java.lang.Math")
            .name("random")
            .without_parameters()
            .build()?,
        MethodMatchers::create()
            .of_types(RANDOM_SOURCES.iter().copied())
            .names([NEXT_DOUBLE, NEXT_FLOAT])
            .without_parameters()
            .build()?,
        MethodMatchers::create()
            .of_type("java.util.concurrent.ThreadLocalRandom")
            .name(NEXT_DOUBLE)
            .with_any_parameters()
            .build()?,
    ]))
}
