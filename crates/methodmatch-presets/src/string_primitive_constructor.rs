//! Matchers for constructors of strings and boxed primitives.
//!
//! `new Integer(42)` and friends allocate where `Integer.valueOf(42)` or
//! a literal would reuse a cached instance.

use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for string-primitive-constructor.
pub const CODE: &str = "S2129";

/// Catalog name for string-primitive-constructor.
pub const NAME: &str = "string-primitive-constructor";

const STRING: &str = "java.lang.String";

/// Boxed type and the single argument type of its flagged constructor.
const BOXED_CONSTRUCTORS: &[(&str, &str)] = &[
    ("java.lang.String", STRING),
    ("java.lang.Byte", "byte"),
    ("java.lang.Character", "char"),
    ("java.lang.Short", "short"),
    ("java.lang.Integer", "int"),
    ("java.lang.Long", "long"),
    ("java.lang.Float", "float"),
    ("java.lang.Double", "double"),
    ("java.lang.Boolean", "boolean"),
    ("java.math.BigInteger", STRING),
];

/// Catalog entry for string-primitive-constructor.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "Constructors should not be used to instantiate \"String\", \"BigInteger\", \"BigDecimal\" and primitive-wrapper classes",
    message: "Remove this constructor.",
    severity: Severity::Warning,
    build: matchers,
};

/// Builds the string-primitive-constructor matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    let empty_string = MethodMatchers::create()
        .of_type(STRING)
        .constructor()
        .without_parameters()
        .build()?;
    let boxed = BOXED_CONSTRUCTORS
        .iter()
        .map(|(ty, param)| {
            MethodMatchers::create()
                .of_type(*ty)
                .constructor()
                .with_parameters([*param])
                .build()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MethodMatchers::or(std::iter::once(empty_string).chain(boxed)))
}
