//! Matchers for `Stream.peek` calls.
//!
//! # Rationale
//!
//! `peek` exists for debugging. Streams may skip it entirely when the
//! terminal operation does not need the elements, so side effects in it
//! are unreliable.
//!
//! # Detected Patterns
//!
//! - `peek(..)` on `Stream`, `IntStream`, `LongStream` and `DoubleStream`

use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::presets::CatalogEntry;

/// Catalog code for stream-peek.
pub const CODE: &str = "S3864";

/// Catalog name for stream-peek.
pub const NAME: &str = "stream-peek";

const STREAM_TYPES: &[&str] = &[
    "java.util.stream.Stream",
    "java.util.stream.IntStream",
    "java.util.stream.LongStream",
    "java.util.stream.DoubleStream",
];

/// Catalog entry for stream-peek.
pub const ENTRY: CatalogEntry = CatalogEntry {
    code: CODE,
    name: NAME,
    description: "\"Stream.peek\" should be used with caution",
    message: "Remove this use of \"Stream.peek\".",
    severity: Severity::Warning,
    build: matchers,
};

/// Builds the stream-peek matchers.
///
/// # Errors
///
/// Returns an error if a matcher definition is invalid.
pub fn matchers() -> Result<MethodMatchers, MatcherError> {
    MethodMatchers::create()
        .of_types(STREAM_TYPES.iter().copied())
        .name("peek")
        .with_any_parameters()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodmatch_core::model::{MethodDef, SiteKind, TypeTable};

    #[test]
    fn matches_peek_on_every_stream_type() {
        let matchers = matchers().unwrap();
        let mut table = TypeTable::new();
        table.declare_interface("java.util.stream.BaseStream", &[]);
        for ty in STREAM_TYPES {
            table.declare_interface(ty, &["java.util.stream.BaseStream"]);
        }
        table.declare_interface("java.util.function.Consumer", &[]);
        let peek = table.declare_method(MethodDef::new(
            "java.util.stream.Stream",
            "peek",
            &["java.util.function.Consumer"],
        ));
        let map = table.declare_method(MethodDef::new(
            "java.util.stream.Stream",
            "map",
            &["java.util.function.Function"],
        ));

        for ty in STREAM_TYPES {
            let site = table.site(1, SiteKind::Invocation, Some(peek), Some(ty));
            assert!(matchers.matches(&site), "{ty}");
        }
        let map_call = table.site(2, SiteKind::Invocation, Some(map), Some(STREAM_TYPES[0]));
        assert!(!matchers.matches(&map_call));
    }

    #[test]
    fn exact_types_only() {
        let matchers = matchers().unwrap();
        let mut table = TypeTable::new();
        table.declare_interface("java.util.stream.Stream", &[]);
        table.declare_class("my.Stream", &["java.util.stream.Stream"]);
        let peek = table.declare_method(MethodDef::new("my.Stream", "peek", &[]));
        let site = table.site(3, SiteKind::Invocation, Some(peek), Some("my.Stream"));
        assert!(!matchers.matches(&site));
    }
}
