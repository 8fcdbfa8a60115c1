//! Declarative method matchers driven by TOML configuration.
//!
//! Each `[[matcher]]` table describes one [`MethodMatcher`](crate::MethodMatcher);
//! tables sharing an `id` are OR'd into one [`MatcherGroup`].
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + build through MethodMatcherBuilder
//! Vec<MatcherGroup>
//! ```
//!
//! # Example
//!
//! ```toml
//! [[matcher]]
//! id = "no-peek"
//! subtypes = ["java.util.stream.BaseStream"]
//! names = ["peek"]
//! any-parameters = true
//! message = "Remove this use of \"Stream.peek\"."
//! severity = "error"
//! ```

pub mod config_dto;
pub mod loader;
pub mod model;

pub use loader::LoadError;
pub use model::{MatcherGroup, MatcherId, ModelError};

/// Parses TOML content and builds all declared matcher groups.
///
/// Returns `Ok(vec![])` if no `[[matcher]]` tables are present. Other
/// top-level tables are ignored.
///
/// # Errors
///
/// Returns an error if TOML parsing, validation or a matcher build fails.
pub fn load_matchers_from_toml(content: &str) -> Result<Vec<MatcherGroup>, LoadError> {
    let dto: config_dto::MatchersConfigDto = toml::from_str(content)?;
    loader::load(dto)
}
