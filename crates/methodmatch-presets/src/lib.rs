//! # methodmatch-presets
//!
//! Ready-made method matcher catalogs for methodmatch.
//!
//! Each entry targets a family of well-known APIs and is built through the
//! public [`MethodMatchers`](methodmatch_core::MethodMatchers) builder.
//!
//! ## Available Entries
//!
//! | Code | Name | Targets |
//! |------|------|---------|
//! | S2077 | `sql-injection` | JDBC, Hibernate, JPA, Spring JDBC and JDO query APIs |
//! | S2129 | `string-primitive-constructor` | `new String(..)`, `new Integer(int)`, ... |
//! | S2140 | `random-float-to-int` | `Math.random()`, `Random.nextDouble()`, ... |
//! | S2441 | `session-attribute` | `HttpSession.setAttribute(String, ?)` |
//! | S2639 | `inappropriate-regexp` | `String.replaceAll` / `replaceFirst` |
//! | S3864 | `stream-peek` | `peek` on the four stream types |
//! | S5304 | `env-variables` | `System.getenv`, `ProcessBuilder.environment`, `Runtime.exec` |
//!
//! ## Usage
//!
//! ```
//! use methodmatch_presets::{resolve, Preset};
//!
//! let groups = resolve(&["security", "S3864"])?;
//! assert_eq!(groups.len(), Preset::Security.entries().len() + 1);
//! # Ok::<(), methodmatch_presets::PresetError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod env_variables;
pub mod inappropriate_regexp;
pub mod random_float_to_int;
pub mod session_attribute;
pub mod sql_injection;
pub mod stream_peek;
pub mod string_primitive_constructor;

mod presets;

pub use presets::{find, listing, resolve, CatalogEntry, Preset, PresetError, CATALOG};

/// Re-export core types for convenience.
pub use methodmatch_core::{MethodMatchers, Severity};
