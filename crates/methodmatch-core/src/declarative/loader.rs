//! DTO → matcher group conversion with validation.

use crate::error::MatcherError;
use crate::matchers::MethodMatchers;
use crate::types::Severity;

use super::config_dto::{MatcherDto, MatchersConfigDto};
use super::model::{MatcherGroup, MatcherId, ModelError};

/// Errors during DTO → domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field-level validation error.
    #[error("{context}: {source}")]
    Validation {
        /// Where the error occurred (e.g., "matcher[0].id").
        context: String,
        /// The underlying model error.
        source: ModelError,
    },

    /// Unknown severity string.
    #[error("{context}: unknown severity `{value}`, expected: error, warning, info")]
    UnknownSeverity {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },

    /// The table does not describe a valid matcher.
    #[error("{context}: {source}")]
    Matcher {
        /// Where the error occurred (e.g., "matcher[2]").
        context: String,
        /// The builder error.
        source: MatcherError,
    },
}

struct PendingGroup {
    id: MatcherId,
    matchers: Vec<MethodMatchers>,
    message: Option<String>,
    severity: Option<Severity>,
}

/// Converts a `MatchersConfigDto` into matcher groups, in order of first
/// appearance.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: MatchersConfigDto) -> Result<Vec<MatcherGroup>, LoadError> {
    let mut pending: Vec<PendingGroup> = Vec::new();

    for (i, matcher) in dto.matchers.into_iter().enumerate() {
        let ctx = format!("matcher[{i}]");
        let id = MatcherId::new(&matcher.id).map_err(|e| LoadError::Validation {
            context: format!("{ctx}.id"),
            source: e,
        })?;
        let severity = matcher
            .severity
            .as_deref()
            .map(|s| parse_severity(s, &format!("{ctx}.severity")))
            .transpose()?;
        let built = build_matcher(&matcher).map_err(|e| LoadError::Matcher {
            context: ctx.clone(),
            source: e,
        })?;

        let index = match pending.iter().position(|g| g.id == id) {
            Some(index) => index,
            None => {
                pending.push(PendingGroup {
                    id,
                    matchers: Vec::new(),
                    message: None,
                    severity: None,
                });
                pending.len() - 1
            }
        };
        let group = &mut pending[index];
        merge(&mut group.message, matcher.message, &group.id, "message", &ctx)?;
        merge(&mut group.severity, severity, &group.id, "severity", &ctx)?;
        group.matchers.push(built);
    }

    let groups: Vec<MatcherGroup> = pending
        .into_iter()
        .map(|g| {
            let message = g
                .message
                .unwrap_or_else(|| format!("call matched by `{}`", g.id));
            MatcherGroup::new(
                g.id,
                MethodMatchers::or(g.matchers),
                message,
                g.severity.unwrap_or(Severity::Warning),
            )
        })
        .collect();
    tracing::debug!(groups = groups.len(), "loaded declarative matchers");
    Ok(groups)
}

fn merge<T: PartialEq>(
    slot: &mut Option<T>,
    value: Option<T>,
    id: &MatcherId,
    field: &'static str,
    ctx: &str,
) -> Result<(), LoadError> {
    match (slot.as_ref(), value) {
        (_, None) => Ok(()),
        (None, Some(value)) => {
            *slot = Some(value);
            Ok(())
        }
        (Some(existing), Some(value)) if *existing == value => Ok(()),
        (Some(_), Some(_)) => Err(LoadError::Validation {
            context: format!("{ctx}.{field}"),
            source: ModelError::InconsistentGroup {
                id: id.to_string(),
                field,
            },
        }),
    }
}

fn build_matcher(dto: &MatcherDto) -> Result<MethodMatchers, MatcherError> {
    let mut builder = MethodMatchers::create();

    if !dto.types.is_empty() {
        builder = builder.of_types(dto.types.iter().cloned());
    }
    if !dto.subtypes.is_empty() {
        builder = builder.of_sub_types(dto.subtypes.iter().cloned());
    }
    if dto.any_type {
        builder = builder.of_any_type();
    }

    if !dto.names.is_empty() {
        builder = builder.names(dto.names.iter().cloned());
    }
    if let Some(prefix) = &dto.name_prefix {
        builder = builder.start_with_name(prefix.clone());
    }
    if dto.constructor {
        builder = builder.constructor();
    }
    if dto.any_name {
        builder = builder.any_name();
    }

    match &dto.parameters {
        Some(signatures) if signatures.is_empty() => builder = builder.without_parameters(),
        Some(signatures) => {
            for signature in signatures {
                builder = builder.with_parameters(signature.iter().cloned());
            }
        }
        None => {}
    }
    for prefix in &dto.parameter_prefixes {
        builder = builder.start_with_parameters(prefix.iter().cloned());
    }
    if dto.any_parameters {
        builder = builder.with_any_parameters();
    }

    builder.build()
}

fn parse_severity(value: &str, context: &str) -> Result<Severity, LoadError> {
    Severity::parse(value).ok_or_else(|| LoadError::UnknownSeverity {
        context: context.to_string(),
        value: value.to_string(),
    })
}
