//! Domain model for declarative matcher groups.
//!
//! This module contains no serde and no I/O dependencies.
//! Invariants are enforced at construction time via validated newtypes.

use std::fmt;

use crate::matchers::MethodMatchers;
use crate::types::Severity;

/// A validated matcher group id: non-empty, `[A-Za-z0-9._-]` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatcherId(String);

impl MatcherId {
    /// Creates a new matcher id.
    ///
    /// # Errors
    ///
    /// Returns error if the id is empty or contains invalid characters.
    pub fn new(id: &str) -> Result<Self, ModelError> {
        if id.is_empty() {
            return Err(ModelError::EmptyId);
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ModelError::InvalidId { id: id.to_string() });
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatcherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named matchers reported together with one message and severity.
#[derive(Debug, Clone)]
pub struct MatcherGroup {
    id: MatcherId,
    matchers: MethodMatchers,
    message: String,
    severity: Severity,
}

impl MatcherGroup {
    /// Creates a new group.
    #[must_use]
    pub fn new(
        id: MatcherId,
        matchers: MethodMatchers,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            matchers,
            message: message.into(),
            severity,
        }
    }

    /// Group id.
    #[must_use]
    pub fn id(&self) -> &MatcherId {
        &self.id
    }

    /// The OR'd matchers of the group.
    #[must_use]
    pub fn matchers(&self) -> &MethodMatchers {
        &self.matchers
    }

    /// Message attached to every finding.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity of every finding.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Errors from model construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Matcher id is empty.
    #[error("matcher id must not be empty")]
    EmptyId,

    /// Matcher id contains invalid characters.
    #[error("invalid matcher id `{id}`: must be [A-Za-z0-9._-]")]
    InvalidId {
        /// The invalid id.
        id: String,
    },

    /// Two tables of the same group disagree on a group-level field.
    #[error("group `{id}` sets `{field}` more than once with different values")]
    InconsistentGroup {
        /// The group id.
        id: String,
        /// The conflicting field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_id_valid() {
        assert!(MatcherId::new("S2077").is_ok());
        assert!(MatcherId::new("no-peek_v2.1").is_ok());
    }

    #[test]
    fn matcher_id_empty_rejected() {
        assert_eq!(MatcherId::new(""), Err(ModelError::EmptyId));
    }

    #[test]
    fn matcher_id_invalid_chars_rejected() {
        assert!(matches!(
            MatcherId::new("no peek"),
            Err(ModelError::InvalidId { .. })
        ));
    }

    #[test]
    fn group_accessors() {
        let id = MatcherId::new("g").unwrap();
        let group = MatcherGroup::new(id, MethodMatchers::empty(), "msg", Severity::Info);
        assert_eq!(group.id().as_str(), "g");
        assert_eq!(group.message(), "msg");
        assert_eq!(group.severity(), Severity::Info);
        assert!(group.matchers().is_empty());
    }
}
