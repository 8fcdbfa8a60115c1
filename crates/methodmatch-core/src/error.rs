//! Configuration errors raised while building matchers.

use miette::Diagnostic;
use std::fmt;

/// The three criterion kinds a matcher combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    /// Owner (or call-site) type criteria.
    Type,
    /// Method name criteria.
    Name,
    /// Parameter signature criteria.
    Parameters,
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type"),
            Self::Name => write!(f, "name"),
            Self::Parameters => write!(f, "parameters"),
        }
    }
}

/// Misuse of the matcher builder.
///
/// These are programmer errors in the rule that builds the matcher. They
/// are reported from `build()` and never turned into a non-match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum MatcherError {
    /// A criterion kind was never populated.
    #[error("method matcher has no {kind} criteria")]
    #[diagnostic(
        code(methodmatch::incomplete),
        help("every matcher needs at least one type, one name and one parameters criterion")
    )]
    Incomplete {
        /// The missing kind.
        kind: CriterionKind,
    },

    /// An "any" criterion was mixed with specific criteria of the same kind.
    #[error("'any' {kind} criterion cannot be combined with other {kind} criteria")]
    #[diagnostic(
        code(methodmatch::conflicting_any),
        help("drop either the 'any' criterion or the specific ones")
    )]
    ConflictingAny {
        /// The conflicting kind.
        kind: CriterionKind,
    },
}

impl MatcherError {
    /// The criterion kind this error is about.
    #[must_use]
    pub fn kind(&self) -> CriterionKind {
        match self {
            Self::Incomplete { kind } | Self::ConflictingAny { kind } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = MatcherError::Incomplete {
            kind: CriterionKind::Parameters,
        };
        assert_eq!(err.to_string(), "method matcher has no parameters criteria");
        let err = MatcherError::ConflictingAny {
            kind: CriterionKind::Name,
        };
        assert_eq!(
            err.to_string(),
            "'any' name criterion cannot be combined with other name criteria"
        );
        assert_eq!(err.kind(), CriterionKind::Name);
    }

    #[test]
    fn diagnostic_code() {
        let err = MatcherError::Incomplete {
            kind: CriterionKind::Type,
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("methodmatch::incomplete"));
    }
}
