//! Catalog entries and preset groupings.

use methodmatch_core::declarative::{MatcherGroup, MatcherId, ModelError};
use methodmatch_core::{MatcherError, MethodMatchers, Severity};

use crate::{
    env_variables, inappropriate_regexp, random_float_to_int, session_attribute, sql_injection,
    stream_peek, string_primitive_constructor,
};

/// A named, ready-made set of matchers.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Stable code (e.g., "S3864").
    pub code: &'static str,
    /// Kebab-case name (e.g., "stream-peek").
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Message attached to findings.
    pub message: &'static str,
    /// Default severity of findings.
    pub severity: Severity,
    pub(crate) build: fn() -> Result<MethodMatchers, MatcherError>,
}

impl CatalogEntry {
    /// Builds this entry's matchers.
    ///
    /// # Errors
    ///
    /// Returns an error if a matcher definition is invalid.
    pub fn matchers(&self) -> Result<MethodMatchers, MatcherError> {
        (self.build)()
    }

    /// Builds this entry as a matcher group keyed by its code.
    ///
    /// # Errors
    ///
    /// Returns an error if a matcher definition is invalid.
    pub fn group(&self) -> Result<MatcherGroup, PresetError> {
        let matchers = self.matchers().map_err(|source| PresetError::Matcher {
            code: self.code,
            source,
        })?;
        let id = MatcherId::new(self.code).map_err(|source| PresetError::Id {
            code: self.code,
            source,
        })?;
        Ok(MatcherGroup::new(id, matchers, self.message, self.severity))
    }
}

/// Every catalog entry, in code order.
pub const CATALOG: &[CatalogEntry] = &[
    sql_injection::ENTRY,
    string_primitive_constructor::ENTRY,
    random_float_to_int::ENTRY,
    session_attribute::ENTRY,
    inappropriate_regexp::ENTRY,
    stream_peek::ENTRY,
    env_variables::ENTRY,
];

/// Looks an entry up by name or code.
#[must_use]
pub fn find(name_or_code: &str) -> Option<&'static CatalogEntry> {
    CATALOG
        .iter()
        .find(|e| e.name == name_or_code || e.code == name_or_code)
}

/// Preset groupings of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Bug-prone API usage with few false positives.
    Recommended,
    /// Security-sensitive APIs.
    Security,
    /// Every catalog entry.
    All,
}

impl Preset {
    /// All presets, for listings.
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Security, Self::All];

    /// Parses a preset name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "security" => Some(Self::Security),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Security => "security",
            Self::All => "all",
        }
    }

    /// Returns the entries for this preset.
    #[must_use]
    pub fn entries(self) -> Vec<&'static CatalogEntry> {
        let codes: &[&str] = match self {
            Self::Recommended => &[
                string_primitive_constructor::CODE,
                random_float_to_int::CODE,
                inappropriate_regexp::CODE,
                stream_peek::CODE,
            ],
            Self::Security => &[
                sql_injection::CODE,
                session_attribute::CODE,
                env_variables::CODE,
            ],
            Self::All => return CATALOG.iter().collect(),
        };
        CATALOG.iter().filter(|e| codes.contains(&e.code)).collect()
    }
}

/// Errors from building preset matchers.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// A catalog matcher failed to build.
    #[error("preset {code}: {source}")]
    Matcher {
        /// Entry code.
        code: &'static str,
        /// Builder error.
        source: MatcherError,
    },

    /// A catalog code is not a valid matcher id.
    #[error("preset {code}: {source}")]
    Id {
        /// Entry code.
        code: &'static str,
        /// Validation error.
        source: ModelError,
    },
}

/// Resolves preset names, entry names and codes into matcher groups.
///
/// Each entry appears once, in catalog order. Unknown names are logged and
/// skipped.
///
/// # Errors
///
/// Returns an error if a selected entry fails to build.
pub fn resolve<S: AsRef<str>>(selection: &[S]) -> Result<Vec<MatcherGroup>, PresetError> {
    let mut selected: Vec<&'static str> = Vec::new();
    for item in selection {
        let item = item.as_ref();
        let entries = if let Some(preset) = Preset::parse(item) {
            preset.entries()
        } else if let Some(entry) = find(item) {
            vec![entry]
        } else {
            tracing::warn!(preset = item, "unknown preset, skipping");
            continue;
        };
        for entry in entries {
            if !selected.contains(&entry.code) {
                selected.push(entry.code);
            }
        }
    }

    let groups = CATALOG
        .iter()
        .filter(|e| selected.contains(&e.code))
        .map(CatalogEntry::group)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(groups = groups.len(), "resolved presets");
    Ok(groups)
}

/// Human-readable table of the catalog and the presets.
#[must_use]
pub fn listing() -> String {
    use std::fmt::Write;

    let mut out = String::from("Catalog:\n");
    for entry in CATALOG {
        let _ = writeln!(out, "  {:<6} {:<29} {}", entry.code, entry.name, entry.severity);
    }
    out.push_str("\nPresets:\n");
    for preset in Preset::ALL {
        let codes: Vec<&str> = preset.entries().iter().map(|e| e.code).collect();
        let _ = writeln!(out, "  {:<12} {}", preset.name(), codes.join(", "));
    }
    out
}
