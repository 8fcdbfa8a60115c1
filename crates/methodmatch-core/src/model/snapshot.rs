//! Semantic snapshot files: a resolved program as TOML.
//!
//! ```toml
//! [[types]]
//! name = "pkg.B"
//! kind = "class"
//! extends = ["pkg.A", "pkg.I"]
//!
//! [[methods]]
//! id = "B.f(int)"
//! owner = "pkg.B"
//! name = "f"
//! params = ["int"]
//!
//! [[sites]]
//! line = 29
//! kind = "invocation"
//! method = "B.f(int)"
//! receiver = "pkg.B"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{MethodDef, MethodId, Site, SiteKind, SiteRef, TypeKind, TypeTable};
use crate::declarative::MatcherGroup;
use crate::matchers::MethodMatchers;
use crate::semantic::CONSTRUCTOR_NAME;
use crate::types::{Finding, Location, MatchReport};

/// Errors from loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required name is empty.
    #[error("{context}: name must not be empty")]
    EmptyName {
        /// Where the error occurred (e.g. "types[2].name").
        context: String,
    },

    /// A method sets both `name` and `constructor`, or neither.
    #[error("{context}: exactly one of `name` or `constructor = true` must be set")]
    AmbiguousMethodName {
        /// Where the error occurred.
        context: String,
    },

    /// Two methods share an id.
    #[error("{context}: duplicate method id `{id}`")]
    DuplicateMethod {
        /// Where the error occurred.
        context: String,
        /// The duplicated id.
        id: String,
    },

    /// A site refers to a method id that is not declared.
    #[error("{context}: unknown method id `{id}`")]
    UnknownMethod {
        /// Where the error occurred.
        context: String,
        /// The missing id.
        id: String,
    },
}

/// Whether matching goes through the tree node or the bare symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// `matches(node)`: call-site types apply.
    #[default]
    Tree,
    /// `matches_symbol(symbol)`: the declaring type applies.
    Symbol,
}

#[derive(Debug, Deserialize)]
struct SnapshotDto {
    #[serde(default)]
    types: Vec<TypeDto>,
    #[serde(default)]
    methods: Vec<MethodDto>,
    #[serde(default)]
    sites: Vec<SiteDto>,
}

#[derive(Debug, Deserialize)]
struct TypeDto {
    name: String,
    #[serde(default = "default_kind")]
    kind: TypeKind,
    #[serde(default)]
    extends: Vec<String>,
}

fn default_kind() -> TypeKind {
    TypeKind::Class
}

#[derive(Debug, Deserialize)]
struct MethodDto {
    id: String,
    owner: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    constructor: bool,
    #[serde(default)]
    params: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SiteDto {
    line: u32,
    kind: SiteKind,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    receiver: Option<String>,
    #[serde(default)]
    interface: Option<String>,
}

/// A resolved program: its type table and the sites to match.
#[derive(Debug, Clone)]
pub struct Snapshot {
    table: TypeTable,
    sites: Vec<Site>,
}

impl Snapshot {
    /// Loads a snapshot from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates a snapshot from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or references do not resolve.
    pub fn parse(content: &str) -> Result<Self, SnapshotError> {
        let dto: SnapshotDto = toml::from_str(content)?;
        Self::load(dto)
    }

    fn load(dto: SnapshotDto) -> Result<Self, SnapshotError> {
        let mut table = TypeTable::new();
        for (i, ty) in dto.types.iter().enumerate() {
            if ty.name.is_empty() {
                return Err(SnapshotError::EmptyName {
                    context: format!("types[{i}].name"),
                });
            }
            let extends: Vec<&str> = ty.extends.iter().map(String::as_str).collect();
            table.declare(&ty.name, ty.kind, &extends);
        }

        let mut ids: HashMap<String, MethodId> = HashMap::new();
        for (i, method) in dto.methods.into_iter().enumerate() {
            let context = format!("methods[{i}]");
            let name = match (method.name.as_deref(), method.constructor) {
                (Some(name), false) if !name.is_empty() => name,
                (Some(_), false) => {
                    return Err(SnapshotError::EmptyName {
                        context: format!("{context}.name"),
                    })
                }
                (None, true) => CONSTRUCTOR_NAME,
                _ => return Err(SnapshotError::AmbiguousMethodName { context }),
            };
            if ids.contains_key(&method.id) {
                return Err(SnapshotError::DuplicateMethod {
                    context: format!("{context}.id"),
                    id: method.id,
                });
            }
            let params: Vec<&str> = method.params.iter().map(String::as_str).collect();
            let id = table.declare_method(MethodDef::new(&method.owner, name, &params));
            ids.insert(method.id, id);
        }

        let sites = dto
            .sites
            .into_iter()
            .enumerate()
            .map(|(i, site)| -> Result<Site, SnapshotError> {
                let method = site
                    .method
                    .map(|id| {
                        ids.get(&id)
                            .copied()
                            .ok_or_else(|| SnapshotError::UnknownMethod {
                                context: format!("sites[{i}].method"),
                                id,
                            })
                    })
                    .transpose()?;
                Ok(Site {
                    line: site.line,
                    kind: site.kind,
                    method,
                    receiver: site.receiver,
                    interface: site.interface,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            types = table.types.len(),
            methods = table.methods.len(),
            sites = sites.len(),
            "loaded snapshot"
        );
        Ok(Self { table, sites })
    }

    /// The type table.
    #[must_use]
    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    /// Number of sites.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Sites bound to the table, in file order.
    pub fn sites(&self) -> impl Iterator<Item = SiteRef<'_>> {
        self.sites.iter().map(|s| self.table.bind(s.clone()))
    }

    /// Lines of the sites `matchers` accepts, in site order.
    #[must_use]
    pub fn find_matches(&self, matchers: &MethodMatchers, mode: MatchMode) -> Vec<u32> {
        self.sites()
            .filter(|site| match mode {
                MatchMode::Tree => matchers.matches(site),
                MatchMode::Symbol => matchers.matches_symbol(&site.symbol()),
            })
            .map(|site| site.site().line)
            .collect()
    }

    /// Runs every group over every site and collects findings.
    #[must_use]
    pub fn report(&self, source: &Path, groups: &[MatcherGroup], mode: MatchMode) -> MatchReport {
        let mut report = MatchReport::new();
        report.sites_checked = self.site_count();
        for group in groups {
            for line in self.find_matches(group.matchers(), mode) {
                report.findings.push(Finding::new(
                    group.id().as_str(),
                    group.severity(),
                    Location::new(source.to_path_buf(), line),
                    group.message(),
                ));
            }
        }
        report
            .findings
            .sort_by(|a, b| a.location.line.cmp(&b.location.line).then(a.id.cmp(&b.id)));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"
[[types]]
name = "pkg.A"

[[methods]]
id = "A.<init>(int)"
owner = "pkg.A"
constructor = true
params = ["int"]

[[methods]]
id = "A.f(int)"
owner = "pkg.A"
name = "f"
params = ["int"]

[[sites]]
line = 4
kind = "declaration"
method = "A.<init>(int)"

[[sites]]
line = 7
kind = "new-class"
method = "A.<init>(int)"

[[sites]]
line = 8
kind = "invocation"
method = "A.f(int)"
receiver = "pkg.A"

[[sites]]
line = 10
kind = "method-reference"
"#;

    #[test]
    fn parses_and_resolves() {
        let snapshot = Snapshot::parse(SOURCE).ok();
        assert_eq!(snapshot.as_ref().map(Snapshot::site_count), Some(4));
        let has_ctor = snapshot
            .as_ref()
            .and_then(|s| s.table().method_id("pkg.A", CONSTRUCTOR_NAME, &["int"]));
        assert!(has_ctor.is_some());
    }

    #[test]
    fn unknown_method_reference_is_rejected() {
        let err = Snapshot::parse(
            r#"
[[sites]]
line = 1
kind = "invocation"
method = "nope"
"#,
        )
        .err();
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("sites[0].method: unknown method id `nope`")
        );
    }

    #[test]
    fn method_needs_name_or_constructor() {
        let err = Snapshot::parse(
            r#"
[[methods]]
id = "x"
owner = "A"
"#,
        )
        .err();
        assert!(matches!(err, Some(SnapshotError::AmbiguousMethodName { .. })));
    }

    #[test]
    fn duplicate_method_ids_are_rejected() {
        let err = Snapshot::parse(
            r#"
[[methods]]
id = "x"
owner = "A"
name = "f"

[[methods]]
id = "x"
owner = "A"
name = "g"
"#,
        )
        .err();
        assert!(matches!(err, Some(SnapshotError::DuplicateMethod { .. })));
    }

    #[test]
    fn unknown_site_kind_is_a_toml_error() {
        let err = Snapshot::parse(
            r#"
[[sites]]
line = 1
kind = "lambda"
"#,
        )
        .err();
        assert!(matches!(err, Some(SnapshotError::Toml(_))));
    }

    #[test]
    fn find_matches_by_mode() -> Result<(), Box<dyn std::error::Error>> {
        let snapshot = Snapshot::parse(SOURCE)?;
        let everything = MethodMatchers::create()
            .of_any_type()
            .any_name()
            .with_any_parameters()
            .build()?;
        assert_eq!(snapshot.find_matches(&everything, MatchMode::Tree), vec![4, 7, 8]);
        assert_eq!(snapshot.find_matches(&everything, MatchMode::Symbol), vec![4, 7, 8]);
        Ok(())
    }
}
