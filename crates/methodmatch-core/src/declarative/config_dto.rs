//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to matcher groups via the loader.

use serde::Deserialize;

/// Raw TOML representation of declarative matchers.
///
/// Extends the base `Config` with `[[matcher]]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchersConfigDto {
    /// One entry per `[[matcher]]` table, in file order.
    #[serde(rename = "matcher", default)]
    pub matchers: Vec<MatcherDto>,
}

/// TOML representation of a single method matcher.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MatcherDto {
    /// Group id; tables sharing an id are OR'd.
    pub id: String,
    /// Exact owner types.
    #[serde(default)]
    pub types: Vec<String>,
    /// Owner supertypes (reflexive).
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Accept any owner type.
    #[serde(default)]
    pub any_type: bool,
    /// Exact method names.
    #[serde(default)]
    pub names: Vec<String>,
    /// Method name prefix.
    #[serde(default)]
    pub name_prefix: Option<String>,
    /// Accept any method name.
    #[serde(default)]
    pub any_name: bool,
    /// Match constructors.
    #[serde(default)]
    pub constructor: bool,
    /// Exact signatures. `[]` and `[[]]` both mean "no parameters".
    #[serde(default)]
    pub parameters: Option<Vec<Vec<String>>>,
    /// Signature prefixes.
    #[serde(default)]
    pub parameter_prefixes: Vec<Vec<String>>,
    /// Accept any signature.
    #[serde(default)]
    pub any_parameters: bool,
    /// Finding message.
    #[serde(default)]
    pub message: Option<String>,
    /// Severity (default: "warning").
    #[serde(default)]
    pub severity: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty() {
        let dto: MatchersConfigDto = toml::from_str("").unwrap();
        assert!(dto.matchers.is_empty());
    }

    #[test]
    fn deserialize_full_matcher() {
        let toml_str = r#"
[[matcher]]
id = "no-peek"
subtypes = ["java.util.stream.BaseStream"]
names = ["peek"]
parameter-prefixes = [["java.util.function.Consumer"]]
message = "Remove this use of peek."
severity = "error"

[[matcher]]
id = "no-peek"
any-type = true
name-prefix = "debug"
parameters = []
"#;
        let dto: MatchersConfigDto = toml::from_str(toml_str).unwrap();
        assert_eq!(dto.matchers.len(), 2);
        assert_eq!(dto.matchers[0].subtypes, vec!["java.util.stream.BaseStream"]);
        assert_eq!(dto.matchers[0].parameter_prefixes.len(), 1);
        assert_eq!(dto.matchers[0].severity.as_deref(), Some("error"));
        assert!(dto.matchers[0].parameters.is_none());
        assert!(dto.matchers[1].any_type);
        assert_eq!(dto.matchers[1].name_prefix.as_deref(), Some("debug"));
        assert_eq!(dto.matchers[1].parameters, Some(vec![]));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dto: MatchersConfigDto = toml::from_str(
            r#"
[settings]
fail-on = "error"
"#,
        )
        .unwrap();
        assert!(dto.matchers.is_empty());
    }
}
