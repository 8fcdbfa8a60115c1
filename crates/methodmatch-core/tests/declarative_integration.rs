//! Integration test: declarative matchers end-to-end over a snapshot.
//!
//! Verifies that the full TOML → DTO → matcher groups → report pipeline
//! produces the expected findings for the fixtures under `tests/fixtures/`.

use methodmatch_core::declarative;
use methodmatch_core::model::{MatchMode, Snapshot};
use methodmatch_core::{Config, Severity};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

const CONFIG: &str = r#"
[settings]
fail-on = "warning"

[[matcher]]
id = "no-f-int"
subtypes = ["pkg.I"]
names = ["f"]
parameters = [["int"]]
message = "f(int) is deprecated"
severity = "error"

[[matcher]]
id = "no-f-int"
types = ["pkg.J"]
names = ["f"]
any-parameters = true

[[matcher]]
id = "no-to-string"
subtypes = ["java.lang.Object"]
names = ["toString"]
parameters = []
severity = "info"
"#;

#[test]
fn report_collects_findings_per_group() {
    let config = Config::parse(CONFIG).expect("config should parse");
    let path = fixture("inheritance.toml");
    let snapshot = Snapshot::from_file(&path).expect("fixture should load");

    let report = snapshot.report(&path, config.matchers(), MatchMode::Tree);

    assert_eq!(report.sites_checked, 18);
    let by_group = |id: &str| -> Vec<u32> {
        report
            .findings
            .iter()
            .filter(|f| f.id == id)
            .map(|f| f.location.line)
            .collect()
    };
    assert_eq!(
        by_group("no-f-int"),
        [5, 9, 16, 20, 29, 30, 31, 32, 33, 35, 36, 37]
    );
    assert_eq!(by_group("no-to-string"), [26, 27]);

    // Lines are ascending across groups.
    let lines: Vec<u32> = report.findings.iter().map(|f| f.location.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);

    assert_eq!(report.count_by_severity(), (12, 0, 2));
    assert!(report.has_findings_at(config.fail_on()));
    assert!(report
        .findings
        .iter()
        .all(|f| f.location.file == path));
}

#[test]
fn symbol_mode_drops_method_references() {
    let groups = declarative::load_matchers_from_toml(CONFIG).expect("matchers should load");
    let path = fixture("inheritance.toml");
    let snapshot = Snapshot::from_file(&path).expect("fixture should load");

    let report = snapshot.report(&path, &groups, MatchMode::Symbol);
    let lines: Vec<u32> = report
        .findings
        .iter()
        .filter(|f| f.id == "no-f-int")
        .map(|f| f.location.line)
        .collect();
    // Symbol mode sees declaring types: D.f(int) and C.f(int) reach I through B.
    assert_eq!(lines, [5, 9, 16, 20, 29, 30, 31, 32, 33, 37]);
}

#[test]
fn group_severity_and_message_apply_to_every_finding() {
    let groups = declarative::load_matchers_from_toml(CONFIG).expect("matchers should load");
    let path = fixture("inheritance.toml");
    let snapshot = Snapshot::from_file(&path).expect("fixture should load");

    let report = snapshot.report(&path, &groups, MatchMode::Tree);
    for finding in &report.findings {
        match finding.id.as_str() {
            "no-f-int" => {
                assert_eq!(finding.severity, Severity::Error);
                assert_eq!(finding.message, "f(int) is deprecated");
            }
            "no-to-string" => {
                assert_eq!(finding.severity, Severity::Info);
                assert_eq!(finding.message, "call matched by `no-to-string`");
            }
            other => panic!("unexpected group {other}"),
        }
    }
}

#[test]
fn empty_config_reports_nothing() {
    let config = Config::parse("").expect("empty config should parse");
    let path = fixture("types.toml");
    let snapshot = Snapshot::from_file(&path).expect("fixture should load");

    let report = snapshot.report(&path, config.matchers(), MatchMode::Tree);
    assert!(report.findings.is_empty());
    assert_eq!(report.sites_checked, 7);
    assert!(!report.has_errors());
}
