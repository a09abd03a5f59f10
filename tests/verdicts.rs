// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdicts produced by the default document and by custom rule tables.

use cklint::config::{default_config, resolve_config, LevelValue, LintConfig, RuleSpec};
use cklint::rules::{Level, Linter, Report, Severity, Verdict};
use cklint::CommitRecord;

fn default_linter() -> Linter {
    Linter::with_defaults().expect("default document should compile")
}

fn rule_names(report: &Report) -> Vec<String> {
    report.findings().iter().map(|f| f.rule.to_string()).collect()
}

fn severity_of(report: &Report, rule: &str) -> Option<Severity> {
    report
        .findings()
        .iter()
        .find(|f| f.rule.to_string() == rule)
        .map(|f| f.severity)
}

fn sample_records() -> Vec<CommitRecord> {
    vec![
        CommitRecord::default(),
        CommitRecord::new("feat", "add x").with_scope("core").with_body(""),
        CommitRecord::new("Feat", "Add x"),
        CommitRecord::new("feat", "add x").with_scope("unknown-scope"),
        CommitRecord::new("", ""),
        CommitRecord::new("feat", "a".repeat(80)),
        CommitRecord::new("chore", "bump deps")
            .with_scope("deps")
            .with_body("Routine update.")
            .with_footer("Refs: #12"),
    ]
}

#[test]
fn scenario_empty_body_warns() {
    let record = CommitRecord::new("feat", "add x")
        .with_scope("core")
        .with_body("");
    let report = default_linter().evaluate(&record);

    assert_eq!(rule_names(&report), vec!["body-empty"]);
    assert_eq!(severity_of(&report, "body-empty"), Some(Severity::Warning));
    assert_eq!(report.verdict(), Verdict::Warning);
    assert_eq!(report.verdict().exit_code(), 0);
}

#[test]
fn scenario_uppercase_type_and_description() {
    let report = default_linter().evaluate(&CommitRecord::new("Feat", "Add x"));

    assert_eq!(severity_of(&report, "type-format"), Some(Severity::Error));
    assert_eq!(
        severity_of(&report, "description-format"),
        Some(Severity::Error)
    );
    assert_eq!(report.verdict(), Verdict::Error);
    assert_eq!(report.verdict().exit_code(), 1);
}

#[test]
fn scenario_unknown_scope() {
    let record = CommitRecord::new("feat", "add x").with_scope("unknown-scope");
    let report = default_linter().evaluate(&record);

    assert_eq!(severity_of(&report, "scope"), Some(Severity::Error));
    assert!(report
        .findings()
        .iter()
        .any(|f| f.rule.to_string() == "scope" && f.message.contains("'unknown-scope'")));
    assert_eq!(report.verdict(), Verdict::Error);
}

#[test]
fn scenario_empty_type_and_subject() {
    let report = default_linter().evaluate(&CommitRecord::new("", ""));

    for rule in ["type-empty", "subject-empty", "description-empty"] {
        assert_eq!(severity_of(&report, rule), Some(Severity::Error), "{}", rule);
    }
    assert_eq!(report.verdict(), Verdict::Error);
}

#[test]
fn scenario_long_description() {
    let report = default_linter().evaluate(&CommitRecord::new("feat", "a".repeat(80)));

    assert_eq!(
        severity_of(&report, "description-max-length"),
        Some(Severity::Error)
    );
    assert!(report
        .findings()
        .iter()
        .any(|f| f.message.contains("72") && f.message.contains("80")));
    assert_eq!(report.verdict(), Verdict::Error);
}

#[test]
fn absent_scope_is_accepted() {
    let record = CommitRecord::new("fix", "handle empty input").with_body("Details.");
    let report = default_linter().evaluate(&record);
    assert!(report.findings().is_empty());
    assert_eq!(report.verdict(), Verdict::Valid);
}

#[test]
fn whitespace_scope_is_checked_against_options() {
    let record = CommitRecord::new("feat", "add x")
        .with_scope("   ")
        .with_body("b");
    let report = default_linter().evaluate(&record);

    assert_eq!(rule_names(&report), vec!["scope"]);
    assert_eq!(report.verdict(), Verdict::Error);
}

#[test]
fn blank_footer_line_fails_footer_format() {
    let config = default_config().with_rule(
        "footers-format",
        RuleSpec::new(Level::Error).with_format(r"^[A-Za-z-]+: .+$"),
    );
    let linter = Linter::from_config(config).unwrap();

    let record = CommitRecord::new("feat", "add x")
        .with_body("b")
        .with_footer("Refs: #12")
        .with_footer("   ");
    let report = linter.evaluate(&record);
    assert_eq!(severity_of(&report, "footers-format"), Some(Severity::Error));

    let only_blank = CommitRecord::new("feat", "add x").with_body("b").with_footer("");
    assert_eq!(linter.evaluate(&only_blank).verdict(), Verdict::Error);
}

#[test]
fn ignored_footers_rule_never_fires() {
    let record = CommitRecord::new("fix", "handle empty input").with_body("Details.");
    assert!(record.footers.is_empty());
    assert!(!default_linter().evaluate(&record).has_finding("footers-empty"));
}

#[test]
fn disabled_table_yields_no_findings() {
    let mut resolved = resolve_config(default_config()).unwrap();
    for (i, spec) in resolved.rules.values_mut().enumerate() {
        spec.level = match i % 3 {
            0 => LevelValue::Name("disabled".to_string()),
            1 => LevelValue::Name("ignore".to_string()),
            _ => LevelValue::Code(0),
        };
    }
    let linter = Linter::from_config(resolved).unwrap();

    for record in sample_records() {
        let report = linter.evaluate(&record);
        assert!(report.findings().is_empty(), "{:?}", record);
        assert_eq!(report.verdict(), Verdict::Valid);
    }
}

#[test]
fn error_level_violation_yields_error_verdict() {
    let config = default_config().with_rule("body-empty", RuleSpec::new(Level::Error));
    let linter = Linter::from_config(config).unwrap();

    let record = CommitRecord::new("feat", "add x").with_scope("core");
    let report = linter.evaluate(&record);
    assert_eq!(severity_of(&report, "body-empty"), Some(Severity::Error));
    assert_eq!(report.verdict(), Verdict::Error);
}

#[test]
fn evaluation_is_idempotent() {
    let linter = default_linter();
    for record in sample_records() {
        assert_eq!(linter.evaluate(&record), linter.evaluate(&record));
    }
}

#[test]
fn adding_a_violation_never_removes_findings() {
    let linter = default_linter();
    let base = CommitRecord::new("feat", "add x").with_scope("core");

    let worse = [
        base.clone().with_scope("unknown-scope"),
        CommitRecord {
            subject: "Add x".to_string(),
            ..base.clone()
        },
        CommitRecord {
            subject: "a".repeat(90),
            ..base.clone()
        },
        CommitRecord {
            commit_type: "wip".to_string(),
            ..base.clone()
        },
    ];

    let before = linter.evaluate(&base);
    for record in &worse {
        let after = linter.evaluate(record);
        for finding in before.findings() {
            assert!(after.findings().contains(finding), "{:?} lost {:?}", record, finding);
        }
        assert!(after.findings().len() > before.findings().len());
        assert!(after.verdict() >= before.verdict());
    }
}

#[test]
fn findings_follow_rule_order() {
    let report = default_linter().evaluate(&CommitRecord::new("", ""));
    let names = rule_names(&report);
    let type_pos = names.iter().position(|n| n == "type-empty").unwrap();
    let body_pos = names.iter().position(|n| n == "body-empty").unwrap();
    assert!(type_pos < body_pos);
}

#[test]
fn json_document_compiles_like_toml() {
    let json = r#"{
        "extends": ["@commitlint/config-conventional"],
        "parserPreset": "conventional-changelog-conventionalcommits",
        "rules": {
            "scope": { "level": 2, "options": ["core"], "optional": true },
            "body-empty": { "level": "warn" }
        }
    }"#;
    let linter = Linter::from_config(LintConfig::from_json(json).unwrap()).unwrap();

    let report = linter.evaluate(&CommitRecord::new("feat", "add x").with_scope("core"));
    assert_eq!(rule_names(&report), vec!["body-empty"]);
    assert_eq!(report.verdict(), Verdict::Warning);
}

#[test]
fn malformed_document_is_rejected_at_load() {
    let toml = r#"
[rules.type]
level = "error"
"#;
    let config = LintConfig::from_toml(toml).unwrap();
    assert!(Linter::from_config(config).is_err());

    let toml = r#"
[rules.type-empty]
level = "fatal"
"#;
    let config = LintConfig::from_toml(toml).unwrap();
    assert!(Linter::from_config(config).is_err());
}
