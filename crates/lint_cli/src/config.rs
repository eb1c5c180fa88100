//! TOML configuration file loading.
//!
//! Spec §1 lists "configuration file parsing" as out of scope for the core
//! — "we specify only the in-memory configuration shape the engine
//! consumes" — and §6 fixes that shape to "an ordered list of
//! `(rule-name, severity, rule-specific-opaque-config)` tuples" plus an
//! ignore-patterns list. This module is the thin file-parsing boundary
//! that produces [`lint_core::config::LintConfig`], mirroring the
//! teacher's `rslint_config` crate's role (referenced from
//! `rslint_cli`'s `Cargo.toml`, though not itself present in the
//! retrieval pack).

use lint_core::config::{LintConfig, RuleConfigEntry};
use lint_diagnostics::Severity;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    rules: BTreeMap<String, RawRuleEntry>,
    #[serde(default)]
    ignore: Vec<String>,
}

/// A rule entry is either a bare severity string (`unused-symbol = "warn"`)
/// or a table with per-rule options alongside it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuleEntry {
    Severity(String),
    Detailed {
        severity: String,
        #[serde(default)]
        options: serde_json::Value,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("rule '{rule}' has unknown severity '{value}' (expected off, notice, warning, or error)")]
    UnknownSeverity { rule: String, value: String },
}

pub fn load(path: &Path) -> Result<LintConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text, path)
}

fn parse(text: &str, path: &Path) -> Result<LintConfig, ConfigError> {
    let raw: RawConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    let mut rules = Vec::with_capacity(raw.rules.len());
    for (name, entry) in raw.rules {
        let (severity_str, options) = match entry {
            RawRuleEntry::Severity(s) => (s, serde_json::Value::Null),
            RawRuleEntry::Detailed { severity, options } => (severity, options),
        };
        let severity = parse_severity(&severity_str).ok_or_else(|| ConfigError::UnknownSeverity {
            rule: name.clone(),
            value: severity_str.clone(),
        })?;
        rules.push(RuleConfigEntry {
            rule: name,
            severity,
            options,
        });
    }

    Ok(LintConfig {
        rules,
        ignore_patterns: raw.ignore,
    })
}

fn parse_severity(s: &str) -> Option<Severity> {
    Some(match s {
        "off" => Severity::Off,
        "notice" => Severity::Notice,
        "warning" | "warn" => Severity::Warning,
        "error" | "err" => Severity::Error,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dummy_path() -> PathBuf {
        PathBuf::from("lint.toml")
    }

    #[test]
    fn parses_bare_severity_entries() {
        let toml = r#"
            [rules]
            unused-symbol = "error"
            missing-doc-comment = "off"
        "#;
        let config = parse(toml, &dummy_path()).unwrap();
        assert_eq!(config.severity_for("unused-symbol"), Some(Severity::Error));
        assert_eq!(config.severity_for("missing-doc-comment"), Some(Severity::Off));
    }

    #[test]
    fn parses_detailed_entries_with_options() {
        let toml = r#"
            [rules.empty-container]
            severity = "notice"
            options = { allow-test-blocks = true }
        "#;
        let config = parse(toml, &dummy_path()).unwrap();
        assert_eq!(config.severity_for("empty-container"), Some(Severity::Notice));
        assert!(config.options_for("empty-container").unwrap().is_object());
    }

    #[test]
    fn rejects_unknown_severity() {
        let toml = r#"
            [rules]
            unused-symbol = "catastrophic"
        "#;
        assert!(parse(toml, &dummy_path()).is_err());
    }

    #[test]
    fn ignore_patterns_round_trip() {
        let toml = r#"ignore = ["vendor/**", "build/**"]"#;
        let config = parse(toml, &dummy_path()).unwrap();
        assert_eq!(config.ignore_patterns, vec!["vendor/**", "build/**"]);
    }

    #[test]
    fn empty_config_enables_every_rule_by_default() {
        let config = parse("", &dummy_path()).unwrap();
        assert!(config.rules.is_empty());
    }
}
