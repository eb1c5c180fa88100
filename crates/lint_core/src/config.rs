//! The in-memory configuration shape the engine consumes (spec §6
//! "Consumed from configuration (already parsed)"). File parsing itself is
//! out of scope (spec §1); this module only defines what the driver reads,
//! as `serde`-deserializable types mirroring the teacher's `rslint_config`
//! crate's shape (referenced from `rslint_cli`'s `Cargo.toml`, not present
//! in the retrieval pack).

use lint_diagnostics::Severity;
use serde::{Deserialize, Serialize};

/// One entry of the ordered `(rule-name, severity, rule-specific-opaque-
/// config)` tuple list (spec §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfigEntry {
    pub rule: String,
    pub severity: Severity,
    /// Opaque per-rule configuration; the engine never interprets this
    /// beyond handing it to the rule (spec §4.4 "opaque per-rule
    /// configuration handle").
    #[serde(default)]
    pub options: serde_json::Value,
}

/// The full in-memory configuration a driver run is given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    pub rules: Vec<RuleConfigEntry>,
    /// Used by the front-end for file discovery, not read by the core
    /// (spec §6: "An ignore-patterns list (used by the front-end, not the
    /// core)"). Kept here only so the in-memory shape round-trips through
    /// one type.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl LintConfig {
    pub fn new() -> Self {
        LintConfig::default()
    }

    pub fn severity_for(&self, rule_name: &str) -> Option<Severity> {
        self.rules
            .iter()
            .find(|e| e.rule == rule_name)
            .map(|e| e.severity)
    }

    pub fn options_for(&self, rule_name: &str) -> Option<&serde_json::Value> {
        self.rules
            .iter()
            .find(|e| e.rule == rule_name)
            .map(|e| &e.options)
    }

    /// Names of every rule this configuration enables at a severity other
    /// than `Off`. A driver run with no explicit configuration runs every
    /// registered rule at its own default severity; an explicit config
    /// narrows that to exactly the configured set.
    pub fn enabled_rule_names(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|e| e.severity != Severity::Off)
            .map(|e| e.rule.as_str())
            .collect()
    }
}
