//! Diagnostic, span, and source-file primitives shared by the semantic model,
//! the rule engine, and the CLI reporter.
//!
//! This crate plays the role of `rslint_errors` in the teacher project: a
//! small, dependency-light crate that every other crate in the workspace can
//! depend on without pulling in the rule engine or the semantic model.

mod source;
mod span;
mod text;

pub use source::SourceFile;
pub use span::{LabeledSpan, Span};
pub use text::Text;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic. `Off` is never attached to an emitted
/// diagnostic; it only appears as a rule's configured level and tells the
/// driver to skip invoking the rule entirely (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Notice,
    Warning,
    Error,
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Warning
    }
}

/// The kind of source-text rewrite a diagnostic's fix performs, per spec §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixKind {
    /// The rule has no fix to offer.
    None,
    /// Safe to apply automatically.
    Fix,
    /// Semantically correct but behavior-altering; only applied when the
    /// caller opts in explicitly.
    Dangerous,
}

/// A single non-overlapping source-text rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub kind: FixKind,
    pub dangerous: bool,
    /// Byte span being replaced.
    pub span: Span,
    /// Text that replaces it.
    pub replacement: String,
}

impl Fix {
    pub fn new(kind: FixKind, span: Span, replacement: impl Into<String>) -> Self {
        Fix {
            kind,
            dangerous: matches!(kind, FixKind::Dangerous),
            span,
            replacement: replacement.into(),
        }
    }
}

/// A structured diagnostic: rule identity, severity, message, labeled spans,
/// optional help text, and an optional fix. Mirrors the shape used at
/// `rslint_core`'s `Diagnostic::warning(file, code, msg).primary(span, label)`
/// call sites, generalized to carry a `Fix` and an explicit `Severity`.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Stable rule id, e.g. `"no-unused-labels"`.
    pub code: Text,
    pub severity: Severity,
    pub message: Text,
    pub spans: Vec<LabeledSpan>,
    pub help: Option<Text>,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(code: impl Into<Text>, severity: Severity, message: impl Into<Text>) -> Self {
        Diagnostic {
            code: code.into(),
            severity,
            message: message.into(),
            spans: Vec::new(),
            help: None,
            fix: None,
        }
    }

    pub fn error(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self::new(code, Severity::Error, message)
    }

    pub fn warning(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self::new(code, Severity::Warning, message)
    }

    pub fn notice(code: impl Into<Text>, message: impl Into<Text>) -> Self {
        Self::new(code, Severity::Notice, message)
    }

    /// Attach a primary labeled span.
    #[must_use]
    pub fn primary(mut self, span: Span, label: impl Into<Text>) -> Self {
        self.spans.push(LabeledSpan::primary(span, label));
        self
    }

    /// Attach a secondary labeled span.
    #[must_use]
    pub fn secondary(mut self, span: Span, label: impl Into<Text>) -> Self {
        self.spans.push(LabeledSpan::secondary(span, label));
        self
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<Text>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.spans
            .iter()
            .find(|s| s.primary)
            .or_else(|| self.spans.first())
            .map(|s| s.span)
    }
}
