//! Per-file, per-rule scratch space (spec §4.5 "Lint Context"). A fresh
//! `LintContext` is handed to each rule invocation; its lifetime never
//! outlives the `Semantic` model it was built from.

use crate::fixer::FixPlan;
use lint_diagnostics::{Diagnostic, Fix, LabeledSpan, Severity, Span};
use lint_semantic::Semantic;
use lint_syntax::{NodeIndex, TokenIndex};

/// Whether the driver should accumulate a fix plan alongside diagnostics
/// (spec §4.5 "an optional fix plan accumulator when the driver was started
/// with `fix.enabled = true`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    Disabled,
    Enabled,
}

pub struct LintContext<'s> {
    semantic: &'s Semantic,
    /// The identity of the rule currently being invoked; stamped onto every
    /// diagnostic reported through this context (spec §4.5 "the current
    /// rule's identity (so every reported diagnostic is stamped with the
    /// rule's `name`)").
    current_rule: &'static str,
    default_severity: Severity,
    /// A per-rule severity override resolved from configuration; falls
    /// back to `default_severity` when absent.
    configured_severity: Option<Severity>,
    diagnostics: Vec<Diagnostic>,
    fix_mode: FixMode,
    fix_plan: FixPlan,
}

impl<'s> LintContext<'s> {
    pub fn new(
        semantic: &'s Semantic,
        current_rule: &'static str,
        default_severity: Severity,
        configured_severity: Option<Severity>,
        fix_mode: FixMode,
    ) -> Self {
        LintContext {
            semantic,
            current_rule,
            default_severity,
            configured_severity,
            diagnostics: Vec::new(),
            fix_mode,
            fix_plan: FixPlan::new(),
        }
    }

    pub fn source(&self) -> &str {
        self.semantic.source.text()
    }

    pub fn semantic(&self) -> &'s Semantic {
        self.semantic
    }

    pub fn current_rule(&self) -> &'static str {
        self.current_rule
    }

    fn severity(&self) -> Severity {
        self.configured_severity.unwrap_or(self.default_severity)
    }

    pub fn span_for_node(&self, node: NodeIndex) -> Span {
        self.semantic.span_for_node(node)
    }

    pub fn span_for_token(&self, token: TokenIndex) -> Span {
        self.semantic.span_for_token(token)
    }

    /// Report a diagnostic built by the caller; `code`/`severity` are
    /// overwritten with this context's rule identity and resolved severity
    /// so a rule can never misattribute or out-rank its own configuration.
    ///
    /// A rule resolved to `Severity::Off` never reaches here in practice
    /// (the driver skips invocation entirely, spec §4.4), but this is the
    /// last line of defense: `Off` is never attached to an emitted
    /// diagnostic (`lint_diagnostics`'s own invariant), so it's dropped
    /// rather than pushed.
    pub fn report(&mut self, mut diagnostic: Diagnostic) {
        let severity = self.severity();
        if severity == Severity::Off {
            return;
        }
        diagnostic.code = self.current_rule.into();
        diagnostic.severity = severity;
        if let Some(fix) = &diagnostic.fix {
            if self.fix_mode == FixMode::Enabled {
                self.fix_plan.push(self.current_rule, fix.clone());
            }
        }
        self.diagnostics.push(diagnostic);
    }

    /// Convenience for the common case: an owned message and a set of
    /// labeled spans, no help text, no fix (spec §4.5 `report_fmt`).
    pub fn report_fmt(&mut self, message: impl Into<String>, spans: Vec<LabeledSpan>) {
        let mut diag = Diagnostic::new(self.current_rule, self.severity(), message.into());
        diag.spans = spans;
        self.report(diag);
    }

    /// Convenience for a `'static` message (spec §4.5 `report_static`).
    pub fn report_static(&mut self, message: &'static str, spans: Vec<LabeledSpan>) {
        let mut diag = Diagnostic::new(self.current_rule, self.severity(), message);
        diag.spans = spans;
        self.report(diag);
    }

    pub fn fix_mode(&self) -> FixMode {
        self.fix_mode
    }

    pub fn into_parts(self) -> (Vec<Diagnostic>, FixPlan) {
        (self.diagnostics, self.fix_plan)
    }
}
