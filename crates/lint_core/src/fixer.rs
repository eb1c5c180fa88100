//! Applying a lint run's accumulated fixes to source text.
//!
//! The spec defines a fix *plan* (§4.5, §6) but leaves how it gets applied
//! to the implementer (SPEC_FULL). Grounded on the teacher's `autofix`
//! module (`rslint_core::autofix::recursively_apply_fixes`, referenced from
//! `lib.rs`'s `LintResult::fix`): apply non-overlapping spans in reverse
//! byte order so earlier offsets stay valid, and refuse to silently drop a
//! conflicting fix.

use lint_diagnostics::{Fix, FixKind, Span};
use thiserror::Error;

#[derive(Debug, Clone)]
struct PlannedFix {
    rule: &'static str,
    fix: Fix,
}

/// The fixes collected over one lint run, before application.
#[derive(Debug, Default)]
pub struct FixPlan {
    fixes: Vec<PlannedFix>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixConflict {
    #[error("fix from rule '{a}' at {a_span:?} overlaps fix from rule '{b}' at {b_span:?}")]
    Overlapping {
        a: &'static str,
        a_span: Span,
        b: &'static str,
        b_span: Span,
    },
}

impl FixPlan {
    pub fn new() -> Self {
        FixPlan::default()
    }

    pub fn push(&mut self, rule: &'static str, fix: Fix) {
        self.fixes.push(PlannedFix { rule, fix });
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    /// Merge another run's fixes into this one (used when a driver runs
    /// multiple rules and accumulates a fix plan per rule before combining).
    pub fn extend(&mut self, other: FixPlan) {
        self.fixes.extend(other.fixes);
    }

    /// Apply every `Fix` kind (not `Dangerous`) fix to `source`, returning
    /// the rewritten text. `Dangerous` fixes are only applied when
    /// `include_dangerous` is set, mirroring the teacher's
    /// `LintResult::fix(dirty)` opt-in.
    pub fn apply(&self, source: &str, include_dangerous: bool) -> Result<String, FixConflict> {
        let mut applicable: Vec<&PlannedFix> = self
            .fixes
            .iter()
            .filter(|p| match p.fix.kind {
                FixKind::None => false,
                FixKind::Fix => true,
                FixKind::Dangerous => include_dangerous,
            })
            .collect();
        applicable.sort_by_key(|p| p.fix.span.start);

        for w in applicable.windows(2) {
            if w[0].fix.span.overlaps(w[1].fix.span) {
                return Err(FixConflict::Overlapping {
                    a: w[0].rule,
                    a_span: w[0].fix.span,
                    b: w[1].rule,
                    b_span: w[1].fix.span,
                });
            }
        }

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0usize;
        for p in &applicable {
            let range = p.fix.span.as_range();
            out.push_str(&source[cursor..range.start]);
            out.push_str(&p.fix.replacement);
            cursor = range.end;
        }
        out.push_str(&source[cursor..]);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_diagnostics::Fix;

    #[test]
    fn applies_non_overlapping_fixes_in_order() {
        let mut plan = FixPlan::new();
        plan.push("rule-a", Fix::new(FixKind::Fix, Span::new(6, 11), "earth"));
        plan.push("rule-b", Fix::new(FixKind::Fix, Span::new(0, 5), "Hi"));
        let result = plan.apply("hello world", false).unwrap();
        assert_eq!(result, "Hi earth");
    }

    #[test]
    fn dangerous_fix_excluded_by_default() {
        let mut plan = FixPlan::new();
        plan.push("rule-a", Fix::new(FixKind::Dangerous, Span::new(0, 5), "Hi"));
        assert_eq!(plan.apply("hello", false).unwrap(), "hello");
        assert_eq!(plan.apply("hello", true).unwrap(), "Hi");
    }

    #[test]
    fn overlapping_fixes_conflict() {
        let mut plan = FixPlan::new();
        plan.push("rule-a", Fix::new(FixKind::Fix, Span::new(0, 5), "a"));
        plan.push("rule-b", Fix::new(FixKind::Fix, Span::new(3, 8), "b"));
        assert!(plan.apply("hello world", false).is_err());
    }
}
