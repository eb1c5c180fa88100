//! `unresolved-reference`: an identifier used in expression position that
//! the builder could not resolve to any binding visible from its scope
//! chain (spec §3 "Reference... `symbol: Optional<SymbolId>` (`None` →
//! unresolved...)").
//!
//! Single-file semantics mean a name bound by another file's export (spec
//! §1 non-goal: "no cross-file resolution of names") will also show up
//! here; this rule can't distinguish that case from an actual typo, which
//! is why it is `correctness` rather than `err`-by-default in isolation —
//! still, an unresolved identifier reference in a single file is the
//! single strongest signal this engine can produce of a genuine mistake.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags identifier references the builder could not bind to any
    /// symbol visible in scope.
    UnresolvedReference,
    id = 2,
    name = "unresolved-reference",
    category = Category::Correctness,
    severity = Severity::Error
}

impl Rule for UnresolvedReference {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_once(&self, semantic: &Semantic, ctx: &mut LintContext) {
        for &reference_id in semantic.references.unresolved() {
            let reference = semantic.references.row(reference_id);
            // A member access's trailing components (`a.b.c`) are bound
            // relative to the base's type, which this single-file model
            // does not track (spec §9 open question on member-access
            // chains); only the head of a chain is a genuine unresolved
            // name lookup.
            if reference.flags.contains(ReferenceFlags::MEMBER) {
                continue;
            }
            let name = ctx.source()[reference.identifier.as_range()].to_string();
            ctx.report(
                Diagnostic::error(
                    self.meta().name,
                    format!("`{}` is not defined in this scope", name),
                )
                .primary(reference.identifier, "used here"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::context::FixMode;
    use crate::driver::{DriverError, LintDriver};
    use lint_diagnostics::SourceFile;
    use lint_semantic::build;

    fn lint(src: &str) -> Result<crate::driver::LintSuccess, DriverError> {
        let semantic = build(&SourceFile::new(src, None)).expect("clean build");
        let config = LintConfig::new();
        LintDriver::new(&config, FixMode::Disabled).run(&semantic)
    }

    #[test]
    fn flags_unresolved_identifier() {
        let err = lint("const x = y;").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "unresolved-reference"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_resolved_identifier() {
        assert!(lint("pub const x = 1; pub const y = x;").is_ok());
    }
}
