//! `needless-group-expr`: parentheses wrapped around a single identifier or
//! literal (`(x)`, `(1)`) that do nothing but add noise. Safe to remove
//! automatically, so this rule offers a non-dangerous [`Fix`].

use crate::rule_prelude::*;

declare_rule! {
    /// Flags `(identifier)` / `(literal)` and offers to drop the parens.
    NeedlessGroupExpr,
    id = 21,
    name = "needless-group-expr",
    category = Category::Pedantic,
    severity = Severity::Notice,
    fix = FixCapability::Fix
}

impl Rule for NeedlessGroupExpr {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_node(&self, node: NodeIndex, semantic: &Semantic, ctx: &mut LintContext) {
        let NodeData::GroupExpr { inner } = &semantic.tree.node(node).data else {
            return;
        };
        let is_trivial = matches!(
            semantic.tree.node(*inner).data,
            NodeData::Identifier { .. } | NodeData::Literal { .. }
        );
        if !is_trivial {
            return;
        }

        let outer_span = ctx.span_for_node(node);
        let inner_span = ctx.span_for_node(*inner);
        let replacement = ctx.source()[inner_span.as_range()].to_string();

        ctx.report(
            Diagnostic::notice(self.meta().name, "parentheses around this expression are redundant")
                .primary(outer_span, "redundant parentheses")
                .help("remove the parentheses")
                .with_fix(Fix::new(FixKind::Fix, outer_span, replacement)),
        );
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

    fn lint(src: &str, fix_mode: FixMode) -> Result<crate::driver::LintSuccess, DriverError> {
        let semantic = build(&SourceFile::new(src, None)).expect("clean build");
        let config = LintConfig::new();
        LintDriver::new(&config, fix_mode).run(&semantic)
    }

    #[test]
    fn flags_and_fixes_redundant_parens() {
        let err = lint("pub const x = (1);", FixMode::Enabled).unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                let diag = diags
                    .iter()
                    .find(|d| d.code.as_str() == "needless-group-expr")
                    .expect("diagnostic present");
                let fix = diag.fix.as_ref().expect("fix present");
                assert_eq!(fix.replacement, "1");
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_parens_around_a_binary_expr() {
        assert!(lint("pub const x = (1 + 2);", FixMode::Disabled).is_ok());
    }
}
