//! `self-assignment`: an assignment whose left- and right-hand sides are
//! the exact same identifier (`x = x;`) — never has an effect, and is
//! almost always a typo for a field access or a different variable.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags `x = x;`.
    SelfAssignment,
    id = 11,
    name = "self-assignment",
    category = Category::Suspicious,
    severity = Severity::Warning
}

impl Rule for SelfAssignment {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_node(&self, node: NodeIndex, semantic: &Semantic, ctx: &mut LintContext) {
        let NodeData::AssignExpr { target, value } = &semantic.tree.node(node).data else {
            return;
        };
        let NodeData::Identifier { token: target_tok } = &semantic.tree.node(*target).data else {
            return;
        };
        let NodeData::Identifier { token: value_tok } = &semantic.tree.node(*value).data else {
            return;
        };
        if semantic.token_text(*target_tok) != semantic.token_text(*value_tok) {
            return;
        }
        ctx.report(
            Diagnostic::warning(self.meta().name, "assigning a variable to itself has no effect")
                .primary(ctx.span_for_node(node), "self-assignment"),
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

    fn lint(src: &str) -> Result<crate::driver::LintSuccess, DriverError> {
        let semantic = build(&SourceFile::new(src, None)).expect("clean build");
        let config = LintConfig::new();
        LintDriver::new(&config, FixMode::Disabled).run(&semantic)
    }

    #[test]
    fn flags_self_assignment() {
        let err = lint("fn f() void { var x: i32 = 0; x = x; }").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "self-assignment"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_assignment_to_different_name() {
        assert!(lint("pub var x: i32 = 0; pub var y: i32 = 0; fn f() void { x = y; }").is_ok());
    }
}
