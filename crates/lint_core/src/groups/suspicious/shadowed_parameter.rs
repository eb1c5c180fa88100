//! `shadowed-parameter`: a function parameter whose name is already bound
//! in an enclosing scope. The spec's own scope-creation rule for functions
//! exists precisely to make this detectable: "every function prototype
//! (own scope containing parameters, so shadowing by the body is illegal)"
//! (spec §4.2) — the parameter scope is a distinct scope from its parent
//! specifically so a parameter can be compared against what the *caller's*
//! scope already bound.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags a parameter name that shadows a binding from an enclosing
    /// scope.
    ShadowedParameter,
    id = 10,
    name = "shadowed-parameter",
    category = Category::Suspicious,
    severity = Severity::Warning
}

impl Rule for ShadowedParameter {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_symbol(&self, symbol: SymbolId, semantic: &Semantic, ctx: &mut LintContext) {
        let flags = semantic.symbols.flags(symbol);
        if !flags.contains(SymbolFlags::FN_PARAM) {
            return;
        }
        let name = semantic.symbol_name(symbol);
        if name.is_empty() {
            return;
        }
        let scope = semantic.symbols.scope_of(symbol);

        for ancestor in semantic.scopes.ancestors(scope).skip(1) {
            if let Some(&shadowed) = semantic
                .scopes
                .bindings(ancestor)
                .iter()
                .find(|&&other| semantic.symbol_name(other) == name)
            {
                let span = match semantic.symbols.token(symbol) {
                    Some(token) => ctx.span_for_token(token),
                    None => ctx.span_for_node(semantic.symbols.decl_of(symbol)),
                };
                let outer_span = match semantic.symbols.token(shadowed) {
                    Some(token) => ctx.span_for_token(token),
                    None => ctx.span_for_node(semantic.symbols.decl_of(shadowed)),
                };
                ctx.report(
                    Diagnostic::warning(
                        self.meta().name,
                        format!("parameter `{}` shadows an outer binding of the same name", name),
                    )
                    .primary(span, "shadowing parameter")
                    .secondary(outer_span, "outer binding"),
                );
                return;
            }
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
    fn flags_parameter_shadowing_outer_const() {
        let err = lint("pub const x = 1; fn f(x: i32) i32 { return x; }").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "shadowed-parameter"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_unrelated_parameter_names() {
        assert!(lint("pub const x = 1; fn f(y: i32) i32 { return y; }").is_ok());
    }
}
