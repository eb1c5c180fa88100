//! `unused-symbol`: a `const`/`var` declaration that is never referenced
//! anywhere in the file (spec §3 `Symbol.references`, invariant 4: an empty
//! `references[sid]` means nothing in the file ever looked this name up).
//!
//! Exported (`pub`) symbols are exempt: a single-file analysis (spec §1
//! non-goal "no cross-file resolution of names") cannot see whether another
//! file imports and uses them.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags a private `const`/`var` binding with no recorded uses.
    UnusedSymbol,
    id = 1,
    name = "unused-symbol",
    category = Category::Correctness,
    severity = Severity::Warning
}

impl Rule for UnusedSymbol {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_symbol(&self, symbol: SymbolId, semantic: &Semantic, ctx: &mut LintContext) {
        let flags = semantic.symbols.flags(symbol);
        if !flags.contains(SymbolFlags::VARIABLE) || flags.contains(SymbolFlags::MEMBER) {
            return;
        }
        if semantic.symbols.visibility(symbol) == Visibility::Public {
            return;
        }
        if !semantic.symbols.references(symbol).is_empty() {
            return;
        }
        let name = semantic.symbol_name(symbol);
        if name.is_empty() {
            return;
        }

        let span = match semantic.symbols.token(symbol) {
            Some(token) => ctx.span_for_token(token),
            None => ctx.span_for_node(semantic.symbols.decl_of(symbol)),
        };

        ctx.report(
            Diagnostic::warning(
                self.meta().name,
                format!("`{}` is declared but never used", name),
            )
            .primary(span, "declared here")
            .help("remove it, or mark it `pub` if it's part of this file's public surface"),
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
    fn flags_unused_local_const() {
        let err = lint("fn f() void { const x = 1; }").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "unused-symbol"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_used_local() {
        assert!(lint("fn f() i32 { const x = 1; return x; }").is_ok());
    }

    #[test]
    fn does_not_flag_pub_export() {
        assert!(lint("pub const X = 1;").is_ok());
    }

    #[test]
    fn does_not_flag_struct_fields_even_when_container_is_unused() {
        let err = lint("const Foo = struct { bar: u32 };").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                // Foo itself is unused and private, so it is flagged; `bar`
                // is a member symbol and must never be, regardless.
                assert!(diags.iter().all(|d| {
                    !d.message.as_str().contains('`') || d.message.as_str().contains("Foo")
                }));
            }
            _ => panic!(),
        }
    }
}
