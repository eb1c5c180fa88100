//! `missing-doc-comment`: a `pub` declaration with no doc comment (`///`)
//! directly above it. Doc comments are surfaced as real tokens by the
//! lexer (spec §4.1: "doc comments ... are also comments (*and* are
//! surfaced as tokens)"), so "directly above" is exactly "the token
//! immediately preceding this declaration's main token is a doc comment".

use crate::rule_prelude::*;
use lint_syntax::TokenIndex;
use lint_syntax::TokenKind;

declare_rule! {
    /// Flags a `pub` binding with no doc comment immediately above it.
    MissingDocComment,
    id = 30,
    name = "missing-doc-comment",
    category = Category::Style,
    severity = Severity::Notice
}

impl Rule for MissingDocComment {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_symbol(&self, symbol: SymbolId, semantic: &Semantic, ctx: &mut LintContext) {
        if semantic.symbols.visibility(symbol) != Visibility::Public {
            return;
        }
        let name = semantic.symbol_name(symbol);
        if name.is_empty() {
            return;
        }

        let decl = semantic.symbols.decl_of(symbol);
        let main_token = semantic.tree.node(decl).main_token;
        let has_doc = main_token
            .0
            .checked_sub(1)
            .map(|prev| semantic.tree.token(TokenIndex(prev)).kind == TokenKind::DocComment)
            .unwrap_or(false);
        if has_doc {
            return;
        }

        let span = match semantic.symbols.token(symbol) {
            Some(token) => ctx.span_for_token(token),
            None => ctx.span_for_node(decl),
        };
        ctx.report(
            Diagnostic::notice(
                self.meta().name,
                format!("`{}` is public but has no doc comment", name),
            )
            .primary(span, "missing `///` above this declaration"),
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
    fn flags_undocumented_pub_const() {
        let err = lint("pub const x = 1;").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "missing-doc-comment"));
            }
            _ => panic!(),
        }
    }

    #[test]
    fn does_not_flag_documented_pub_const() {
        assert!(lint("/// the answer\npub const x = 1;").is_ok());
    }

    #[test]
    fn does_not_flag_private_declarations() {
        let semantic =
            build(&SourceFile::new("/// doc\npub const y = 1;\nconst x = y;", None)).unwrap();
        let config = LintConfig::new();
        let result = LintDriver::new(&config, FixMode::Disabled).run(&semantic);
        if let Err(DriverError::LintingFailed(diags)) = result {
            assert!(!diags
                .iter()
                .any(|d| d.code.as_str() == "missing-doc-comment"));
        }
    }
}
