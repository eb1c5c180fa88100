//! `discarded-catch-payload`: a `catch |err|` payload that is bound but
//! never referenced in the catch body (spec §4.2 "Catch payload": `|name|`
//! declares a symbol with `s_catch_param` in the catch scope).
//!
//! This is deliberately a `restriction`-category rule, not `correctness`:
//! silently discarding an error payload is sometimes intentional (the
//! caller only cares that *some* error occurred), so it is opt-in rather
//! than on by default. `unused-symbol` never catches this case itself —
//! catch payloads carry `CATCH_PARAM`, not `VARIABLE` (spec §3 flags are
//! independent bits), so the two rules don't double-report the same
//! symbol.

use crate::rule_prelude::*;

declare_rule! {
    /// Flags a `catch |name|` payload with no recorded uses in its body.
    DiscardedCatchPayload,
    id = 40,
    name = "discarded-catch-payload",
    category = Category::Restriction,
    severity = Severity::Off
}

impl Rule for DiscardedCatchPayload {
    fn meta(&self) -> RuleMeta {
        Self::META
    }

    fn run_on_symbol(&self, symbol: SymbolId, semantic: &Semantic, ctx: &mut LintContext) {
        let flags = semantic.symbols.flags(symbol);
        if !flags.contains(SymbolFlags::CATCH_PARAM) {
            return;
        }
        if !semantic.symbols.references(symbol).is_empty() {
            return;
        }
        let name = semantic.symbol_name(symbol);
        if name.is_empty() || name == "_" {
            return;
        }

        let span = match semantic.symbols.token(symbol) {
            Some(token) => ctx.span_for_token(token),
            None => ctx.span_for_node(semantic.symbols.decl_of(symbol)),
        };

        ctx.report(
            Diagnostic::warning(
                self.meta().name,
                format!("caught error payload `{}` is never used", name),
            )
            .primary(span, "bound here")
            .help("use the payload, or discard it explicitly with `_`"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LintConfig, RuleConfigEntry};
    use crate::context::FixMode;
    use crate::driver::{DriverError, LintDriver};
    use lint_diagnostics::SourceFile;
    use lint_semantic::build;

    fn lint_with_rule_enabled(src: &str) -> Result<crate::driver::LintSuccess, DriverError> {
        let semantic = build(&SourceFile::new(src, None)).expect("clean build");
        let mut config = LintConfig::new();
        config.rules.push(RuleConfigEntry {
            rule: "discarded-catch-payload".to_string(),
            severity: Severity::Warning,
            options: serde_json::Value::Null,
        });
        LintDriver::new(&config, FixMode::Disabled).run(&semantic)
    }

    #[test]
    fn off_by_default() {
        let semantic = build(&SourceFile::new(
            "fn f() void { foo() catch |err| {}; }",
            None,
        ))
        .expect("clean build");
        let config = LintConfig::new();
        assert!(LintDriver::new(&config, FixMode::Disabled).run(&semantic).is_ok());
    }

    #[test]
    fn flags_unused_payload_when_enabled() {
        let err = lint_with_rule_enabled("fn f() void { foo() catch |err| {}; }").unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags
                    .iter()
                    .any(|d| d.code.as_str() == "discarded-catch-payload"));
            }
            _ => panic!("expected LintingFailed"),
        }
    }

    #[test]
    fn does_not_flag_used_payload() {
        assert!(lint_with_rule_enabled(
            "fn f() void { foo() catch |err| { log(err); }; }"
        )
        .is_ok());
    }

    #[test]
    fn underscore_discard_is_exempt() {
        assert!(lint_with_rule_enabled("fn f() void { foo() catch |_| {}; }").is_ok());
    }
}
