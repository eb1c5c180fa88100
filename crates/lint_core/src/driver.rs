//! The lint driver (spec §2 component 11, §4.6): orchestrates global
//! disable-directive filtering and the three visit passes, isolating
//! per-rule failures so one broken rule can't abort a file's run.

use crate::config::LintConfig;
use crate::context::{FixMode, LintContext};
use crate::directives::{self, next_line_disables, GlobalFilter};
use crate::fixer::FixPlan;
use crate::registry;
use crate::rule::Rule;
use lint_diagnostics::{Diagnostic, Severity};
use lint_semantic::Semantic;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Top-level driver error taxonomy (spec §7 items 3 and 5; item 2
/// `ParseFailed`/item 3 `AnalysisFailed` surface from `lint_semantic::build`
/// and are represented by [`DriverError::Analysis`] here since the driver
/// never sees a `Semantic` to run against in that case).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("analysis failed before linting could run: {0}")]
    Analysis(#[from] lint_semantic::SemanticError),
    #[error("linting completed with {} diagnostic(s)", .0.len())]
    LintingFailed(Vec<Diagnostic>),
}

/// A completed driver run that emitted no diagnostics at all — including
/// the all-rules-disabled case (spec §4.6 step 1.3: "return immediately
/// with no diagnostics").
#[derive(Debug)]
pub struct LintSuccess {
    pub fix_plan: FixPlan,
}

pub struct LintDriver<'a> {
    config: &'a LintConfig,
    fix_mode: FixMode,
}

impl<'a> LintDriver<'a> {
    pub fn new(config: &'a LintConfig, fix_mode: FixMode) -> Self {
        LintDriver { config, fix_mode }
    }

    /// Run every configured (and not directive-disabled) rule over
    /// `semantic`'s three visitation passes (spec §4.6).
    pub fn run(&self, semantic: &Semantic) -> Result<LintSuccess, DriverError> {
        let parsed = directives::parse_directives(semantic);

        // Step 1: global disable filtering.
        if let GlobalFilter::DisableAll = directives::resolve_global_filter(&parsed.global) {
            return Ok(LintSuccess { fix_plan: FixPlan::new() });
        }
        let globally_disabled = match directives::resolve_global_filter(&parsed.global) {
            GlobalFilter::DisableNamed(names) => names,
            GlobalFilter::DisableAll => unreachable!("handled above"),
        };

        let effective_rules = self.effective_rule_list(&globally_disabled);

        // Step 2: three passes, rules outer, nodes/symbols inner (spec §4.6
        // "deliberate cache-locality choice").
        let mut diagnostics = Vec::new();
        let mut fix_plan = FixPlan::new();

        for rule in &effective_rules {
            let meta = rule.meta();
            let configured_severity = self.config.severity_for(meta.name);
            let effective_severity = configured_severity.unwrap_or(meta.default_severity);
            if effective_severity == Severity::Off {
                continue;
            }

            let mut ctx = LintContext::new(
                semantic,
                meta.name,
                meta.default_severity,
                configured_severity,
                self.fix_mode,
            );

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                rule.run_once(semantic, &mut ctx);
                for node in semantic.tree.iter_indices() {
                    if self.node_is_directive_suppressed(semantic, &parsed, node, meta.name) {
                        continue;
                    }
                    rule.run_on_node(node, semantic, &mut ctx);
                }
                for symbol in semantic.symbols.iter() {
                    if self.symbol_is_directive_suppressed(semantic, &parsed, symbol, meta.name) {
                        continue;
                    }
                    rule.run_on_symbol(symbol, semantic, &mut ctx);
                }
            }));

            match outcome {
                Ok(()) => {
                    let (rule_diagnostics, rule_fixes) = ctx.into_parts();
                    diagnostics.extend(rule_diagnostics);
                    fix_plan.extend(rule_fixes);
                }
                Err(payload) => {
                    // Step 3: failure isolation (spec §4.6, §7 item 4).
                    let reason = panic_message(&payload);
                    diagnostics.push(Diagnostic::error(
                        meta.name,
                        format!("Rule '{}' failed to run: {}", meta.name, reason),
                    ));
                }
            }
        }

        // Step 4.
        if diagnostics.is_empty() {
            Ok(LintSuccess { fix_plan })
        } else {
            Err(DriverError::LintingFailed(diagnostics))
        }
    }

    fn effective_rule_list(&self, globally_disabled: &[String]) -> Vec<Box<dyn Rule>> {
        let configured_names: Vec<String> = if self.config.rules.is_empty() {
            registry::all_rules().iter().map(|r| r.meta().name.to_string()).collect()
        } else {
            self.config.enabled_rule_names().into_iter().map(str::to_string).collect()
        };

        registry::all_rules()
            .into_iter()
            .filter(|r| {
                let name = r.meta().name;
                configured_names.iter().any(|n| n == name)
                    && !globally_disabled.iter().any(|n| n == name)
            })
            .collect()
    }

    fn node_is_directive_suppressed(
        &self,
        semantic: &Semantic,
        parsed: &directives::ParsedDirectives,
        node: lint_syntax::NodeIndex,
        rule_name: &str,
    ) -> bool {
        if parsed.next_line.is_empty() {
            return false;
        }
        let span = semantic.span_for_node(node);
        let (line, _) = semantic.source.line_column(span.start);
        next_line_disables(&parsed.next_line, line, rule_name)
    }

    /// Same check as [`Self::node_is_directive_suppressed`], but for the
    /// `run_on_symbol` pass: a symbol has no node index of its own, so the
    /// directive is applied against its declaring node's line instead.
    /// Without this, `// lint-disable-next-line` above a declaration never
    /// suppresses any symbol-pass rule (`unused-symbol`,
    /// `shadowed-parameter`, `missing-doc-comment`,
    /// `discarded-catch-payload`).
    fn symbol_is_directive_suppressed(
        &self,
        semantic: &Semantic,
        parsed: &directives::ParsedDirectives,
        symbol: lint_semantic::SymbolId,
        rule_name: &str,
    ) -> bool {
        if parsed.next_line.is_empty() {
            return false;
        }
        let decl = semantic.symbols.decl_of(symbol);
        self.node_is_directive_suppressed(semantic, parsed, decl, rule_name)
    }
}

/// Build the semantic model for `source` then run the driver over it in one
/// step (spec §2 dataflow: "source text → ... → semantic model → lint
/// driver → diagnostics"). [`LintDriver::run`] still takes an
/// already-built [`Semantic`] directly for callers (rule unit tests,
/// mostly) that build their own; this is the convenience path a CLI
/// driving the engine end-to-end wants, and is what makes
/// [`DriverError::Analysis`] reachable outside of hand-constructed tests.
pub fn lint_source(
    source: &lint_diagnostics::SourceFile,
    config: &LintConfig,
    fix_mode: FixMode,
) -> Result<LintSuccess, DriverError> {
    let semantic = lint_semantic::build(source)?;
    LintDriver::new(config, fix_mode).run(&semantic)
}

fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_semantic::build;
    use lint_diagnostics::SourceFile;

    fn semantic_for(src: &str) -> Semantic {
        build(&SourceFile::new(src, None)).expect("clean build")
    }

    #[test]
    fn empty_config_runs_every_rule_and_succeeds_on_clean_source() {
        let semantic = semantic_for("pub const Foo = struct { bar: u32 };");
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        // `Foo` is `pub` so `unused-symbol` exempts it; `bar` is a member,
        // not a local variable, so it was never a candidate either.
        let result = driver.run(&semantic);
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn global_disable_directive_suppresses_everything() {
        let semantic = semantic_for("// lint-disable\nconst x = 1;\n");
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        assert!(driver.run(&semantic).is_ok());
    }

    #[test]
    fn unused_local_variable_is_reported() {
        let semantic = semantic_for("fn f() void { const x = 1; }");
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        let err = driver.run(&semantic).unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "unused-symbol"));
            }
            _ => panic!("expected LintingFailed"),
        }
    }

    #[test]
    fn named_global_disable_suppresses_only_that_rule() {
        let semantic = semantic_for("// lint-disable unused-symbol\nfn f() void { const x = 1; }");
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        assert!(driver.run(&semantic).is_ok());
    }

    #[test]
    fn off_by_default_rule_does_not_fail_a_clean_file() {
        // `discarded-catch-payload` defaults to `Severity::Off`; an empty
        // config leaves it unconfigured, so `configured_severity` is
        // `None` and only falling back to `meta.default_severity` (rather
        // than treating `None` as "on") skips invoking it.
        let semantic = semantic_for("fn f() void { foo() catch |err| {}; }");
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        let result = driver.run(&semantic);
        assert!(result.is_ok(), "{:?}", result.err());
    }

    #[test]
    fn next_line_directive_suppresses_a_symbol_pass_rule() {
        // `unused-symbol` fires from `run_on_symbol`, not `run_on_node`; a
        // next-line directive must still reach it via the symbol's
        // declaring node's line.
        let semantic = semantic_for(
            "fn f() void {\n    // lint-disable-next-line unused-symbol\n    const x = 1;\n}",
        );
        let config = LintConfig::new();
        let driver = LintDriver::new(&config, FixMode::Disabled);
        assert!(driver.run(&semantic).is_ok());
    }

    #[test]
    fn lint_source_builds_and_runs_in_one_step() {
        let source = SourceFile::new("fn f() void { const x = 1; }", None);
        let config = LintConfig::new();
        let err = lint_source(&source, &config, FixMode::Disabled).unwrap_err();
        match err {
            DriverError::LintingFailed(diags) => {
                assert!(diags.iter().any(|d| d.code.as_str() == "unused-symbol"));
            }
            _ => panic!("expected LintingFailed"),
        }
    }

    #[test]
    fn lint_source_surfaces_analysis_failure() {
        let source = SourceFile::new("}}} nonsense ;;; {{{", None);
        let config = LintConfig::new();
        let err = lint_source(&source, &config, FixMode::Disabled).unwrap_err();
        assert!(matches!(err, DriverError::Analysis(_)));
    }
}
