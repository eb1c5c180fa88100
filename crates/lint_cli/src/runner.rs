//! Per-file lint execution, scheduled across files with `rayon` (spec §5:
//! "the CLI/front-end may run multiple files in parallel by giving each its
//! own semantic model and driver ... because the core is pure data-in-
//! data-out, this is safe without coordination"). Each file gets its own
//! `SourceFile`, `Semantic`, and `LintDriver` — no state crosses the
//! boundary between files.

use lint_core::config::LintConfig;
use lint_core::context::FixMode;
use lint_core::driver::{self, DriverError};
use lint_core::fixer::FixPlan;
use lint_diagnostics::{Diagnostic, SourceFile};
use rayon::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

pub struct FileReport {
    pub source: SourceFile,
    pub diagnostics: Vec<Diagnostic>,
    pub fix_plan: FixPlan,
}

/// Lint every file in `paths` in parallel, preserving each path's own
/// success/failure independently (spec §5 "Suspension & cancellation: ...
/// Cancellation ... is the collaborator's responsibility between files" —
/// one file's I/O error never aborts the others).
pub fn lint_files(
    paths: &[PathBuf],
    config: &LintConfig,
    fix: bool,
) -> Vec<(PathBuf, io::Result<FileReport>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), lint_one(path, config, fix)))
        .collect()
}

fn lint_one(path: &Path, config: &LintConfig, fix: bool) -> io::Result<FileReport> {
    let text = std::fs::read_to_string(path)?;
    let source = SourceFile::new(text, Some(path.display().to_string()));
    let fix_mode = if fix { FixMode::Enabled } else { FixMode::Disabled };

    let (diagnostics, fix_plan) = match driver::lint_source(&source, config, fix_mode) {
        Ok(success) => (Vec::new(), success.fix_plan),
        Err(DriverError::LintingFailed(diagnostics)) => (diagnostics, FixPlan::new()),
        Err(DriverError::Analysis(semantic_error)) => {
            let diagnostics = semantic_error
                .messages()
                .iter()
                .map(|message| Diagnostic::error("parse-error", message.clone()))
                .collect();
            (diagnostics, FixPlan::new())
        }
    };

    Ok(FileReport {
        source,
        diagnostics,
        fix_plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tmp(name: &str, contents: &str) -> PathBuf {
        use std::sync::atomic::{AtomicU32, Ordering};
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!("lint_cli_runner_test_{}_{}_{}", std::process::id(), n, name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn lints_a_single_clean_file() {
        let path = write_tmp("clean.zig", "pub const x = 1;\n");
        let config = LintConfig::new();
        let reports = lint_files(&[path.clone()], &config, false);
        assert_eq!(reports.len(), 1);
        let (_, result) = &reports[0];
        let report = result.as_ref().unwrap();
        assert!(report.diagnostics.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn reports_unused_symbol_across_parallel_files() {
        let a = write_tmp("a.zig", "fn f() void { const x = 1; }");
        let b = write_tmp("b.zig", "pub const y = 1;\n");
        let config = LintConfig::new();
        let reports = lint_files(&[a.clone(), b.clone()], &config, false);
        assert_eq!(reports.len(), 2);
        let a_diags = &reports.iter().find(|(p, _)| p == &a).unwrap().1.as_ref().unwrap().diagnostics;
        assert!(a_diags.iter().any(|d| d.code.as_str() == "unused-symbol"));
        fs::remove_file(a).ok();
        fs::remove_file(b).ok();
    }

    #[test]
    fn missing_file_reports_io_error_without_panicking() {
        let mut missing = std::env::temp_dir();
        missing.push("lint_cli_runner_test_does_not_exist.zig");
        let config = LintConfig::new();
        let reports = lint_files(&[missing], &config, false);
        assert!(reports[0].1.is_err());
    }
}
